// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window file-hover and drop events feed the widget's drag-and-drop
//! handling; the stopwatch and notification timers are conditional
//! subscriptions that the runtime tears down whenever their condition turns
//! false, which guarantees no timer outlives the state it serves.

use super::{Message, Screen};
use crate::ui::matting::{component, stopwatch};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window drag-and-drop events to the matting widget.
///
/// Only active on the matting screen; the widget then decides whether the
/// events are live (upload screen) or inert (processing/result screens).
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    if screen != Screen::Matting {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileHovered(_)) = &event {
            return Some(Message::Matting(component::Message::DragEntered));
        }

        if let event::Event::Window(iced::window::Event::FilesHoveredLeft) = &event {
            return Some(Message::Matting(component::Message::DragLeft));
        }

        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::Matting(component::Message::FileDropped(
                path.clone(),
            )));
        }

        None
    })
}

/// Creates the 10 ms stopwatch tick, alive only while processing.
///
/// Dropping the subscription on `is_processing = false` is what resets and
/// halts the stopwatch on every exit path, including app teardown.
pub fn create_stopwatch_subscription(is_processing: bool) -> Subscription<Message> {
    if is_processing {
        time::every(stopwatch::TICK_INTERVAL)
            .map(|_| Message::Matting(component::Message::StopwatchTick))
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
