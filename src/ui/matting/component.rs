// SPDX-License-Identifier: MPL-2.0
//! Matting widget state and update logic.

use crate::matting::Source;
use crate::media;
use crate::ui::matting::samples::{Thumbnails, SAMPLE_IMAGES};
use crate::ui::matting::stopwatch::Stopwatch;
use crate::ui::matting::view_state::ViewState;
use iced::widget::image;
use std::path::PathBuf;

/// Spinner rotation advance per stopwatch tick, in radians.
const SPINNER_SPEED: f32 = 0.05;

/// Messages emitted by the matting widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// A sample image button was pressed.
    SampleSelected(usize),
    /// The upload button was pressed.
    UploadRequested,
    /// The "New Image" button was pressed on the result screen.
    NewImageRequested,
    /// The download button was pressed on the result screen.
    DownloadRequested,
    /// A file is hovering over the window.
    DragEntered,
    /// The hovering file left the window.
    DragLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic stopwatch tick, delivered only while processing.
    StopwatchTick,
    /// A sample thumbnail finished fetching; `None` on failure.
    ThumbnailFetched {
        index: usize,
        handle: Option<image::Handle>,
    },
}

/// Side effects the application should perform after handling a widget
/// message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start processing the given source.
    Process(Source),
    /// Clear the result and return to the upload screen.
    Reset,
    /// Open the file-picker dialog.
    OpenUploadDialog,
    /// Open the save dialog for the current cut-out.
    OpenSaveDialog,
    /// Show a warning notification.
    ShowWarningNotification { key: &'static str },
}

/// Presentation state owned by the widget.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether a file is currently dragged over the window.
    is_dragging: bool,
    /// Elapsed-time display during processing.
    pub stopwatch: Stopwatch,
    /// Spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Fetched sample thumbnails.
    pub thumbnails: Thumbnails,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a widget message against the current derived view state.
    ///
    /// Drag events and sample selection are no-ops unless the upload screen
    /// is showing, so they cannot interfere with the processing or result
    /// screens.
    pub fn handle_message(&mut self, message: Message, view: ViewState) -> Effect {
        match message {
            Message::DragEntered => {
                if !view.shows_upload_screen() {
                    return Effect::None;
                }
                self.is_dragging = true;
                Effect::None
            }
            Message::DragLeft => {
                if !view.shows_upload_screen() {
                    return Effect::None;
                }
                self.is_dragging = false;
                Effect::None
            }
            Message::FileDropped(path) => {
                if !view.shows_upload_screen() {
                    return Effect::None;
                }
                self.is_dragging = false;
                if media::is_supported_image(&path) {
                    Effect::Process(Source::Path(path))
                } else {
                    Effect::ShowWarningNotification {
                        key: "notification-unsupported-file",
                    }
                }
            }
            Message::SampleSelected(index) => {
                if !view.shows_upload_screen() {
                    return Effect::None;
                }
                match SAMPLE_IMAGES.get(index) {
                    Some(sample) => Effect::Process(Source::Url(sample.url.to_string())),
                    None => Effect::None,
                }
            }
            Message::UploadRequested => {
                if !view.shows_upload_screen() {
                    return Effect::None;
                }
                Effect::OpenUploadDialog
            }
            Message::NewImageRequested => Effect::Reset,
            Message::DownloadRequested => Effect::OpenSaveDialog,
            Message::StopwatchTick => {
                self.stopwatch.tick();
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                Effect::None
            }
            Message::ThumbnailFetched { index, handle } => {
                if let Some(handle) = handle {
                    self.thumbnails.set(index, handle);
                }
                Effect::None
            }
        }
    }

    /// Stops and resets the stopwatch. Called by the application whenever
    /// processing ends, on any path.
    pub fn stop_stopwatch(&mut self) {
        self.stopwatch.reset();
        self.spinner_rotation = 0.0;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPLOAD: ViewState = ViewState::Upload;
    const PROCESSING: ViewState = ViewState::Processing;
    const RESULT: ViewState = ViewState::Result {
        reprocessing: false,
    };

    #[test]
    fn drag_events_toggle_flag_on_upload_screen() {
        let mut state = State::new();

        assert_eq!(state.handle_message(Message::DragEntered, UPLOAD), Effect::None);
        assert!(state.is_dragging());

        assert_eq!(state.handle_message(Message::DragLeft, UPLOAD), Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_events_are_ignored_off_upload_screen() {
        let mut state = State::new();

        state.handle_message(Message::DragEntered, PROCESSING);
        assert!(!state.is_dragging());

        state.handle_message(Message::DragEntered, RESULT);
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_on_upload_screen_processes_the_file_once() {
        let mut state = State::new();
        state.handle_message(Message::DragEntered, UPLOAD);

        let effect = state.handle_message(
            Message::FileDropped(PathBuf::from("/photos/cat.png")),
            UPLOAD,
        );

        assert_eq!(
            effect,
            Effect::Process(Source::Path(PathBuf::from("/photos/cat.png")))
        );
        assert!(!state.is_dragging(), "drop clears the dragging flag");
    }

    #[test]
    fn drop_off_upload_screen_is_inert() {
        let mut state = State::new();
        state.handle_message(Message::DragEntered, UPLOAD);
        assert!(state.is_dragging());

        let effect = state.handle_message(
            Message::FileDropped(PathBuf::from("/photos/cat.png")),
            PROCESSING,
        );

        assert_eq!(effect, Effect::None);
        assert!(
            state.is_dragging(),
            "flag must not change when the upload screen is not showing"
        );
    }

    #[test]
    fn drop_of_unsupported_file_warns_instead_of_processing() {
        let mut state = State::new();

        let effect = state.handle_message(
            Message::FileDropped(PathBuf::from("/videos/clip.mp4")),
            UPLOAD,
        );

        assert_eq!(
            effect,
            Effect::ShowWarningNotification {
                key: "notification-unsupported-file"
            }
        );
    }

    #[test]
    fn selecting_second_sample_processes_its_literal_url() {
        let mut state = State::new();

        let effect = state.handle_message(Message::SampleSelected(1), UPLOAD);

        assert_eq!(
            effect,
            Effect::Process(Source::Url(
                "https://images.unsplash.com/photo-1515886657613-9f3515b0c78f?ixlib=rb-4.0.3&q=85&fm=jpg&crop=entropy&cs=srgb&dl=dom-hill-nimElTcTNyY-unsplash.jpg&w=1920"
                    .to_string()
            ))
        );
    }

    #[test]
    fn sample_selection_is_inert_off_upload_screen() {
        let mut state = State::new();
        assert_eq!(state.handle_message(Message::SampleSelected(0), RESULT), Effect::None);
    }

    #[test]
    fn out_of_range_sample_is_ignored() {
        let mut state = State::new();
        assert_eq!(state.handle_message(Message::SampleSelected(42), UPLOAD), Effect::None);
    }

    #[test]
    fn upload_button_opens_dialog_only_on_upload_screen() {
        let mut state = State::new();
        assert_eq!(
            state.handle_message(Message::UploadRequested, UPLOAD),
            Effect::OpenUploadDialog
        );
        assert_eq!(
            state.handle_message(Message::UploadRequested, PROCESSING),
            Effect::None
        );
    }

    #[test]
    fn new_image_resets_and_download_saves() {
        let mut state = State::new();
        assert_eq!(
            state.handle_message(Message::NewImageRequested, RESULT),
            Effect::Reset
        );
        assert_eq!(
            state.handle_message(Message::DownloadRequested, RESULT),
            Effect::OpenSaveDialog
        );
    }

    #[test]
    fn stopwatch_ticks_increment_and_stop_resets() {
        let mut state = State::new();

        for _ in 0..5 {
            state.handle_message(Message::StopwatchTick, PROCESSING);
        }
        assert!((state.stopwatch.elapsed() - 0.05).abs() < 1e-6);
        assert!(state.spinner_rotation() > 0.0);

        state.stop_stopwatch();
        assert_eq!(state.stopwatch.elapsed(), 0.0);
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn fetched_thumbnails_are_stored_and_failures_ignored() {
        let mut state = State::new();
        let handle = iced::widget::image::Handle::from_rgba(1, 1, vec![0; 4]);

        state.handle_message(
            Message::ThumbnailFetched {
                index: 1,
                handle: Some(handle),
            },
            UPLOAD,
        );
        state.handle_message(
            Message::ThumbnailFetched {
                index: 2,
                handle: None,
            },
            UPLOAD,
        );

        assert!(state.thumbnails.get(1).is_some());
        assert!(state.thumbnails.get(2).is_none());
    }
}
