// SPDX-License-Identifier: MPL-2.0
//! The background-removal demo widget.
//!
//! Renders exactly one of three mutually exclusive screens (upload,
//! processing, result) derived from the processing context, handles window
//! file drops, and owns the elapsed-time stopwatch. Business state lives in
//! [`crate::matting::Context`]; this component only keeps presentation state
//! (drag flag, stopwatch, sample thumbnails).

pub mod component;
pub mod samples;
pub mod stopwatch;
pub mod view;
pub mod view_state;

pub use component::{Effect, Message, State};
pub use view_state::ViewState;
