// SPDX-License-Identifier: MPL-2.0
//! Background-removal state and operations.
//!
//! The widget in `ui::matting` never talks to the engine directly: it reads
//! flags from [`Context`] and asks for work through `process_image` /
//! `reset_state`. The engine side ([`engine`]) owns the model lifecycle and
//! the ONNX inference that turns a photograph into a cut-out.

pub mod context;
pub mod engine;

pub use context::Context;
pub use engine::{MattingManager, ModelStatus, SharedMattingManager};

use std::path::PathBuf;

/// A reference the engine can resolve into image bytes: either a local file
/// or an HTTPS URL (sample images).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Human-oriented description used in window titles.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self {
            Source::Path(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(String::from),
            Source::Url(_) => None,
        }
    }
}
