// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::MattingError;
use crate::media::ImageData;
use crate::ui::matting::component;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Result of a completed matting run.
#[derive(Debug, Clone)]
pub struct MattingOutcome {
    /// The composited cut-out.
    pub cutout: ImageData,
    /// Seconds the inference took, for the elapsed/estimated display.
    pub inference_secs: f32,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Matting(component::Message),
    Settings(settings::Message),
    SwitchScreen(Screen),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The source photograph was fetched and decoded.
    SourceFetched(Result<ImageData, MattingError>),
    /// Progress update during model download (0.0 - 1.0).
    ModelDownloadProgress(f32),
    /// Result from model download and verification.
    ModelDownloadCompleted(Result<(), String>),
    /// Result from the matting inference.
    MattingCompleted(Result<MattingOutcome, String>),
    /// Result from the open file dialog.
    UploadDialogResult(Option<PathBuf>),
    /// Result from the save dialog.
    SaveDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to process immediately on startup.
    pub file_path: Option<String>,
}
