// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    Matting(MattingError),
}

/// Specific error types for the background-removal pipeline.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum MattingError {
    /// Model file not found at the expected path.
    ModelNotFound,
    /// Failed to download the model.
    DownloadFailed(String),
    /// Model checksum verification failed.
    ChecksumMismatch { expected: String, actual: String },
    /// Fetching the source image (file or URL) failed.
    FetchFailed(String),
    /// Source bytes could not be decoded as an image.
    DecodeFailed(String),
    /// ONNX inference failed.
    InferenceFailed(String),
    /// Image preprocessing failed.
    PreprocessingFailed(String),
    /// Mask postprocessing or compositing failed.
    PostprocessingFailed(String),
    /// IO error occurred.
    Io(String),
    /// Model session not initialized.
    SessionNotInitialized,
}

impl MattingError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            MattingError::FetchFailed(_) | MattingError::DecodeFailed(_) => {
                "notification-unsupported-file"
            }
            _ => "notification-process-error",
        }
    }
}

impl fmt::Display for MattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MattingError::ModelNotFound => write!(f, "Model file not found"),
            MattingError::DownloadFailed(msg) => write!(f, "Download failed: {msg}"),
            MattingError::ChecksumMismatch { expected, actual } => {
                write!(f, "Checksum mismatch: expected {expected}, got {actual}")
            }
            MattingError::FetchFailed(msg) => write!(f, "Fetch failed: {msg}"),
            MattingError::DecodeFailed(msg) => write!(f, "Decode failed: {msg}"),
            MattingError::InferenceFailed(msg) => write!(f, "Inference failed: {msg}"),
            MattingError::PreprocessingFailed(msg) => write!(f, "Preprocessing failed: {msg}"),
            MattingError::PostprocessingFailed(msg) => write!(f, "Postprocessing failed: {msg}"),
            MattingError::Io(msg) => write!(f, "IO error: {msg}"),
            MattingError::SessionNotInitialized => write!(f, "ONNX session not initialized"),
        }
    }
}

impl std::error::Error for MattingError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Matting(e) => write!(f, "Matting Error: {}", e),
        }
    }
}

impl From<MattingError> for Error {
    fn from(err: MattingError) -> Self {
        Error::Matting(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn matting_error_converts_to_error() {
        let err: Error = MattingError::ModelNotFound.into();
        assert!(matches!(err, Error::Matting(MattingError::ModelNotFound)));
    }

    #[test]
    fn matting_error_display() {
        let err = MattingError::ChecksumMismatch {
            expected: "aa".into(),
            actual: "bb".into(),
        };
        let text = format!("{}", err);
        assert!(text.contains("aa"));
        assert!(text.contains("bb"));
    }

    #[test]
    fn fetch_and_decode_errors_map_to_file_notification() {
        assert_eq!(
            MattingError::FetchFailed("404".into()).i18n_key(),
            "notification-unsupported-file"
        );
        assert_eq!(
            MattingError::DecodeFailed("not an image".into()).i18n_key(),
            "notification-unsupported-file"
        );
        assert_eq!(
            MattingError::SessionNotInitialized.i18n_key(),
            "notification-process-error"
        );
    }
}
