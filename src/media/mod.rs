// SPDX-License-Identifier: MPL-2.0
//! Image decoding, fetching, and encoding for the matting pipeline.
//!
//! The UI renders [`ImageData`], which couples an iced image handle with the
//! raw RGBA pixels the engine consumes. Source photographs arrive either as
//! local files (drag-and-drop, file dialog, CLI argument) or as HTTPS URLs
//! (sample images), so both fetch paths live here.

use crate::error::{MattingError, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// File extensions accepted as source photographs.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// A decoded image ready for both display and processing.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, shared with the engine.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Reconstructs a `DynamicImage` for the processing pipeline.
    ///
    /// # Panics
    ///
    /// Panics if the internal RGBA bytes are invalid (should never happen
    /// as bytes are validated at construction).
    #[must_use]
    pub fn to_dynamic(&self) -> image_rs::DynamicImage {
        let img = image_rs::RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .expect("RGBA bytes should be valid");
        image_rs::DynamicImage::ImageRgba8(img)
    }
}

/// Returns whether the path carries a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
        .unwrap_or(false)
}

/// Decodes encoded image bytes (PNG, JPEG, WebP) into [`ImageData`].
pub fn decode_bytes(bytes: &[u8]) -> std::result::Result<ImageData, MattingError> {
    let decoded = image_rs::load_from_memory(bytes)
        .map_err(|e| MattingError::DecodeFailed(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Reads and decodes a local image file.
pub fn load_file(path: &Path) -> std::result::Result<ImageData, MattingError> {
    let bytes = std::fs::read(path).map_err(|e| MattingError::Io(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Fetches image bytes over HTTPS.
pub async fn fetch_url(url: &str) -> std::result::Result<Vec<u8>, MattingError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedMatte/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| MattingError::FetchFailed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MattingError::FetchFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(MattingError::FetchFailed(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MattingError::FetchFailed(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Encodes the image as PNG bytes. PNG keeps the alpha channel, which is the
/// whole point of a cut-out.
pub fn encode_png(image: &ImageData) -> Result<Vec<u8>> {
    let dynamic = image.to_dynamic();
    let mut buffer = Cursor::new(Vec::new());
    dynamic.write_to(&mut buffer, image_rs::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Writes the image to disk as PNG.
pub fn save_png(image: &ImageData, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
