// SPDX-License-Identifier: MPL-2.0
//! Portrait-matting engine built on an ISNet-style segmentation model.
//!
//! This module provides functionality for:
//! - Downloading the matting ONNX model from a configurable URL
//! - Verifying model integrity with a BLAKE3 checksum
//! - Running inference and compositing the predicted alpha matte over the
//!   source pixels to produce a transparent cut-out

use crate::app::paths;
use crate::error::MattingError;

/// Filename for the downloaded matting model in the data directory.
const MODEL_FILENAME: &str = "isnet-general.onnx";

/// Square input resolution expected by the model.
const MODEL_INPUT_SIZE: u32 = 1024;

use image_rs::DynamicImage;
use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Result type for matting operations.
pub type MattingResult<T> = Result<T, MattingError>;

/// Status of the matting model.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelStatus {
    /// Model has not been downloaded.
    #[default]
    NotDownloaded,
    /// Model is currently being downloaded.
    Downloading { progress: f32 },
    /// Model is ready for use.
    Ready,
    /// An error occurred.
    Error(String),
}

/// Manager for the matting model.
///
/// Handles model lifecycle: download, verification, and inference.
pub struct MattingManager {
    model_path: PathBuf,
    session: Option<Session>,
}

impl Default for MattingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MattingManager {
    /// Creates a new `MattingManager` instance.
    pub fn new() -> Self {
        let model_path = get_model_path();
        Self {
            model_path,
            session: None,
        }
    }

    /// Loads the ONNX session from the model file.
    ///
    /// Must be called after the model is downloaded and verified. Loading an
    /// already-loaded session is a no-op.
    pub fn load_session(&mut self) -> MattingResult<()> {
        if self.session.is_some() {
            return Ok(());
        }

        if !self.model_path.exists() {
            return Err(MattingError::ModelNotFound);
        }

        let session = Session::builder()
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?
            .commit_from_file(&self.model_path)
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        self.session = Some(session);
        Ok(())
    }

    /// Checks if the ONNX session is loaded and ready.
    pub fn is_session_ready(&self) -> bool {
        self.session.is_some()
    }

    /// Runs matting inference and returns the cut-out.
    ///
    /// The source image is resized to the model's square input, the predicted
    /// matte is resized back to the source dimensions, and the matte becomes
    /// the alpha channel of the original pixels.
    pub fn remove_background(&mut self, image: &DynamicImage) -> MattingResult<DynamicImage> {
        let session = self
            .session
            .as_mut()
            .ok_or(MattingError::SessionNotInitialized)?;

        // Preprocess: DynamicImage -> NCHW tensor (RGB, normalized, square)
        let input_tensor = preprocess_image(image)?;
        let input_tensor = input_tensor.as_standard_layout().into_owned();

        // ISNet exports name their single input 'input'; fall back to the
        // session metadata when the export differs.
        let input_name = session
            .inputs()
            .first()
            .map_or_else(|| "input".to_string(), |i| i.name().to_string());

        let input_ref = ort::value::TensorRef::from_array_view(&input_tensor)
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        let outputs = session
            .run(ort::inputs![input_name.as_str() => input_ref])
            .map_err(|e| MattingError::InferenceFailed(e.to_string()))?;

        // Postprocess: single-channel matte -> alpha channel of the source
        let (matte, matte_width, matte_height) = extract_matte(&outputs)?;
        let cutout = apply_alpha_matte(image, &matte, matte_width, matte_height)?;
        Ok(DynamicImage::ImageRgba8(cutout))
    }
}

/// Returns the path where the matting model should be stored.
pub fn get_model_path() -> PathBuf {
    paths::get_app_data_dir().map_or_else(
        || PathBuf::from(MODEL_FILENAME),
        |mut p| {
            p.push(MODEL_FILENAME);
            p
        },
    )
}

/// Minimum expected model size (40 MB) to detect failed downloads.
const MIN_MODEL_SIZE_BYTES: u64 = 40_000_000;

/// Checks if the model file exists at the expected location with valid size.
pub fn is_model_downloaded() -> bool {
    let path = get_model_path();
    if !path.exists() {
        return false;
    }
    // Also check file size to detect incomplete downloads
    match std::fs::metadata(&path) {
        Ok(meta) => meta.len() >= MIN_MODEL_SIZE_BYTES,
        Err(_) => false,
    }
}

/// Downloads the model from the specified URL.
///
/// Returns the number of bytes downloaded.
pub async fn download_model(
    url: &str,
    mut progress_callback: impl FnMut(f32) + Send,
) -> MattingResult<u64> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedMatte/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| MattingError::DownloadFailed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MattingError::DownloadFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(MattingError::DownloadFailed(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);

    // A tiny response body is an error page, not the model.
    if total_size > 0 && total_size < MIN_MODEL_SIZE_BYTES {
        return Err(MattingError::DownloadFailed(format!(
            "Response too small ({total_size} bytes), expected model file. \
             URL may have changed or returned an error page."
        )));
    }

    let model_path = get_model_path();

    if let Some(parent) = model_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MattingError::Io(e.to_string()))?;
    }

    let mut file =
        std::fs::File::create(&model_path).map_err(|e| MattingError::Io(e.to_string()))?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| MattingError::DownloadFailed(e.to_string()))?;
        std::io::Write::write_all(&mut file, &chunk).map_err(|e| MattingError::Io(e.to_string()))?;

        downloaded += chunk.len() as u64;

        if total_size > 0 {
            let progress = downloaded as f32 / total_size as f32;
            progress_callback(progress);
        }
    }

    if downloaded < MIN_MODEL_SIZE_BYTES {
        // Delete the incomplete/invalid file
        let _ = std::fs::remove_file(&model_path);
        return Err(MattingError::DownloadFailed(format!(
            "Downloaded file too small ({downloaded} bytes)"
        )));
    }

    Ok(downloaded)
}

/// Verifies the model file integrity using a BLAKE3 hash.
pub fn verify_checksum(expected_hash: &str) -> MattingResult<()> {
    let model_path = get_model_path();
    if !model_path.exists() {
        return Err(MattingError::ModelNotFound);
    }

    let file_data = std::fs::read(&model_path).map_err(|e| MattingError::Io(e.to_string()))?;
    let actual_hash = blake3::hash(&file_data).to_hex().to_string();

    if actual_hash != expected_hash {
        return Err(MattingError::ChecksumMismatch {
            expected: expected_hash.to_string(),
            actual: actual_hash,
        });
    }

    Ok(())
}

/// Preprocesses an image for matting inference.
///
/// Converts to NCHW format (batch=1, channels=3, height, width) at the
/// model's square input size, RGB color order, normalized with the ISNet
/// mean of 0.5 and unit standard deviation.
pub fn preprocess_image(img: &DynamicImage) -> MattingResult<Array4<f32>> {
    let rgb = img.to_rgb8();
    let resized = image_rs::imageops::resize(
        &rgb,
        MODEL_INPUT_SIZE,
        MODEL_INPUT_SIZE,
        image_rs::imageops::FilterType::Triangle,
    );

    let side = MODEL_INPUT_SIZE as usize;
    let mut tensor = Array4::<f32>::zeros((1, 3, side, side));

    for (x, y, pixel) in resized.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        tensor[[0, 0, y as usize, x as usize]] = r as f32 / 255.0 - 0.5;
        tensor[[0, 1, y as usize, x as usize]] = g as f32 / 255.0 - 0.5;
        tensor[[0, 2, y as usize, x as usize]] = b as f32 / 255.0 - 0.5;
    }

    Ok(tensor)
}

/// Extracts the single-channel matte from the session outputs, normalized to
/// the 0-1 range. ISNet exposes several side outputs; the first one is the
/// finest prediction.
fn extract_matte(
    outputs: &ort::session::SessionOutputs<'_>,
) -> MattingResult<(Vec<f32>, u32, u32)> {
    let (_, output) = outputs
        .iter()
        .next()
        .ok_or_else(|| MattingError::PostprocessingFailed("No output tensor".to_string()))?;

    let (shape, data) = output
        .try_extract_tensor::<f32>()
        .map_err(|e: ort::Error| MattingError::PostprocessingFailed(e.to_string()))?;

    // Shape is NCHW: [batch, 1, height, width]
    if shape.len() != 4 {
        return Err(MattingError::PostprocessingFailed(format!(
            "Expected 4D tensor, got {}D",
            shape.len()
        )));
    }

    let height = shape[2] as usize;
    let width = shape[3] as usize;
    let matte = normalize_matte(&data[..height * width]);

    Ok((matte, width as u32, height as u32))
}

/// Min-max normalizes raw matte logits into the 0-1 range.
///
/// ISNet outputs are close to but not exactly sigmoid-bounded; without this
/// step dark halos remain around the subject.
pub fn normalize_matte(values: &[f32]) -> Vec<f32> {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    if !min.is_finite() || !max.is_finite() || (max - min).abs() < f32::EPSILON {
        return values.iter().map(|v| v.clamp(0.0, 1.0)).collect();
    }

    let range = max - min;
    values.iter().map(|v| (v - min) / range).collect()
}

/// Applies a matte as the alpha channel of the source image.
///
/// The matte is resized to the source dimensions; source pixels keep their
/// color while the matte controls opacity.
pub fn apply_alpha_matte(
    image: &DynamicImage,
    matte: &[f32],
    matte_width: u32,
    matte_height: u32,
) -> MattingResult<image_rs::RgbaImage> {
    if matte.len() != (matte_width * matte_height) as usize {
        return Err(MattingError::PostprocessingFailed(format!(
            "Matte size mismatch: {} values for {}x{}",
            matte.len(),
            matte_width,
            matte_height
        )));
    }

    let gray_pixels: Vec<u8> = matte
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0) as u8)
        .collect();
    let gray = image_rs::GrayImage::from_raw(matte_width, matte_height, gray_pixels)
        .ok_or_else(|| MattingError::PostprocessingFailed("Failed to build matte".to_string()))?;

    let (width, height) = (image.width(), image.height());
    let resized_matte = if (matte_width, matte_height) == (width, height) {
        gray
    } else {
        image_rs::imageops::resize(
            &gray,
            width,
            height,
            image_rs::imageops::FilterType::Triangle,
        )
    };

    let mut cutout = image.to_rgba8();
    for (x, y, pixel) in cutout.enumerate_pixels_mut() {
        let alpha = resized_matte.get_pixel(x, y).0[0];
        // Combine with any alpha the source already had.
        let source_alpha = pixel.0[3] as u16;
        pixel.0[3] = ((alpha as u16 * source_alpha) / 255) as u8;
    }

    Ok(cutout)
}

/// Thread-safe wrapper for `MattingManager`.
pub type SharedMattingManager = Arc<Mutex<MattingManager>>;

/// Creates a new shared `MattingManager` instance.
pub fn create_shared_manager() -> SharedMattingManager {
    Arc::new(Mutex::new(MattingManager::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_path_ends_with_filename() {
        let path = get_model_path();
        assert!(path.to_string_lossy().contains(MODEL_FILENAME));
    }

    #[test]
    fn model_status_defaults_to_not_downloaded() {
        let status = ModelStatus::default();
        assert_eq!(status, ModelStatus::NotDownloaded);
    }

    #[test]
    fn manager_starts_without_session() {
        let manager = MattingManager::new();
        assert!(!manager.is_session_ready());
    }

    #[test]
    fn preprocess_produces_square_nchw_tensor() {
        let img = DynamicImage::new_rgb8(1920, 1080);
        let tensor = preprocess_image(&img).unwrap();
        assert_eq!(
            tensor.shape(),
            &[1, 3, MODEL_INPUT_SIZE as usize, MODEL_INPUT_SIZE as usize]
        );
    }

    #[test]
    fn preprocess_centers_values_around_zero() {
        let mut img = image_rs::RgbImage::new(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = image_rs::Rgb([255, 128, 0]);
        }
        let tensor = preprocess_image(&DynamicImage::ImageRgb8(img)).unwrap();

        assert!((tensor[[0, 0, 0, 0]] - 0.5).abs() < 0.01); // 255 -> 0.5
        assert!(tensor[[0, 1, 0, 0]].abs() < 0.01); // 128 -> ~0.0
        assert!((tensor[[0, 2, 0, 0]] + 0.5).abs() < 0.01); // 0 -> -0.5
    }

    #[test]
    fn normalize_matte_spans_full_range() {
        let normalized = normalize_matte(&[2.0, 4.0, 6.0]);
        assert!((normalized[0] - 0.0).abs() < f32::EPSILON);
        assert!((normalized[1] - 0.5).abs() < f32::EPSILON);
        assert!((normalized[2] - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn normalize_matte_with_flat_input_clamps() {
        let normalized = normalize_matte(&[1.7, 1.7]);
        assert!(normalized.iter().all(|v| (*v - 1.0).abs() < f32::EPSILON));
    }

    #[test]
    fn alpha_matte_maps_extremes_to_transparent_and_opaque() {
        let img = DynamicImage::new_rgb8(2, 1);
        let cutout = apply_alpha_matte(&img, &[0.0, 1.0], 2, 1).unwrap();

        assert_eq!(cutout.get_pixel(0, 0).0[3], 0);
        assert_eq!(cutout.get_pixel(1, 0).0[3], 255);
    }

    #[test]
    fn alpha_matte_preserves_source_dimensions() {
        let img = DynamicImage::new_rgb8(64, 48);
        let matte = vec![0.5_f32; 16 * 16];
        let cutout = apply_alpha_matte(&img, &matte, 16, 16).unwrap();

        assert_eq!(cutout.dimensions(), (64, 48));
    }

    #[test]
    fn alpha_matte_respects_existing_transparency() {
        let mut rgba = image_rs::RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image_rs::Rgba([10, 20, 30, 0]));
        let img = DynamicImage::ImageRgba8(rgba);

        let cutout = apply_alpha_matte(&img, &[1.0], 1, 1).unwrap();
        assert_eq!(cutout.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn alpha_matte_rejects_mismatched_sizes() {
        let img = DynamicImage::new_rgb8(2, 2);
        let result = apply_alpha_matte(&img, &[0.5; 3], 2, 2);
        assert!(matches!(
            result,
            Err(MattingError::PostprocessingFailed(_))
        ));
    }

    #[test]
    fn remove_background_without_session_fails() {
        let mut manager = MattingManager::new();
        let img = DynamicImage::new_rgb8(4, 4);
        let result = manager.remove_background(&img);
        assert!(matches!(result, Err(MattingError::SessionNotInitialized)));
    }
}
