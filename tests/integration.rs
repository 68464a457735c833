// SPDX-License-Identifier: MPL-2.0
use iced_matte::config::{self, Config};
use iced_matte::i18n::fluent::I18n;
use iced_matte::matting::engine;
use iced_matte::matting::Context;
use iced_matte::matting::Source;
use iced_matte::media::{self, ImageData};
use image_rs::DynamicImage;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

/// Drives a full processing run at the context level, standing in for the
/// engine with a synthetic matte: fetch a real file from disk, run the
/// compositing path, and check the state the widget would render from.
#[test]
fn processing_run_round_trips_through_the_context() {
    let dir = tempdir().expect("temp dir");
    let photo_path = dir.path().join("photo.png");

    // A real PNG on disk, as a drop would supply.
    let rgb = image_rs::RgbImage::from_pixel(8, 6, image_rs::Rgb([200, 180, 160]));
    rgb.save(&photo_path).expect("write photo");

    let mut context = Context::new();
    assert!(context.process_image(Source::Path(photo_path.clone())));

    // Fetch stage.
    let fetched = media::load_file(&photo_path).expect("decode photo");
    assert_eq!((fetched.width, fetched.height), (8, 6));
    context.source_fetched(fetched.clone());

    // Inference stage, matte supplied synthetically.
    context.stage_running_inference();
    let matte = vec![1.0_f32; 8 * 6];
    let cutout = engine::apply_alpha_matte(&fetched.to_dynamic(), &matte, 8, 6)
        .expect("composite cut-out");
    let (width, height) = cutout.dimensions();
    context.finish(ImageData::from_rgba(width, height, cutout.into_vec()), 0.8);

    assert!(context.has_processed_image());
    assert!(!context.is_processing());
    assert!((context.inference_time() - 0.8).abs() < f32::EPSILON);

    // The cut-out survives a save/reload cycle with alpha intact.
    let out_path = dir.path().join("cutout.png");
    media::save_png(context.processed_image().expect("cutout"), &out_path)
        .expect("save cutout");
    let reloaded = media::load_file(&out_path).expect("reload cutout");
    assert_eq!((reloaded.width, reloaded.height), (8, 6));
}

#[test]
fn matte_pipeline_handles_non_square_sources() {
    let photo = DynamicImage::new_rgb8(37, 91);
    let tensor = engine::preprocess_image(&photo).expect("preprocess");
    assert_eq!(tensor.shape()[0], 1);
    assert_eq!(tensor.shape()[1], 3);

    let matte = engine::normalize_matte(&vec![0.3_f32; 16 * 16]);
    let cutout = engine::apply_alpha_matte(&photo, &matte, 16, 16).expect("composite");
    assert_eq!(cutout.dimensions(), (37, 91));
}

#[test]
fn unsupported_sources_are_detected_before_processing() {
    assert!(media::is_supported_image(&PathBuf::from("a.webp")));
    assert!(!media::is_supported_image(&PathBuf::from("a.gif")));
    assert!(!media::is_supported_image(&PathBuf::from("archive.tar.gz")));
}
