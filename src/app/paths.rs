// SPDX-License-Identifier: MPL-2.0
//! Application data directory resolution.
//!
//! The data directory stores files the application downloads or generates
//! (currently the matting model). Resolution order:
//! 1. `ICED_MATTE_DATA_DIR` environment variable (tests, portable installs)
//! 2. Platform data directory (`~/.local/share/IcedMatte` on Linux)

use std::path::PathBuf;

const APP_DIR: &str = "IcedMatte";

/// Returns the application data directory, creating it when missing.
/// Returns `None` when no platform data directory can be resolved.
pub fn get_app_data_dir() -> Option<PathBuf> {
    let dir = if let Ok(overridden) = std::env::var("ICED_MATTE_DATA_DIR") {
        PathBuf::from(overridden)
    } else {
        dirs::data_dir()?.join(APP_DIR)
    };

    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::env_lock;
    use tempfile::tempdir;

    #[test]
    fn env_override_takes_precedence() {
        let _guard = env_lock().lock().expect("lock");
        let temp = tempdir().expect("temp dir");
        let previous = std::env::var("ICED_MATTE_DATA_DIR").ok();
        std::env::set_var("ICED_MATTE_DATA_DIR", temp.path());

        let dir = get_app_data_dir().expect("data dir");
        assert_eq!(dir, temp.path());

        if let Some(value) = previous {
            std::env::set_var("ICED_MATTE_DATA_DIR", value);
        } else {
            std::env::remove_var("ICED_MATTE_DATA_DIR");
        }
    }

    #[test]
    fn missing_override_directory_is_created() {
        let _guard = env_lock().lock().expect("lock");
        let temp = tempdir().expect("temp dir");
        let nested = temp.path().join("nested").join("data");
        let previous = std::env::var("ICED_MATTE_DATA_DIR").ok();
        std::env::set_var("ICED_MATTE_DATA_DIR", &nested);

        let dir = get_app_data_dir().expect("data dir");
        assert!(dir.exists());

        if let Some(value) = previous {
            std::env::set_var("ICED_MATTE_DATA_DIR", value);
        } else {
            std::env::remove_var("ICED_MATTE_DATA_DIR");
        }
    }
}
