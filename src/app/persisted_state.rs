// SPDX-License-Identifier: MPL-2.0
//! Persisted application state, separate from user preferences.
//!
//! Unlike `settings.toml`, this file records incidental state the user never
//! edits: the directories of the last opened and last saved images, so file
//! dialogs reopen where the user left off.

use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.toml";

/// Incidental application state persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppState {
    /// Directory of the last image opened through the file dialog or a drop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_open_directory: Option<PathBuf>,

    /// Directory where the last cut-out was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the persisted state, returning defaults together with a
    /// notification key when the file exists but cannot be parsed.
    pub fn load() -> (Self, Option<&'static str>) {
        let Some(path) = state_path() else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }
        match fs::read_to_string(&path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
        {
            Some(state) => (state, None),
            None => (Self::default(), Some("notification-state-load-error")),
        }
    }

    /// Saves the state, returning a notification key on failure.
    pub fn save(&self) -> Option<&'static str> {
        let path = state_path()?;
        let contents = match toml::to_string_pretty(self) {
            Ok(contents) => contents,
            Err(_) => return Some("notification-state-save-error"),
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-save-error");
            }
        }
        match fs::write(&path, contents) {
            Ok(()) => None,
            Err(_) => Some("notification-state-save-error"),
        }
    }

    /// Records the parent directory of a file that was just opened.
    pub fn set_last_open_directory_from_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    /// Records the parent directory of a file that was just saved.
    pub fn set_last_save_directory_from_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_save_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_path() -> Option<PathBuf> {
    paths::get_app_data_dir().map(|dir| dir.join(STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::env_lock;
    use tempfile::tempdir;

    fn with_temp_data_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = env_lock().lock().expect("lock");
        let temp = tempdir().expect("temp dir");
        let previous = std::env::var("ICED_MATTE_DATA_DIR").ok();
        std::env::set_var("ICED_MATTE_DATA_DIR", temp.path());

        test(temp.path());

        if let Some(value) = previous {
            std::env::set_var("ICED_MATTE_DATA_DIR", value);
        } else {
            std::env::remove_var("ICED_MATTE_DATA_DIR");
        }
    }

    #[test]
    fn state_round_trips() {
        with_temp_data_dir(|_| {
            let mut state = AppState::default();
            state.set_last_open_directory_from_file(Path::new("/photos/cat.png"));
            state.set_last_save_directory_from_file(Path::new("/exports/cutout.png"));
            assert!(state.save().is_none());

            let (loaded, warning) = AppState::load();
            assert!(warning.is_none());
            assert_eq!(
                loaded.last_open_directory.as_deref(),
                Some(Path::new("/photos"))
            );
            assert_eq!(
                loaded.last_save_directory.as_deref(),
                Some(Path::new("/exports"))
            );
        });
    }

    #[test]
    fn missing_file_loads_defaults() {
        with_temp_data_dir(|_| {
            let (state, warning) = AppState::load();
            assert_eq!(state, AppState::default());
            assert!(warning.is_none());
        });
    }

    #[test]
    fn corrupt_file_yields_warning() {
        with_temp_data_dir(|dir| {
            fs::write(dir.join(STATE_FILE), "last_open_directory = [").expect("write");
            let (state, warning) = AppState::load();
            assert_eq!(state, AppState::default());
            assert_eq!(warning, Some("notification-state-load-error"));
        });
    }

    #[test]
    fn file_without_parent_leaves_directory_unchanged() {
        let mut state = AppState::default();
        state.set_last_open_directory_from_file(Path::new("relative.png"));
        // "relative.png" has an empty parent; it is still recorded as "".
        // A root path however has no parent at all.
        state.last_open_directory = None;
        state.set_last_open_directory_from_file(Path::new("/"));
        assert!(state.last_open_directory.is_none());
    }
}
