// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for tests that redirect the config and data directories.
//!
//! Every test touching `ICED_MATTE_CONFIG_DIR` or `ICED_MATTE_DATA_DIR` must
//! serialize on [`env_lock`]; environment variables are process-global and
//! the test harness runs modules concurrently.

use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tempfile::tempdir;

/// Process-wide lock for tests mutating environment variables.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn restore(var: &str, previous: Option<String>) {
    if let Some(value) = previous {
        std::env::set_var(var, value);
    } else {
        std::env::remove_var(var);
    }
}

/// Runs a test with both the config and data directories pointing at fresh
/// temporary directories.
pub fn with_isolated_dirs<F>(test: F)
where
    F: FnOnce(&Path, &Path),
{
    let _guard = env_lock().lock().expect("failed to lock env mutex");
    let config_dir = tempdir().expect("failed to create temp config dir");
    let data_dir = tempdir().expect("failed to create temp data dir");

    let previous_config = std::env::var("ICED_MATTE_CONFIG_DIR").ok();
    let previous_data = std::env::var("ICED_MATTE_DATA_DIR").ok();
    std::env::set_var("ICED_MATTE_CONFIG_DIR", config_dir.path());
    std::env::set_var("ICED_MATTE_DATA_DIR", data_dir.path());

    test(config_dir.path(), data_dir.path());

    restore("ICED_MATTE_CONFIG_DIR", previous_config);
    restore("ICED_MATTE_DATA_DIR", previous_data);
}
