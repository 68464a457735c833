// SPDX-License-Identifier: MPL-2.0
//! Default values used when the configuration file is absent or partial.

use crate::ui::theming::ThemeMode;

/// Download location of the portrait-matting ONNX model.
pub const DEFAULT_MODEL_URL: &str =
    "https://huggingface.co/imgly/isnet-general-onnx/resolve/main/onnx/model.onnx";

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}
