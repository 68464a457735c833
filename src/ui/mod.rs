// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod matting;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
