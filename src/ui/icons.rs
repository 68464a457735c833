// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. SVG keeps the icons crisp at any scale and lets
//! the theme recolor them through `svg::Style`.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `download` not `save_cutout`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    upload,
    "upload.svg",
    "Upload icon: arrow rising out of a tray."
);
define_icon!(
    download,
    "download.svg",
    "Download icon: arrow dropping into a tray."
);
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Single chevron left icon: chevron pointing left (<), used for back actions."
);
define_icon!(cog, "cog.svg", "Cog icon: gear/settings.");
define_icon!(image, "image.svg", "Image icon: picture frame.");
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: check/tick mark for success."
);
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with exclamation mark."
);

/// Creates an icon with specified dimensions.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a fixed color regardless of theme.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = upload();
        let _ = download();
        let _ = chevron_left();
        let _ = cog();
        let _ = image();
        let _ = cross();
        let _ = checkmark();
        let _ = warning();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(upload(), 32.0);
        let _ = icon;
    }
}
