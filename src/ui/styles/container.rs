// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Style for the drop-target preview area. The border brightens while a file
/// is dragged over the window.
pub fn drop_zone(dragging: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let is_light = matches!(theme, Theme::Light);
        let border_color = if dragging {
            palette::PRIMARY_500
        } else if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };

        container::Style {
            background: Some(Background::Color(if is_light {
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_100
                }
            } else {
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::BLACK
                }
            })),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_zone_border_reacts_to_dragging() {
        let theme = Theme::Dark;
        let idle = drop_zone(false)(&theme);
        let dragging = drop_zone(true)(&theme);
        assert_ne!(idle.border.color, dragging.border.color);
        assert_eq!(dragging.border.color, palette::PRIMARY_500);
    }
}
