// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Number of trailing arc segments; each one fades out a little more.
const TRAIL_SEGMENTS: usize = 4;

/// Fraction of the full circle covered by the leading arc.
const SWEEP: f32 = 0.22;

/// Animated spinner that rotates a fading arc trail.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Approximates an arc with short line segments, which keeps the stroke caps
/// round at every segment boundary.
fn arc_path(center: Point, radius: f32, from: f32, to: f32) -> Path {
    let mut builder = canvas::path::Builder::new();
    let steps = 16;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let angle = from + (to - from) * t;
        let point = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        if i == 0 {
            builder.move_to(point);
        } else {
            builder.line_to(point);
        }
    }
    builder.build()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                // Draw the arc trail back-to-front so the brightest segment
                // sits on top of its fading tail.
                for segment in (0..TRAIL_SEGMENTS).rev() {
                    let offset = segment as f32 * SWEEP * TAU * 0.6;
                    let end = self.rotation - offset;
                    let start = end - SWEEP * TAU;
                    let alpha = self.color.a * (1.0 - segment as f32 / TRAIL_SEGMENTS as f32);

                    let arc = arc_path(center, radius, start, end);
                    frame.stroke(
                        &arc,
                        Stroke::default()
                            .with_width(3.0)
                            .with_color(Color {
                                a: alpha,
                                ..self.color
                            })
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_leaves_a_gap() {
        // The trail must never close into a full ring, otherwise the
        // rotation is invisible. Total angular coverage: one leading arc
        // plus the offsets of the trailing segments.
        let covered = SWEEP * (1.0 + 0.6 * (TRAIL_SEGMENTS as f32 - 1.0));
        assert!(covered < 1.0);
    }
}
