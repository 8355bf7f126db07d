// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The spinner holds no timer of its own: the application advances the
//! rotation on each animation tick and rebuilds the widget.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians added per animation tick.
pub const ROTATION_STEP: f32 = 0.12;

const ARC_SEGMENTS: u16 = 30;
const STROKE_WIDTH: f32 = 3.0;

/// Advances `rotation` by one step, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
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
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Half-circle arc starting at twelve o'clock.
                let start_angle = self.rotation - PI / 2.0;
                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(point_on_circle(center, radius, start_angle));
                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    arc_path.line_to(point_on_circle(center, radius, start_angle + PI * t));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
