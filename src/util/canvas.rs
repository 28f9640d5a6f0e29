//! Conversion between canvas pixels (origin top-left, y down) and nannou's
//! draw space (origin centre, y up).

use crate::curve::Vector2;
use nannou::prelude::{vec2, Vec2};

/// The size of the canvas in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Converts a position in nannou draw space to canvas pixels.
    pub fn to_pixel(self, pos: Vec2) -> Vector2 {
        Vector2::new(
            f64::from(pos.x) + self.width * 0.5,
            self.height * 0.5 - f64::from(pos.y),
        )
    }

    /// Converts integer canvas pixels to a position in nannou draw space.
    pub fn pixel_to_draw(self, (x, y): (i32, i32)) -> Vec2 {
        vec2(
            (f64::from(x) - self.width * 0.5) as f32,
            (self.height * 0.5 - f64::from(y)) as f32,
        )
    }

    /// Truncates a point to whole pixels and converts it to draw space.
    pub fn point_to_draw(self, point: Vector2) -> Vec2 {
        self.pixel_to_draw(point.to_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_pixels() {
        let canvas = Canvas::new(1280.0, 720.0);

        let top_left = canvas.to_pixel(vec2(-640.0, 360.0));
        let bottom_right = canvas.to_pixel(vec2(640.0, -360.0));
        let centre = canvas.to_pixel(vec2(0.0, 0.0));

        assert_eq!(top_left, Vector2::new(0.0, 0.0));
        assert_eq!(bottom_right, Vector2::new(1280.0, 720.0));
        assert_eq!(centre, Vector2::new(640.0, 360.0));
    }

    #[test]
    fn pixel_round_trip() {
        let canvas = Canvas::new(800.0, 600.0);
        let px = (123, 456);

        let back = canvas.to_pixel(canvas.pixel_to_draw(px));
        assert_eq!(back.to_int(), px);
    }

    #[test]
    fn drawing_truncates() {
        let canvas = Canvas::new(800.0, 600.0);
        assert_eq!(
            canvas.point_to_draw(Vector2::new(400.9, 300.9)),
            vec2(0.0, 0.0)
        );
    }
}
