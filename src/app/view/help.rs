//! The help overlay, listing the key bindings and the current resolution.

use super::*;
use keys::KEY_BINDINGS;

const BACKGROUND: (u8, u8, u8) = (50, 50, 50);
const FRAME_COLOR: (u8, u8, u8) = (255, 50, 50);
const TEXT_COLOR: (u8, u8, u8) = (128, 128, 255);

/// The rows of the help table as `(left, right)` columns.
pub fn help_rows(steps: usize) -> Vec<(String, String)> {
    KEY_BINDINGS
        .iter()
        .map(|&(key, desc)| (key.to_string(), desc.to_string()))
        .chain([
            (String::new(), String::new()),
            (steps.to_string(), String::from("Current points")),
        ])
        .collect()
}

/// Covers the frame and draws the help table on top.
pub fn draw_help(draw: &Draw, frame: &Frame, canvas: Canvas, steps: usize) {
    let (r, g, b) = BACKGROUND;
    draw.rect()
        .xy(frame.rect().xy())
        .wh(frame.rect().wh())
        .color(rgb8(r, g, b));

    let (r, g, b) = FRAME_COLOR;
    let (fw, fh) = (HELP_FRAME_SIZE.x, HELP_FRAME_SIZE.y);
    draw.rect()
        .xy(pixel_centre(canvas, 0.0, 0.0, fw, fh))
        .w_h(fw as f32, fh as f32)
        .no_fill()
        .stroke(rgb8(r, g, b))
        .stroke_weight(HELP_FRAME_WEIGHT);

    let value_width = fw - HELP_TEXT_ORIGIN.x - HELP_KEY_COLUMN_WIDTH;

    for (i, (left, right)) in help_rows(steps).iter().enumerate() {
        let y = HELP_ROW_HEIGHT.mul_add(i as f64, HELP_TEXT_ORIGIN.y);
        let x = HELP_TEXT_ORIGIN.x;

        text_cell(draw, canvas, left, x, y, HELP_KEY_COLUMN_WIDTH);
        let value_x = x + HELP_KEY_COLUMN_WIDTH;
        text_cell(draw, canvas, right, value_x, y, value_width);
    }
}

/// Draws left-aligned text in a single-row cell whose top-left corner is at
/// pixel `(x, y)`.
fn text_cell(draw: &Draw, canvas: Canvas, text: &str, x: f64, y: f64, w: f64) {
    let (r, g, b) = TEXT_COLOR;

    draw.text(text)
        .xy(pixel_centre(canvas, x, y, w, HELP_ROW_HEIGHT))
        .wh(vec2(w as f32, HELP_ROW_HEIGHT as f32))
        .font_size(HELP_FONT_SIZE)
        .left_justify()
        .align_text_top()
        .color(rgb8(r, g, b));
}

/// The draw-space centre of a `w × h` pixel box with its top-left corner at
/// pixel `(x, y)`.
fn pixel_centre(canvas: Canvas, x: f64, y: f64, w: f64, h: f64) -> Vec2 {
    vec2(
        (x + w * 0.5 - canvas.width * 0.5) as f32,
        (canvas.height * 0.5 - y - h * 0.5) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_end_with_the_resolution() {
        let rows = help_rows(35);

        assert_eq!(rows.len(), KEY_BINDINGS.len() + 2);
        assert_eq!(rows[0], ("F1".to_string(), "Show Help".to_string()));
        assert_eq!(rows[5], (String::new(), String::new()));
        assert_eq!(rows[6], ("35".to_string(), "Current points".to_string()));
    }

    #[test]
    fn boxes_are_anchored_top_left() {
        let canvas = Canvas::new(1280.0, 720.0);

        // an 800x600 box at the origin is centred at pixel (400, 300)
        let c = pixel_centre(canvas, 0.0, 0.0, 800.0, 600.0);
        assert_eq!(c, vec2(-240.0, 60.0));

        // a box covering the canvas is centred in draw space
        let c = pixel_centre(canvas, 0.0, 0.0, 1280.0, 720.0);
        assert_eq!(c, vec2(0.0, 0.0));
    }
}
