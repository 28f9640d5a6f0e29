//! Global constants.

/// A convenience struct to allow `WINDOW_SIZE` to have `x` and `y` fields.
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// The default size of the canvas in pixels.
pub const WINDOW_SIZE: V2 = V2 { x: 1280.0, y: 720.0 };

pub const WINDOW_TITLE: &str = "MyScreenSaver";

/// The default number of curve samples generated per control point.
pub const DEFAULT_STEPS: usize = 35;

/// Whether the animation starts paused.
pub const START_PAUSED: bool = true;

/// Each velocity component of a new control point is drawn from
/// `0.0..MAX_INITIAL_SPEED`.
pub const MAX_INITIAL_SPEED: f64 = 2.0;

/// The radius of the control point markers, in pixels.
pub const POINT_RADIUS: f32 = 3.0;

/// The stroke weight of the curve, in pixels.
pub const CURVE_WEIGHT: f32 = 3.0;

/// Saturation and lightness of the cycling curve colour.
pub const CURVE_SATURATION: f32 = 1.0;
pub const CURVE_LIGHTNESS: f32 = 0.5;

/// The number of distinct hues the curve colour cycles through.
pub const HUE_STEPS: u16 = 360;

// help overlay, all in pixels from the top-left
pub const HELP_FRAME_SIZE: V2 = V2 { x: 800.0, y: 600.0 };
pub const HELP_FRAME_WEIGHT: f32 = 5.0;
pub const HELP_TEXT_ORIGIN: V2 = V2 { x: 100.0, y: 100.0 };
pub const HELP_KEY_COLUMN_WIDTH: f64 = 100.0;
pub const HELP_ROW_HEIGHT: f64 = 30.0;
pub const HELP_FONT_SIZE: u32 = 24;
