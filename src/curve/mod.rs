//! Curve geometry: vectors, moving control points and the smoothing pass.
//!
//! Nothing in here knows about windows or drawing; everything works in pixel
//! coordinates with the origin at the top-left of the canvas.

pub mod points;
pub mod smoothing;
pub mod vector;

pub use points::ControlPointSet;
pub use smoothing::{
    bezier, smooth, smooth_into, SmoothingEngine, MIN_CONTROL_POINTS,
};
pub use vector::Vector2;
