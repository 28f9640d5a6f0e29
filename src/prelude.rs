//! Project-wide exports for easy access.

pub use crate::curve::Vector2;
pub use crate::settings::*;
pub use crate::util::{hue_color, within_tolerance, Canvas};
