//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod canvas;
pub mod color;
pub mod general;

pub use canvas::Canvas;
pub use color::hue_color;
pub use general::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_comparisons() {
        assert!(within_tolerance(1.0, 1.05, 0.1));
        assert!(!within_tolerance(1.0, 1.2, 0.1));
        assert!(within_tolerance(0.1 + 0.2, 0.3, f64::EPSILON));
    }
}
