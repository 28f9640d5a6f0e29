//! Colour for the cycling curve stroke.

use crate::settings::{CURVE_LIGHTNESS, CURVE_SATURATION, HUE_STEPS};
use nannou::color::{hsl, IntoLinSrgba, LinSrgba};

/// The fully-saturated, mid-lightness stroke colour for a hue counter, in
/// degrees.
pub fn hue_color(hue: u16) -> LinSrgba {
    let hue = f32::from(hue % HUE_STEPS) / f32::from(HUE_STEPS);

    hsl(hue, CURVE_SATURATION, CURVE_LIGHTNESS).into_lin_srgba()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::within_tolerance;

    fn rgb_close(c: LinSrgba, rgb: (f32, f32, f32)) -> bool {
        let close = |x: f32, y: f32| {
            within_tolerance(f64::from(x), f64::from(y), 1e-4)
        };
        close(c.red, rgb.0) && close(c.green, rgb.1) && close(c.blue, rgb.2)
    }

    #[test]
    fn primary_and_secondary_hues() {
        assert!(rgb_close(hue_color(0), (1.0, 0.0, 0.0)));
        assert!(rgb_close(hue_color(60), (1.0, 1.0, 0.0)));
        assert!(rgb_close(hue_color(120), (0.0, 1.0, 0.0)));
        assert!(rgb_close(hue_color(180), (0.0, 1.0, 1.0)));
        assert!(rgb_close(hue_color(240), (0.0, 0.0, 1.0)));
        assert!(rgb_close(hue_color(300), (1.0, 0.0, 1.0)));
    }

    #[test]
    fn hue_wraps_and_is_opaque() {
        let a = hue_color(30);
        let b = hue_color(390);

        assert!(rgb_close(b, (a.red, a.green, a.blue)));
        assert!(within_tolerance(f64::from(a.alpha), 1.0, f64::EPSILON));
    }
}
