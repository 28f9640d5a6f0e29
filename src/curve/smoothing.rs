//! Recursive midpoint smoothing of a closed control polygon.
//!
//! Every control point `P[i]` is replaced by a short curve segment running
//! from the midpoint of its incoming edge, past `P[i]`, to the midpoint of its
//! outgoing edge. Each segment is evaluated at `steps` evenly spaced
//! parameter values and the segments are concatenated in control-point
//! order, giving `steps × n` samples of a closed curve.

use super::Vector2;

/// The minimum number of control points required to produce a curve.
pub const MIN_CONTROL_POINTS: usize = 3;

/// Recursively blends `points[..=deg]` at parameter `t`.
///
/// The blend weights the *higher*-index point by `t`:
///
/// ```text
/// bezier(p, t, 0)   = p[0]
/// bezier(p, t, deg) = p[deg]·t + bezier(p, t, deg - 1)·(1 - t)
/// ```
///
/// so `t = 0` yields `points[0]` and `t = 1` yields `points[deg]`.
///
/// # Panics
///
/// Panics if `deg >= points.len()`.
pub fn bezier(points: &[Vector2], t: f64, deg: usize) -> Vector2 {
    if deg == 0 {
        return points[0];
    }

    points[deg] * t + bezier(points, t, deg - 1) * (1.0 - t)
}

/// Evaluates one three-point basis at `t = k / steps` for `k` in
/// `0..steps`, appending the samples to `out`.
pub fn sample_basis(
    basis: &[Vector2; 3],
    steps: usize,
    out: &mut Vec<Vector2>,
) {
    let alpha = (steps as f64).recip();

    out.extend((0..steps).map(|k| bezier(basis, k as f64 * alpha, 2)));
}

/// The local basis around control point `i`: the midpoint of the incoming
/// edge, the point itself, and the midpoint of the outgoing edge.
///
/// Indices wrap around in both directions.
fn basis_around(points: &[Vector2], i: usize) -> [Vector2; 3] {
    let n = points.len() as isize;
    let at = |offset: isize| {
        points[(i as isize + offset).rem_euclid(n) as usize]
    };

    let (prev, curr, next) = (at(-1), at(0), at(1));

    [prev.midpoint(curr), curr, curr.midpoint(next)]
}

/// Smooths the closed polygon `points` into `out`, clearing it first.
///
/// Leaves `out` empty if there are fewer than [`MIN_CONTROL_POINTS`]
/// points or if `steps` is zero.
pub fn smooth_into(points: &[Vector2], steps: usize, out: &mut Vec<Vector2>) {
    out.clear();

    if points.len() < MIN_CONTROL_POINTS || steps == 0 {
        return;
    }

    out.reserve(points.len() * steps);

    for i in 0..points.len() {
        sample_basis(&basis_around(points, i), steps, out);
    }
}

/// Allocating variant of [`smooth_into()`].
pub fn smooth(points: &[Vector2], steps: usize) -> Vec<Vector2> {
    let mut out = Vec::new();
    smooth_into(points, steps, &mut out);
    out
}

/// Holds the output buffer of the smoothing pass so it can be reused
/// between frames.
#[derive(Clone, Debug, Default)]
pub struct SmoothingEngine {
    curve: Vec<Vector2>,
}

impl SmoothingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the curve from `points` and returns it.
    pub fn compute(&mut self, points: &[Vector2], steps: usize) -> &[Vector2] {
        smooth_into(points, steps, &mut self.curve);
        &self.curve
    }

    /// The most recently computed curve.
    pub fn curve(&self) -> &[Vector2] {
        &self.curve
    }

    pub fn clear(&mut self) {
        self.curve.clear();
    }
}
