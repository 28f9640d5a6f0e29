//! The set of moving control points that drive the curve.

use super::Vector2;

/// An ordered set of control points, each paired with a velocity.
///
/// Insertion order is the traversal order of the curve, and the sequence
/// is treated as cyclic (the last point connects back to the first).
#[derive(Clone, Debug, Default)]
pub struct ControlPointSet {
    positions: Vec<Vector2>,
    velocities: Vec<Vector2>,
}

impl ControlPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a control point which will move by `velocity` each frame.
    pub fn add_point(&mut self, position: Vector2, velocity: Vector2) {
        self.positions.push(position);
        self.velocities.push(velocity);
    }

    /// Moves every point by its velocity, then reflects the velocity on any
    /// axis where the point has left `[0, width] × [0, height]`.
    ///
    /// The bounce happens *after* the move, so a point may sit outside the
    /// canvas for a single frame before heading back in.
    pub fn advance(&mut self, width: f64, height: f64) {
        for (pos, vel) in self.positions.iter_mut().zip(&mut self.velocities) {
            *pos = *pos + *vel;

            if pos.x > width || pos.x < 0.0 {
                vel.x = -vel.x;
            }
            if pos.y > height || pos.y < 0.0 {
                vel.y = -vel.y;
            }
        }
    }

    /// Removes all points.
    pub fn reset(&mut self) {
        self.positions.clear();
        self.velocities.clear();
    }

    pub fn positions(&self) -> &[Vector2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vector2] {
        &self.velocities
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 100.0;
    const H: f64 = 50.0;

    fn single(pos: (f64, f64), vel: (f64, f64)) -> ControlPointSet {
        let mut set = ControlPointSet::new();
        set.add_point(pos.into(), vel.into());
        set
    }

    #[test]
    fn positions_and_velocities_stay_aligned() {
        let mut set = ControlPointSet::new();
        for i in 0..5 {
            set.add_point(Vector2::new(i as f64, 0.0), Vector2::new(0.0, 1.0));
        }

        assert_eq!(set.len(), 5);
        assert_eq!(set.positions().len(), set.velocities().len());
        assert_eq!(set.positions()[3], Vector2::new(3.0, 0.0));
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut set = single((10.0, 10.0), (1.5, 0.5));
        set.advance(W, H);

        assert_eq!(set.positions()[0], Vector2::new(11.5, 10.5));
        assert_eq!(set.velocities()[0], Vector2::new(1.5, 0.5));
    }

    #[test]
    fn bounce_happens_after_leaving_the_canvas() {
        let mut set = single((99.5, 10.0), (1.0, 0.0));

        set.advance(W, H);
        // moved outside first, then reflected
        assert_eq!(set.positions()[0], Vector2::new(100.5, 10.0));
        assert_eq!(set.velocities()[0], Vector2::new(-1.0, 0.0));

        set.advance(W, H);
        assert_eq!(set.positions()[0], Vector2::new(99.5, 10.0));
        assert_eq!(set.velocities()[0], Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn bounce_off_the_origin_edges() {
        let mut set = single((0.5, 0.5), (-1.0, 0.0));
        set.advance(W, H);

        assert_eq!(set.velocities()[0], Vector2::new(1.0, 0.0));
    }

    #[test]
    fn simultaneous_crossings_flip_both_axes() {
        let mut set = single((99.0, 49.0), (2.0, 2.0));
        set.advance(W, H);

        assert_eq!(set.velocities()[0], Vector2::new(-2.0, -2.0));
    }

    #[test]
    fn axes_bounce_independently() {
        let mut set = single((50.0, 49.5), (1.0, 1.0));
        set.advance(W, H);

        assert_eq!(set.velocities()[0], Vector2::new(1.0, -1.0));
    }

    #[test]
    fn boundary_itself_is_inside() {
        let mut set = single((99.0, 0.0), (1.0, 0.0));
        set.advance(W, H);

        assert_eq!(set.positions()[0], Vector2::new(100.0, 0.0));
        assert_eq!(set.velocities()[0], Vector2::new(1.0, 0.0));
    }

    #[test]
    fn reset_and_empty_advance() {
        let mut set = single((1.0, 1.0), (1.0, 1.0));
        set.reset();
        assert!(set.is_empty());
        assert!(set.velocities().is_empty());

        // no-op on an empty set
        set.advance(W, H);
        assert!(set.is_empty());
    }
}
