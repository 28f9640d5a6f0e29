//! A small 2D vector value type used for control points and curve samples.

use nannou::prelude::DVec2;
use std::ops::{Add, Deref, DerefMut, Mul, Sub};

/// A 2D point or displacement, wrapping glam's `DVec2`.
///
/// All operations return new values; operands are never mutated. Unlike
/// `DVec2`, multiplying two `Vector2`s gives their dot product.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2(DVec2);

impl Vector2 {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// `k · self`.
    pub fn scale(self, k: f64) -> Self {
        Self(self.0 * k)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// The Euclidean length, `√(x² + y²)`.
    pub fn len(self) -> f64 {
        self.0.length()
    }

    /// The point halfway between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self((self.0 + other.0) * 0.5)
    }

    /// Integer pixel coordinates, truncated toward zero.
    pub fn to_int(self) -> (i32, i32) {
        (self.0.x as i32, self.0.y as i32)
    }
}

impl Deref for Vector2 {
    type Target = DVec2;

    fn deref(&self) -> &DVec2 {
        &self.0
    }
}

impl DerefMut for Vector2 {
    fn deref_mut(&mut self) -> &mut DVec2 {
        &mut self.0
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

/// Multiplying two vectors yields their dot product.
impl Mul for Vector2 {
    type Output = f64;

    fn mul(self, rhs: Self) -> f64 {
        self.dot(rhs)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        v.0
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
