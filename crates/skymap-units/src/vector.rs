//! Minimal 3-vector for sphere geometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Vectors shorter than this are treated as zero-length and never normalized.
pub const MIN_LENGTH: f32 = f32::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// Returns `false` and leaves the vector untouched when it is too short
    /// (or not finite) to have a direction.
    pub fn normalize(&mut self) -> bool {
        let len = self.length();
        if !len.is_finite() || len < MIN_LENGTH {
            return false;
        }
        self.x /= len;
        self.y /= len;
        self.z /= len;
        true
    }

    /// Unit-length copy, or the vector unchanged if it has no direction.
    pub fn normalized(mut self) -> Vector3 {
        self.normalize();
        self
    }

    /// Angle to `other` in radians, `0..=PI`.
    pub fn angle_to(&self, other: &Vector3) -> f32 {
        let denom = self.length() * other.length();
        if denom < MIN_LENGTH {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, s: f32) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn cross_of_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(x.cross(&Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(&x), -Vector3::Z);
    }

    #[test]
    fn normalize_scales_to_unit() {
        let mut v = Vector3::new(3.0, 0.0, 4.0);
        assert!(v.normalize());
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_is_noop() {
        let mut v = Vector3::ZERO;
        assert!(!v.normalize());
        assert_eq!(v, Vector3::ZERO);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn normalize_rejects_non_finite() {
        let mut v = Vector3::new(f32::INFINITY, 0.0, 0.0);
        assert!(!v.normalize());
        assert_eq!(v.x, f32::INFINITY);
    }

    #[test]
    fn angle_between_perpendicular_axes() {
        let x = Vector3::new(2.0, 0.0, 0.0);
        assert!((x.angle_to(&Vector3::Z) - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(x.angle_to(&Vector3::ZERO), 0.0);
    }

    #[test]
    fn arithmetic_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(&b), 3.0);
    }
}
