//! Screen-facing basis for image quads.

use crate::coordinates::GeocentricCoordinates;
use crate::vector::Vector3;

/// Half-extent vectors of a billboarded image centred on `location`.
///
/// ```text
///  p-u+v     p+u+v
///     +-------+    ^
///     |   p   |    | v
///     +-------+
///  p-u-v     p+u-v
///        --->
///          u
/// ```
///
/// Both vectors lie in the plane perpendicular to the view direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Billboard {
    pub u: Vector3,
    pub v: Vector3,
}

impl Billboard {
    /// Build the basis so that `v` leans towards `up`.
    ///
    /// If `location` is parallel to `up` there is no unique answer and the
    /// basis collapses to zero instead of producing NaNs.
    pub fn from_up_vector(location: &GeocentricCoordinates, up: Vector3, scale: f32) -> Self {
        let p = location.as_vector();
        let u = -p.cross(&up).normalized();
        let v = u.cross(&p);
        Self {
            u: u * scale,
            v: v * scale,
        }
    }

    /// Corners in draw order: bottom-left, bottom-right, top-right, top-left.
    pub fn corners(&self, location: &GeocentricCoordinates) -> [Vector3; 4] {
        let p = location.as_vector();
        [
            p - self.u - self.v,
            p + self.u - self.v,
            p + self.u + self.v,
            p - self.u + self.v,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::RaDec;

    #[test]
    fn basis_is_perpendicular_to_view() {
        let p = GeocentricCoordinates::from_ra_dec(RaDec::new(83.8, -5.4));
        let b = Billboard::from_up_vector(&p, Vector3::Y, 1.0);
        assert!(b.u.dot(&p.as_vector()).abs() < 1e-5);
        assert!(b.v.dot(&p.as_vector()).abs() < 1e-5);
        assert!(b.u.dot(&b.v).abs() < 1e-5);
    }

    #[test]
    fn scale_applies_to_both_axes() {
        let p = GeocentricCoordinates::new(1.0, 0.0, 0.0);
        let b = Billboard::from_up_vector(&p, Vector3::Z, 0.25);
        assert!((b.u.length() - 0.25).abs() < 1e-6);
        assert!((b.v.length() - 0.25).abs() < 1e-6);
        // Looking down +x with z up, v lies along the up axis.
        assert!((b.v.z.abs() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn parallel_up_collapses_without_nan() {
        let p = GeocentricCoordinates::new(0.0, 1.0, 0.0);
        let b = Billboard::from_up_vector(&p, Vector3::Y, 1.0);
        assert_eq!(b.u.length(), 0.0);
        assert_eq!(b.v.length(), 0.0);
    }

    #[test]
    fn corners_surround_the_centre() {
        let p = GeocentricCoordinates::new(1.0, 0.0, 0.0);
        let b = Billboard::from_up_vector(&p, Vector3::Z, 0.1);
        let corners = b.corners(&p);
        let centre = corners
            .iter()
            .fold(Vector3::ZERO, |acc, c| acc + *c)
            * 0.25;
        assert!((centre - p.as_vector()).length() < 1e-6);
    }
}
