//! Angular positions and their unit-sphere form.

use crate::almanac::normalize_angle;
use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f32,
    pub longitude: f32,
}

impl LatLong {
    pub const fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Celestial position in degrees: right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RaDec {
    pub ra: f32,
    pub dec: f32,
}

impl RaDec {
    pub const fn new(ra: f32, dec: f32) -> Self {
        Self { ra, dec }
    }
}

/// A direction on the celestial sphere, as seen from the observer.
///
/// Kept at unit length by every `update_from_*` method. The value is meant to
/// be owned by one geometry element and rewritten in place on each refresh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeocentricCoordinates {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GeocentricCoordinates {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_ra_dec(ra_dec: RaDec) -> Self {
        let mut coords = Self::default();
        coords.update_from_ra_dec(ra_dec);
        coords
    }

    pub fn from_array(xyz: [f32; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }

    /// Recompute from right ascension and declination.
    pub fn update_from_ra_dec(&mut self, ra_dec: RaDec) {
        let ra = ra_dec.ra.to_radians();
        let dec = ra_dec.dec.to_radians();
        self.x = ra.cos() * dec.cos();
        self.y = ra.sin() * dec.cos();
        self.z = dec.sin();
    }

    /// Overwrite with `direction` scaled to unit length.
    ///
    /// A zero-length direction is ignored; the previous value stays.
    pub fn update_from_direction(&mut self, mut direction: Vector3) -> bool {
        if !direction.normalize() {
            return false;
        }
        self.x = direction.x;
        self.y = direction.y;
        self.z = direction.z;
        true
    }

    /// Inverse of [`update_from_ra_dec`](Self::update_from_ra_dec).
    pub fn to_ra_dec(&self) -> RaDec {
        let ra = normalize_angle(f64::from(self.y.atan2(self.x).to_degrees())) as f32;
        let dec = self.z.clamp(-1.0, 1.0).asin().to_degrees();
        RaDec::new(ra, dec)
    }

    pub fn as_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<Vector3> for GeocentricCoordinates {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
