//! Sky-map units and coordinate math.
//!
//! Positions are carried as [`GeocentricCoordinates`]: unit vectors on the
//! celestial sphere, x towards RA 0h, z towards the north celestial pole.
//! Catalog objects start from [`RaDec`]; terrestrial outlines start from
//! [`LatLong`] and depend on time, since the Earth turns under the sky.
//!
//! Geometry is single precision. Only the sidereal-time computation in
//! [`almanac`] runs in `f64`, because Julian dates lose too many digits in `f32`.

pub mod almanac;
pub mod billboard;
pub mod coordinates;
pub mod transform;
pub mod vector;

pub use almanac::{normalize_angle, Almanac, MeanSiderealAlmanac};
pub use billboard::Billboard;
pub use coordinates::{GeocentricCoordinates, LatLong, RaDec};
pub use transform::CoordinateTransformer;
pub use vector::Vector3;
