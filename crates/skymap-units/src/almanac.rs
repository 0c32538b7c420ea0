//! Sidereal time: where the observer's zenith points at a given instant.
//!
//! Full ephemerides live elsewhere; the sky-map core only needs the right
//! ascension of the zenith to line the geographic frame up with the
//! celestial one.

use crate::coordinates::{LatLong, RaDec};
use chrono::{DateTime, Utc};

/// Julian date of the J2000.0 epoch, 2000-01-01T12:00:00Z.
pub const J2000: f64 = 2_451_545.0;

const UNIX_EPOCH_JULIAN: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Source of zenith positions.
pub trait Almanac: Send + Sync {
    /// RA/Dec of the point straight above `location` at `time`.
    fn zenith(&self, time: DateTime<Utc>, location: LatLong) -> RaDec;
}

/// Zenith from Greenwich mean sidereal time (IAU 1982 polynomial).
///
/// Ignores nutation; the error is well under a tenth of a degree, far below
/// what an outline overlay can show.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSiderealAlmanac;

impl Almanac for MeanSiderealAlmanac {
    fn zenith(&self, time: DateTime<Utc>, location: LatLong) -> RaDec {
        let ra = mean_sidereal_time(time, f64::from(location.longitude));
        RaDec::new(ra as f32, location.latitude)
    }
}

/// Julian date for a UTC instant.
pub fn julian_day(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JULIAN
}

/// Local mean sidereal time in degrees for an east-positive `longitude`.
pub fn mean_sidereal_time(time: DateTime<Utc>, longitude: f64) -> f64 {
    let days = julian_day(time) - J2000;
    let t = days / 36_525.0;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_angle(gmst + longitude)
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
