//! Conversion of catalog and geographic positions to sky directions.

use crate::almanac::{normalize_angle, Almanac, MeanSiderealAlmanac};
use crate::coordinates::{GeocentricCoordinates, LatLong, RaDec};
use crate::vector::Vector3;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// WGS84 semi-major axis in metres.
pub const WGS84_A: f32 = 6_378_137.0;
/// WGS84 semi-minor axis in metres.
pub const WGS84_B: f32 = 6_356_752.314_245;

/// Converts positions into [`GeocentricCoordinates`].
///
/// RA/Dec conversion is a fixed formula. Lat/long conversion needs the
/// sidereal time, supplied by the [`Almanac`].
#[derive(Clone)]
pub struct CoordinateTransformer {
    almanac: Arc<dyn Almanac>,
}

impl CoordinateTransformer {
    pub fn new(almanac: Arc<dyn Almanac>) -> Self {
        Self { almanac }
    }

    pub fn from_ra_dec(&self, ra_dec: RaDec) -> GeocentricCoordinates {
        GeocentricCoordinates::from_ra_dec(ra_dec)
    }

    /// Direction from `observer` to `target` on the Earth's surface at `time`.
    ///
    /// The result starts from the zero vector, so a target equal to the
    /// observer yields zero rather than a direction.
    pub fn from_lat_long(
        &self,
        time: DateTime<Utc>,
        observer: LatLong,
        target: LatLong,
    ) -> GeocentricCoordinates {
        let mut coords = GeocentricCoordinates::default();
        self.update_from_lat_long(&mut coords, time, observer, target);
        coords
    }

    /// Rewrite `coords` in place with the observer-to-target direction.
    ///
    /// Both longitudes are rotated by the RA of the observer's zenith meridian,
    /// turning the Earth-fixed frame into the sky frame for this instant. The two
    /// points go through WGS84 ECEF and the difference is normalized. Returns
    /// `false` and leaves `coords` alone when the points coincide.
    pub fn update_from_lat_long(
        &self,
        coords: &mut GeocentricCoordinates,
        time: DateTime<Utc>,
        observer: LatLong,
        target: LatLong,
    ) -> bool {
        let zenith = self
            .almanac
            .zenith(time, LatLong::new(observer.latitude, 0.0));
        let rotation = f64::from(zenith.ra);

        let observer_ecef = ecef(
            observer.latitude.to_radians(),
            rotated_longitude(observer.longitude, rotation),
        );
        let target_ecef = ecef(
            target.latitude.to_radians(),
            rotated_longitude(target.longitude, rotation),
        );

        coords.update_from_direction(target_ecef - observer_ecef)
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new(Arc::new(MeanSiderealAlmanac))
    }
}

fn rotated_longitude(longitude: f32, rotation: f64) -> f32 {
    (normalize_angle(f64::from(longitude) + rotation) as f32).to_radians()
}

/// Earth-centred Cartesian position of a surface point (height 0), angles in radians.
pub fn ecef(latitude: f32, longitude: f32) -> Vector3 {
    let a2 = WGS84_A * WGS84_A;
    let b2 = WGS84_B * WGS84_B;
    let e2 = (a2 - b2) / a2;
    let sin_lat = latitude.sin();
    let n = WGS84_A / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    Vector3::new(
        n * latitude.cos() * longitude.cos(),
        n * latitude.cos() * longitude.sin(),
        (b2 / a2) * n * sin_lat,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::mean_sidereal_time;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, hour, 0, 0).unwrap()
    }

    fn assert_close(a: Vector3, b: Vector3, eps: f32) {
        assert!(
            (a - b).length() < eps,
            "vectors differ: {a:?} vs {b:?}"
        );
    }

    /// Zenith almanac pinned to a fixed RA, for exact expectations.
    struct FixedZenith(f32);

    impl Almanac for FixedZenith {
        fn zenith(&self, _time: DateTime<Utc>, location: LatLong) -> RaDec {
            RaDec::new(self.0 + location.longitude, location.latitude)
        }
    }

    #[test]
    fn ecef_equator_and_pole() {
        let equator = ecef(0.0, 0.0);
        assert!((equator.x - WGS84_A).abs() < 1.0);
        let pole = ecef(std::f32::consts::FRAC_PI_2, 0.0);
        assert!((pole.z - WGS84_B).abs() < 10.0);
        assert!(pole.x.abs() < 1.0);
    }

    #[test]
    fn lat_long_result_is_unit_length() {
        let t = CoordinateTransformer::default();
        let observer = LatLong::new(37.4, -122.1);
        for (lat, lon) in [(0.0, 0.0), (-33.9, 151.2), (64.1, -21.9), (37.5, -122.0)] {
            let c = t.from_lat_long(at(6), observer, LatLong::new(lat, lon));
            assert!((c.as_vector().length() - 1.0).abs() < 1e-5, "{lat},{lon}: {c:?}");
        }
    }

    #[test]
    fn antipode_points_through_the_earth_centre() {
        let t = CoordinateTransformer::new(Arc::new(FixedZenith(30.0)));
        let c = t.from_lat_long(at(0), LatLong::new(0.0, 0.0), LatLong::new(0.0, 180.0));
        let theta = 30f32.to_radians();
        assert_close(c.as_vector(), Vector3::new(-theta.cos(), -theta.sin(), 0.0), 1e-5);
    }

    #[test]
    fn north_pole_from_the_equator() {
        let t = CoordinateTransformer::new(Arc::new(FixedZenith(0.0)));
        let c = t.from_lat_long(at(0), LatLong::new(0.0, 0.0), LatLong::new(90.0, 0.0));
        let expected = Vector3::new(-WGS84_A, 0.0, WGS84_B).normalized();
        assert_close(c.as_vector(), expected, 1e-5);
    }

    #[test]
    fn coincident_points_leave_previous_value() {
        let t = CoordinateTransformer::default();
        let p = LatLong::new(48.85, 2.35);
        let mut c = GeocentricCoordinates::new(0.0, 0.0, 1.0);
        assert!(!t.update_from_lat_long(&mut c, at(12), p, p));
        assert_eq!(c, GeocentricCoordinates::new(0.0, 0.0, 1.0));
        assert!(!c.x.is_nan() && !c.y.is_nan() && !c.z.is_nan());
    }

    #[test]
    fn earth_rotation_turns_directions_about_the_pole() {
        let t = CoordinateTransformer::default();
        let observer = LatLong::new(40.0, -74.0);
        let target = LatLong::new(51.5, -0.1);
        let early = t.from_lat_long(at(0), observer, target);
        let late = t.from_lat_long(at(6), observer, target);

        // Rotation about z keeps the polar component.
        assert!((early.z - late.z).abs() < 1e-4);

        let expected = (mean_sidereal_time(at(6), 0.0) - mean_sidereal_time(at(0), 0.0))
            .rem_euclid(360.0) as f32;
        let turned = (late.y.atan2(late.x) - early.y.atan2(early.x))
            .to_degrees()
            .rem_euclid(360.0);
        assert!((turned - expected).abs() < 0.01, "{turned} vs {expected}");
    }

    #[test]
    fn from_ra_dec_matches_coordinates() {
        let t = CoordinateTransformer::default();
        let rd = RaDec::new(88.8, 7.4);
        assert_eq!(t.from_ra_dec(rd), GeocentricCoordinates::from_ra_dec(rd));
    }
}
