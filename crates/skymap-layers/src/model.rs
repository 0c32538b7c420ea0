//! Where the observer is, where they look, and what time it is.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use skymap_units::{LatLong, Vector3};
use std::time::Instant;

/// Viewing direction and the screen's up vector, both in sky coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointing {
    pub line_of_sight: Vector3,
    pub perpendicular: Vector3,
}

impl Default for Pointing {
    fn default() -> Self {
        Self {
            line_of_sight: Vector3::new(1.0, 0.0, 0.0),
            perpendicular: Vector3::Z,
        }
    }
}

/// Time, location and orientation provider polled once per tick.
pub trait AstronomerModel: Send + Sync {
    fn time(&self) -> DateTime<Utc>;

    fn location(&self) -> LatLong;

    fn pointing(&self) -> Pointing;
}

/// Fastest accepted clock rate either way: one simulated day per second.
pub const MAX_TIME_SPEED: f64 = 86_400.0;

/// Simulated clock: either frozen, or running from an anchor at some speed.
#[derive(Debug, Clone, Copy)]
pub enum SimClock {
    Frozen(DateTime<Utc>),
    Running {
        anchor: DateTime<Utc>,
        started: Instant,
        speed: f64,
    },
}

impl SimClock {
    pub fn frozen(at: DateTime<Utc>) -> Self {
        SimClock::Frozen(at)
    }

    /// Real time at `speed`x, starting now.
    pub fn running(speed: f64) -> Self {
        Self::running_from(Utc::now(), speed)
    }

    /// `speed` is clamped to [`MAX_TIME_SPEED`] either way; NaN stops the clock.
    pub fn running_from(anchor: DateTime<Utc>, speed: f64) -> Self {
        SimClock::Running {
            anchor,
            started: Instant::now(),
            speed: clamp_speed(speed),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match *self {
            SimClock::Frozen(at) => at,
            SimClock::Running {
                anchor,
                started,
                speed,
            } => {
                let simulated_ms = started.elapsed().as_secs_f64() * speed * 1000.0;
                offset_saturating(anchor, simulated_ms)
            }
        }
    }

    /// Jump the clock by `delta` simulated time, stopping at the ends of
    /// the representable range.
    pub fn advance(&mut self, delta: chrono::Duration) {
        let base = match self {
            SimClock::Frozen(at) => at,
            SimClock::Running { anchor, .. } => anchor,
        };
        *base = base.checked_add_signed(delta).unwrap_or(if delta < chrono::Duration::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        });
    }

    /// Change the rate, keeping the current simulated time.
    pub fn set_speed(&mut self, new_speed: f64) {
        if let SimClock::Running { .. } = self {
            *self = Self::running_from(self.now(), new_speed);
        }
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return 0.0;
    }
    speed.clamp(-MAX_TIME_SPEED, MAX_TIME_SPEED)
}

fn offset_saturating(anchor: DateTime<Utc>, millis: f64) -> DateTime<Utc> {
    let limit = if millis < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    if !millis.is_finite() {
        return limit;
    }
    chrono::Duration::try_milliseconds(millis as i64)
        .and_then(|delta| anchor.checked_add_signed(delta))
        .unwrap_or(limit)
}

struct ModelState {
    clock: SimClock,
    location: LatLong,
    pointing: Pointing,
}

/// An [`AstronomerModel`] driven by explicit setters.
///
/// Safe to share between the producer thread and whoever feeds it
/// location fixes or orientation.
pub struct ManualModel {
    state: RwLock<ModelState>,
}

impl ManualModel {
    pub fn new(location: LatLong, clock: SimClock) -> Self {
        Self {
            state: RwLock::new(ModelState {
                clock,
                location,
                pointing: Pointing::default(),
            }),
        }
    }

    pub fn set_location(&self, location: LatLong) {
        self.state.write().location = location;
    }

    pub fn set_pointing(&self, pointing: Pointing) {
        self.state.write().pointing = pointing;
    }

    pub fn set_time_speed(&self, speed: f64) {
        self.state.write().clock.set_speed(speed);
    }

    pub fn set_clock(&self, clock: SimClock) {
        self.state.write().clock = clock;
    }

    pub fn advance(&self, delta: chrono::Duration) {
        self.state.write().clock.advance(delta);
    }
}

impl AstronomerModel for ManualModel {
    fn time(&self) -> DateTime<Utc> {
        self.state.read().clock.now()
    }

    fn location(&self) -> LatLong {
        self.state.read().location
    }

    fn pointing(&self) -> Pointing {
        self.state.read().pointing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn frozen_clock_only_moves_when_advanced() {
        let mut clock = SimClock::frozen(epoch());
        assert_eq!(clock.now(), epoch());
        clock.advance(chrono::Duration::seconds(90));
        assert_eq!(clock.now(), epoch() + chrono::Duration::seconds(90));
    }

    #[test]
    fn huge_speed_is_clamped() {
        let clock = SimClock::running_from(epoch(), 1e15);
        assert!(matches!(clock, SimClock::Running { speed, .. } if speed == MAX_TIME_SPEED));
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(clock.now() > epoch());

        let clock = SimClock::running_from(epoch(), f64::NAN);
        assert!(matches!(clock, SimClock::Running { speed, .. } if speed == 0.0));
        assert_eq!(clock.now(), epoch());
    }

    #[test]
    fn clock_saturates_at_end_of_time() {
        let near_end = DateTime::<Utc>::MAX_UTC - chrono::Duration::seconds(1);
        let clock = SimClock::running_from(near_end, MAX_TIME_SPEED);
        std::thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(clock.now(), DateTime::<Utc>::MAX_UTC);

        let mut frozen = SimClock::frozen(near_end);
        frozen.advance(chrono::Duration::days(2));
        assert_eq!(frozen.now(), DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn running_clock_starts_at_anchor() {
        let clock = SimClock::running_from(epoch(), 1.0);
        let drift = clock.now() - epoch();
        assert!(drift >= chrono::Duration::zero());
        assert!(drift < chrono::Duration::seconds(5));
    }

    #[test]
    fn stopped_running_clock_holds_time() {
        let mut clock = SimClock::running_from(epoch(), 1.0);
        clock.set_speed(0.0);
        let first = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), first);
    }

    #[test]
    fn set_speed_keeps_frozen_clock_frozen() {
        let mut clock = SimClock::frozen(epoch());
        clock.set_speed(100.0);
        assert!(matches!(clock, SimClock::Frozen(_)));
    }

    #[test]
    fn manual_model_setters() {
        let model = ManualModel::new(LatLong::new(10.0, 20.0), SimClock::frozen(epoch()));
        assert_eq!(model.location(), LatLong::new(10.0, 20.0));

        model.set_location(LatLong::new(-33.9, 151.2));
        model.advance(chrono::Duration::minutes(1));
        let pointing = Pointing {
            line_of_sight: Vector3::Z,
            perpendicular: Vector3::Y,
        };
        model.set_pointing(pointing);

        assert_eq!(model.location(), LatLong::new(-33.9, 151.2));
        assert_eq!(model.time(), epoch() + chrono::Duration::minutes(1));
        assert_eq!(model.pointing(), pointing);
    }
}
