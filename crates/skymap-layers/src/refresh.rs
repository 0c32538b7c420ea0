//! When a time-dependent source recomputes its geometry.

use chrono::{DateTime, Utc};
use skymap_config::schema::RefreshConfig;
use std::time::Duration;

/// Thresholds for [`RefreshGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Simulated time that must pass before an eager refresh.
    pub min_interval: Duration,
    /// Eager refreshes allowed after each initialization.
    pub startup_refreshes: u32,
    /// Simulated time that must pass once eager refreshes are used up.
    pub steady_interval: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::from(&RefreshConfig::default())
    }
}

impl From<&RefreshConfig> for RefreshPolicy {
    fn from(config: &RefreshConfig) -> Self {
        Self {
            min_interval: Duration::from_millis(config.min_interval_ms),
            startup_refreshes: config.startup_refreshes,
            steady_interval: Duration::from_millis(config.steady_interval_ms),
        }
    }
}

/// Decides, tick by tick, whether geometry is stale enough to recompute.
///
/// Initialization always refreshes and restores the startup budget. While the
/// budget lasts, a tick refreshes once more than `min_interval` of simulated
/// time has passed since the last refresh, spending one unit; this lets a
/// freshly registered layer follow a location fix that is still settling.
/// Afterwards only `steady_interval` counts. Elapsed time is taken as an
/// absolute difference, so a clock set backwards also triggers a refresh.
#[derive(Debug, Clone)]
pub struct RefreshGate {
    policy: RefreshPolicy,
    last: Option<DateTime<Utc>>,
    remaining_startup: u32,
}

impl RefreshGate {
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            policy,
            last: None,
            remaining_startup: policy.startup_refreshes,
        }
    }

    /// Record the unconditional refresh done by initialization.
    pub fn initialized(&mut self, now: DateTime<Utc>) {
        self.last = Some(now);
        self.remaining_startup = self.policy.startup_refreshes;
    }

    /// Whether to refresh at `now`. A `true` answer is recorded as a refresh.
    pub fn should_refresh(&mut self, now: DateTime<Utc>) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return true;
        };

        let delta = now - last;
        let delta = if delta < chrono::Duration::zero() { -delta } else { delta };
        let elapsed = delta.to_std().unwrap_or(Duration::MAX);
        let due = if self.remaining_startup > 0 {
            elapsed > self.policy.min_interval
        } else {
            elapsed > self.policy.steady_interval
        };

        if due {
            self.remaining_startup = self.remaining_startup.saturating_sub(1);
            self.last = Some(now);
        }
        due
    }

    pub fn remaining_startup(&self) -> u32 {
        self.remaining_startup
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }
}
