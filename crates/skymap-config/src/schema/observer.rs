//! Observer configuration: where the sky is seen from and how fast time runs.

use serde::{Deserialize, Serialize};

/// Observer position and simulated clock rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Geographic latitude in degrees (valid range: -90 to 90).
    pub latitude: f64,
    /// Geographic longitude in degrees, east positive (valid range: -180 to 180).
    pub longitude: f64,
    /// Simulated seconds per wall-clock second.
    pub time_speed: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            latitude: 51.4779,
            longitude: -0.0015,
            time_speed: 1.0,
        }
    }
}
