//! Per-layer configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Refresh cadence for layers whose geometry follows the Earth's rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Simulated time that must pass before an eager startup refresh.
    pub min_interval_ms: u64,
    /// Number of eager refreshes allowed after (re)registration.
    pub startup_refreshes: u32,
    /// Simulated time that must pass once the startup refreshes are spent.
    pub steady_interval_ms: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 1000,
            startup_refreshes: 5,
            steady_interval_ms: 10_000,
        }
    }
}

/// Continent outlines drawn from a coastline file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinentsLayerConfig {
    pub visible: bool,
    /// Coastline data file. No file means an empty layer.
    pub coastlines: Option<PathBuf>,
    /// Keep every Nth vertex of each polyline.
    pub vertex_stride: u32,
    pub refresh: RefreshConfig,
}

impl Default for ContinentsLayerConfig {
    fn default() -> Self {
        Self {
            visible: true,
            coastlines: None,
            vertex_stride: 5,
            refresh: RefreshConfig::default(),
        }
    }
}

/// Constellation figures and names from a JSON catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationsLayerConfig {
    pub visible: bool,
    pub catalog: Option<PathBuf>,
}

impl Default for ConstellationsLayerConfig {
    fn default() -> Self {
        Self {
            visible: true,
            catalog: None,
        }
    }
}

/// All layer sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayersConfig {
    pub constellations: ConstellationsLayerConfig,
    pub continents: ContinentsLayerConfig,
}
