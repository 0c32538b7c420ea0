//! Render and producer thread pacing.

use serde::{Deserialize, Serialize};

/// Frame pacing for the render thread and tick pacing for the producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Target frames per second (valid range: 1-240).
    pub frame_rate: u32,
    /// Producer ticks per second (valid range: 1-120).
    pub tick_rate: u32,
    /// Sections applied per frame; 0 applies all that are waiting.
    pub max_sections_per_frame: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            tick_rate: 10,
            max_sections_per_frame: 0,
        }
    }
}
