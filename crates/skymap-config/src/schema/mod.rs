//! Configuration schema types for the sky map.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod layers;
mod observer;
mod renderer;
mod system;

pub use layers::*;
pub use observer::*;
pub use renderer::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SkymapConfig {
    pub observer: ObserverConfig,
    pub layers: LayersConfig,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}
