//! Settings for the sky map: observer position, which layers start
//! visible, refresh cadence, frame rate and log level.
//!
//! Every section has defaults, so an empty file is a working config.
//! [`ReloadManager`] keeps a running process in step with edits.
//!
//! ```rust,no_run
//! let config = skymap_config::load_config()?;
//! println!("{}", skymap_config::config_to_json(&config));
//! # Ok::<(), skymap_common::ConfigError>(())
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{SkymapConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use skymap_common::ConfigError;

/// Strict load of the default config file; out-of-range values are errors.
///
/// [`toml_loader::load_from_path`] only logs them.
pub fn load_config() -> Result<SkymapConfig, ConfigError> {
    toml_loader::load_default().and_then(|config| {
        validation::validate(&config)?;
        Ok(config)
    })
}

/// Pretty JSON dump, used by `--print-config`.
pub fn config_to_json(config: &SkymapConfig) -> String {
    match serde_json::to_string_pretty(config) {
        Ok(json) => json,
        Err(e) => format!("{{\"error\": \"{e}\"}}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = SkymapConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"observer\""));
        assert!(json.contains("\"layers\""));
        assert!(json.contains("\"constellations\""));
        assert!(json.contains("\"continents\""));
        assert!(json.contains("\"refresh\""));
        assert!(json.contains("\"renderer\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SkymapConfig::default();
        let json = config_to_json(&config);
        let parsed: SkymapConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
