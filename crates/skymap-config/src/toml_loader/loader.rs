//! Reading a config file into [`SkymapConfig`].

use crate::schema::SkymapConfig;
use crate::validation;
use skymap_common::ConfigError;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse and validate the config at `path`.
///
/// Missing keys take their serde defaults. Validation problems are logged
/// and the parsed values are kept; only unreadable or malformed files fail.
pub fn load_from_path(path: &Path) -> Result<SkymapConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = parse(&text)?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `<platform config dir>/skymap/config.toml`, seeding it with the
/// commented defaults on first run.
pub fn load_default() -> Result<SkymapConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config yet, seeding defaults");
            create_default_config(&path)?;
            Ok(SkymapConfig::default())
        }
        other => other,
    }
}

fn parse(text: &str) -> Result<SkymapConfig, ConfigError> {
    let config: SkymapConfig = toml::from_str(text)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
    if let Err(e) = validation::validate(&config) {
        warn!(error = %e, "config has invalid values; keeping them as parsed");
    }
    Ok(config)
}
