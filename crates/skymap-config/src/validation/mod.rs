//! Range checks over a parsed config.
//!
//! Problems from every section are reported together, separated by `"; "`.

mod helpers;
mod layers;
mod observer;
mod renderer;


use crate::schema::SkymapConfig;
use skymap_common::ConfigError;

pub fn validate(config: &SkymapConfig) -> Result<(), ConfigError> {
    let mut problems = Vec::new();
    observer::validate_observer(&mut problems, config);
    layers::validate_layers(&mut problems, config);
    renderer::validate_renderer(&mut problems, config);

    if problems.is_empty() {
        return Ok(());
    }
    Err(ConfigError::ValidationError(problems.join("; ")))
}
