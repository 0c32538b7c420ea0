//! Renderer pacing validation.

use crate::schema::SkymapConfig;

use super::helpers::validate_range;

pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &SkymapConfig) {
    let renderer = &config.renderer;
    validate_range(errors, "renderer.frame_rate", renderer.frame_rate, 1, 240);
    validate_range(errors, "renderer.tick_rate", renderer.tick_rate, 1, 120);
    validate_range(
        errors,
        "renderer.max_sections_per_frame",
        renderer.max_sections_per_frame,
        0,
        10_000,
    );
}
