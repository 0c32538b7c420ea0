//! Layer validation: vertex thinning and refresh cadence.

use crate::schema::SkymapConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layers(errors: &mut Vec<String>, config: &SkymapConfig) {
    let continents = &config.layers.continents;
    validate_range(
        errors,
        "layers.continents.vertex_stride",
        continents.vertex_stride,
        1,
        1000,
    );

    let refresh = &continents.refresh;
    validate_range(
        errors,
        "layers.continents.refresh.min_interval_ms",
        refresh.min_interval_ms,
        0,
        3_600_000,
    );
    validate_range(
        errors,
        "layers.continents.refresh.startup_refreshes",
        refresh.startup_refreshes,
        0,
        100,
    );
    if refresh.steady_interval_ms < refresh.min_interval_ms {
        errors.push(format!(
            "layers.continents.refresh.steady_interval_ms = {} must not be below min_interval_ms = {}",
            refresh.steady_interval_ms, refresh.min_interval_ms
        ));
    }
}
