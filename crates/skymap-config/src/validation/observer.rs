//! Observer validation (latitude, longitude, clock rate).

use crate::schema::SkymapConfig;

use super::helpers::validate_range;

pub(crate) fn validate_observer(errors: &mut Vec<String>, config: &SkymapConfig) {
    let observer = &config.observer;
    validate_range(errors, "observer.latitude", observer.latitude, -90.0, 90.0);
    validate_range(errors, "observer.longitude", observer.longitude, -180.0, 180.0);
    validate_range(
        errors,
        "observer.time_speed",
        observer.time_speed,
        -86_400.0,
        86_400.0,
    );
}
