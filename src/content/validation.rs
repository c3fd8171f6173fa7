//! Validation for locomotion config values.

use super::data::*;

/// A rejected config value with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for pushing an error when a condition does not hold
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Validate motion constants.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &TuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let values = [
        ("walk_speed", tuning.walk_speed),
        ("sprint_speed", tuning.sprint_speed),
        ("ground_accel", tuning.ground_accel),
        ("ground_decel", tuning.ground_decel),
        ("air_accel", tuning.air_accel),
        ("air_decel", tuning.air_decel),
        ("jump_force", tuning.jump_force),
        ("gravity", tuning.gravity),
        ("fall_multiplier", tuning.fall_multiplier),
        ("ground_stick_force", tuning.ground_stick_force),
        ("coyote_time", tuning.coyote_time),
        ("jump_buffer_time", tuning.jump_buffer_time),
        ("jump_cut_multiplier", tuning.jump_cut_multiplier),
    ];
    for (field, value) in values {
        check!(errors, value.is_finite(), field, "must be finite, got {}", value);
    }
    // Range checks below assume finite values.
    if !errors.is_empty() {
        return errors;
    }

    for (field, value) in [
        ("walk_speed", tuning.walk_speed),
        ("ground_accel", tuning.ground_accel),
        ("ground_decel", tuning.ground_decel),
        ("air_accel", tuning.air_accel),
        ("air_decel", tuning.air_decel),
        ("jump_force", tuning.jump_force),
    ] {
        check!(errors, value >= 0.0, field, "must be >= 0, got {}", value);
    }

    check!(
        errors,
        tuning.sprint_speed > tuning.walk_speed,
        "sprint_speed",
        "must exceed walk_speed ({}), got {}",
        tuning.walk_speed,
        tuning.sprint_speed
    );
    check!(
        errors,
        tuning.ground_accel >= tuning.air_accel,
        "air_accel",
        "must not exceed ground_accel ({}), got {}",
        tuning.ground_accel,
        tuning.air_accel
    );
    check!(
        errors,
        tuning.max_jumps >= 1,
        "max_jumps",
        "must be at least 1, got {}",
        tuning.max_jumps
    );
    check!(
        errors,
        tuning.gravity < 0.0,
        "gravity",
        "must be negative, got {}",
        tuning.gravity
    );
    check!(
        errors,
        tuning.fall_multiplier >= 1.0,
        "fall_multiplier",
        "must be >= 1, got {}",
        tuning.fall_multiplier
    );
    check!(
        errors,
        tuning.ground_stick_force <= 0.0,
        "ground_stick_force",
        "must be <= 0, got {}",
        tuning.ground_stick_force
    );
    check!(
        errors,
        tuning.coyote_time >= 0.0,
        "coyote_time",
        "must be >= 0, got {}",
        tuning.coyote_time
    );
    check!(
        errors,
        tuning.jump_buffer_time >= 0.0,
        "jump_buffer_time",
        "must be >= 0, got {}",
        tuning.jump_buffer_time
    );
    check!(
        errors,
        tuning.jump_cut_multiplier > 0.0 && tuning.jump_cut_multiplier <= 1.0,
        "jump_cut_multiplier",
        "must be in (0, 1], got {}",
        tuning.jump_cut_multiplier
    );

    errors
}

/// Validate a whole config file: tuning, sensor and simulation rate.
pub fn validate_config(config: &LocomotionConfigDef) -> Vec<ValidationError> {
    let mut errors = validate_tuning(&config.tuning);

    check!(
        errors,
        config.sensor.offset_y.is_finite(),
        "sensor.offset_y",
        "must be finite, got {}",
        config.sensor.offset_y
    );
    check!(
        errors,
        config.sensor.radius.is_finite() && config.sensor.radius > 0.0,
        "sensor.radius",
        "must be a positive finite radius, got {}",
        config.sensor.radius
    );
    check!(
        errors,
        config.simulation.fixed_hz.is_finite() && config.simulation.fixed_hz > 0.0,
        "simulation.fixed_hz",
        "must be a positive rate, got {}",
        config.simulation.fixed_hz
    );

    errors
}
