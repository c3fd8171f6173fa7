//! Content domain: tests for config parsing, validation and file discovery.

use std::fs;
use std::path::PathBuf;

use super::{
    ConfigError, LocomotionConfigDef, SensorDef, SimulationDef, TuningDef, find_config_file,
    load_config, parse_config, validate_config, validate_tuning,
};
use crate::movement::GameLayer;

const VALID_CONFIG: &str = r#"
(
    schema_version: 1,
    tuning: (
        walk_speed: 6.0,
        sprint_speed: 10.0,
        ground_accel: 60.0,
        ground_decel: 70.0,
        air_accel: 30.0,
        air_decel: 20.0,
        jump_force: 8.0,
        max_jumps: 2,
        gravity: -20.0,
        fall_multiplier: 1.8,
        ground_stick_force: -2.0,
        coyote_time: 0.0,
        jump_buffer_time: 0.12,
    ),
    sensor: (
        offset_y: -0.9,
        radius: 0.3,
        ground_layers: [Ground],
    ),
)
"#;

/// Fresh directory under the system temp dir, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "stride-content-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self(path)
    }

    fn write(&self, file: &str, contents: &str) {
        fs::write(self.0.join(file), contents).expect("write scratch file");
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn field_names(errors: &[super::ValidationError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&TuningDef::default()).is_empty());
}

#[test]
fn test_tuning_invariants_reported() {
    let tuning = TuningDef {
        walk_speed: 8.0,
        sprint_speed: 8.0,
        ground_accel: 10.0,
        air_accel: 20.0,
        max_jumps: 0,
        gravity: 0.0,
        fall_multiplier: 0.5,
        ground_stick_force: 1.0,
        coyote_time: -0.1,
        jump_buffer_time: -0.1,
        jump_cut_multiplier: 0.0,
        ..TuningDef::default()
    };

    let fields = field_names(&validate_tuning(&tuning));
    for expected in [
        "sprint_speed",
        "air_accel",
        "max_jumps",
        "gravity",
        "fall_multiplier",
        "ground_stick_force",
        "coyote_time",
        "jump_buffer_time",
        "jump_cut_multiplier",
    ] {
        assert!(fields.contains(&expected), "missing {expected} in {fields:?}");
    }
}

#[test]
fn test_non_finite_values_rejected_alone() {
    let tuning = TuningDef {
        gravity: f32::NAN,
        jump_force: f32::INFINITY,
        ..TuningDef::default()
    };

    let fields = field_names(&validate_tuning(&tuning));
    assert_eq!(fields, vec!["jump_force", "gravity"]);
}

#[test]
fn test_config_checks_sensor_and_rate() {
    let config = LocomotionConfigDef {
        schema_version: 1,
        tuning: TuningDef::default(),
        sensor: SensorDef {
            offset_y: -0.9,
            radius: 0.0,
            ground_layers: vec![GameLayer::Ground],
        },
        simulation: SimulationDef { fixed_hz: 0.0 },
    };

    let fields = field_names(&validate_config(&config));
    assert_eq!(fields, vec!["sensor.radius", "simulation.fixed_hz"]);
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_valid_config() {
    let config = parse_config("inline", VALID_CONFIG).expect("config should parse");

    assert_eq!(config.tuning.walk_speed, 6.0);
    assert_eq!(config.tuning.max_jumps, 2);
    // Optional sections fall back to their defaults.
    assert_eq!(config.tuning.jump_cut_multiplier, 1.0);
    assert_eq!(config.fixed_hz, 50.0);
    assert_eq!(config.sensor.radius, 0.3);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_config("broken.locomotion.ron", "(schema_version: 1,").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("broken.locomotion.ron"));
}

#[test]
fn test_missing_tuning_field_is_parse_error() {
    let without_gravity = VALID_CONFIG.replace("gravity: -20.0,", "");
    let err = parse_config("inline", &without_gravity).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_unknown_schema_version_rejected() {
    let future = VALID_CONFIG.replace("schema_version: 1", "schema_version: 2");
    let err = parse_config("inline", &future).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaVersion { found: 2, .. }));
}

#[test]
fn test_invalid_values_rejected_with_all_errors() {
    let invalid = VALID_CONFIG
        .replace("gravity: -20.0", "gravity: 20.0")
        .replace("max_jumps: 2", "max_jumps: 0");
    let err = parse_config("inline", &invalid).unwrap_err();

    match err {
        ConfigError::Invalid { errors, .. } => {
            let fields = field_names(&errors);
            assert!(fields.contains(&"gravity"));
            assert!(fields.contains(&"max_jumps"));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Discovery tests
// -----------------------------------------------------------------------------

#[test]
fn test_load_single_config() {
    let dir = ScratchDir::new("single");
    dir.write("player.locomotion.ron", VALID_CONFIG);
    dir.write("notes.ron", "()");

    let config = load_config(&dir.0).expect("single config should load");
    assert_eq!(config.tuning.jump_force, 8.0);
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = ScratchDir::new("missing");
    dir.write("other.ron", "()");

    assert!(matches!(
        find_config_file(&dir.0),
        Err(ConfigError::Missing { .. })
    ));
    assert!(matches!(
        load_config(&dir.0.join("does-not-exist")),
        Err(ConfigError::Missing { .. })
    ));
}

#[test]
fn test_multiple_configs_rejected() {
    let dir = ScratchDir::new("ambiguous");
    dir.write("a.locomotion.ron", VALID_CONFIG);
    dir.write("b.locomotion.ron", VALID_CONFIG);

    match load_config(&dir.0) {
        Err(ConfigError::Ambiguous { files }) => {
            assert_eq!(files.len(), 2);
            assert!(files[0].ends_with("a.locomotion.ron"));
            assert!(files[1].ends_with("b.locomotion.ron"));
        }
        other => panic!("expected Ambiguous, got {other:?}"),
    }
}
