//! Content domain: locomotion config loading and validation.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    CURRENT_SCHEMA_VERSION, LocomotionConfigDef, SensorDef, SimulationDef, TuningDef,
};
pub use loader::{
    CONFIG_SUFFIX, ConfigError, DEFAULT_CONFIG_DIR, LocomotionConfig, find_config_file,
    load_config, parse_config,
};
pub use validation::{ValidationError, validate_config, validate_tuning};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

/// Set when the config could not be loaded. Integration never runs while
/// this resource exists.
#[derive(Resource, Debug)]
pub struct ConfigFailure(pub String);

/// Loads the locomotion config once while the app is built and inserts the
/// tuning, sensor settings and fixed step rate as resources.
pub struct ConfigPlugin {
    pub data_dir: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        match load_config(&self.data_dir) {
            Ok(config) => {
                info!(
                    "Locomotion config loaded: walk={}, sprint={}, jump_force={}, max_jumps={}, fixed_hz={}",
                    config.tuning.walk_speed,
                    config.tuning.sprint_speed,
                    config.tuning.jump_force,
                    config.tuning.max_jumps,
                    config.fixed_hz
                );
                if config.tuning.coyote_time > 0.0 {
                    warn!(
                        "coyote_time = {} is configured but not applied; jumps after leaving ground use air charges",
                        config.tuning.coyote_time
                    );
                }

                app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
                    .insert_resource(config.tuning)
                    .insert_resource(config.sensor);
            }
            Err(err) => {
                error!("Locomotion config rejected: {}", err);
                app.insert_resource(ConfigFailure(err.to_string()))
                    .add_systems(Startup, exit_on_config_failure);
            }
        }
    }
}

fn exit_on_config_failure(failure: Res<ConfigFailure>, mut exit: MessageWriter<AppExit>) {
    error!("Refusing to simulate without locomotion config: {}", failure.0);
    exit.write(AppExit::error());
}
