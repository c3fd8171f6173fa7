//! Data definitions for the locomotion config file.

use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Schema version this build understands.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Root of a `*.locomotion.ron` file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionConfigDef {
    pub schema_version: u32,
    pub tuning: TuningDef,
    pub sensor: SensorDef,
    #[serde(default)]
    pub simulation: SimulationDef,
}

/// Motion constants read by the integrator every fixed step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningDef {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub ground_accel: f32,
    pub ground_decel: f32,
    pub air_accel: f32,
    pub air_decel: f32,
    /// Vertical velocity assigned on a jump (not added).
    pub jump_force: f32,
    /// Jump charges between landings, ground jump included.
    pub max_jumps: u32,
    /// Must be negative.
    pub gravity: f32,
    /// Gravity scale while descending.
    pub fall_multiplier: f32,
    /// Vertical velocity held while resting on ground. Zero or negative.
    pub ground_stick_force: f32,
    /// Validated but not consumed by the integrator yet.
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Applied once to upward velocity when jump is released mid-rise.
    /// 1.0 keeps full jump height regardless of how long jump is held.
    #[serde(default = "default_jump_cut_multiplier")]
    pub jump_cut_multiplier: f32,
}

fn default_jump_cut_multiplier() -> f32 {
    1.0
}

impl Default for TuningDef {
    fn default() -> Self {
        Self {
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
            coyote_time: 0.1,
            jump_buffer_time: 0.12,
            jump_cut_multiplier: default_jump_cut_multiplier(),
        }
    }
}

/// Ground probe placement relative to the character origin.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SensorDef {
    /// Vertical offset of the probe sphere from the character origin.
    pub offset_y: f32,
    pub radius: f32,
    /// Layers counted as ground. An empty list falls back to `GameLayer::Ground`.
    pub ground_layers: Vec<GameLayer>,
}

impl Default for SensorDef {
    fn default() -> Self {
        Self {
            offset_y: -0.9,
            radius: 0.3,
            ground_layers: vec![GameLayer::Ground],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationDef {
    /// Fixed simulation rate driving the integrator.
    pub fixed_hz: f64,
}

impl Default for SimulationDef {
    fn default() -> Self {
        Self { fixed_hz: 50.0 }
    }
}
