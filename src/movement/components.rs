//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::events::InputIntentKind;
use crate::movement::ground::{
    GroundProbe, GroundProbeResult, GroundTransitions, resolve_ground_mask,
};
use crate::movement::jump_buffer::JumpBuffer;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Sensors (triggers, pickups) - never count as ground
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Axis used when a requested movement axis has no horizontal length.
pub const DEFAULT_MOVEMENT_AXIS: Vec3 = Vec3::X;

/// Coarse locomotion phase for animation and audio consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionPhase {
    Grounded,
    Rising,
    Falling,
}

/// Persistent integrator state, one per character.
///
/// Mutated by the input handler, the ground sensor and the integrator only.
/// `velocity` changes exclusively when a fixed step commits.
#[derive(Component, Debug, Clone)]
pub struct MotionState {
    pub(crate) velocity: Vec3,
    pub(crate) horizontal_input: f32,
    pub(crate) is_sprinting: bool,
    pub(crate) is_grounded: bool,
    pub(crate) was_grounded: bool,
    pub(crate) jumps_used: u32,
    pub(crate) jump_buffer: JumpBuffer,
    /// Jump press received since the last fixed step.
    pub(crate) jump_pressed: bool,
    /// Jump button currently down, from the last press/release intent.
    pub(crate) jump_held: bool,
    /// Set by a jump; cleared once the cut is applied or the rise ends.
    pub(crate) cut_pending: bool,
    movement_axis: Vec3,
    axis_warned: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            horizontal_input: 0.0,
            is_sprinting: false,
            is_grounded: false,
            was_grounded: false,
            jumps_used: 0,
            jump_buffer: JumpBuffer::default(),
            jump_pressed: false,
            jump_held: false,
            cut_pending: false,
            movement_axis: DEFAULT_MOVEMENT_AXIS,
            axis_warned: false,
        }
    }
}

impl MotionState {
    pub fn new(movement_axis: Vec3) -> Self {
        let mut state = Self::default();
        state.set_movement_axis(movement_axis);
        state
    }

    /// Start from a known velocity, e.g. when respawning mid-air.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    pub fn jumps_used(&self) -> u32 {
        self.jumps_used
    }

    pub fn jump_buffer(&self) -> &JumpBuffer {
        &self.jump_buffer
    }

    pub fn movement_axis(&self) -> Vec3 {
        self.movement_axis
    }

    pub fn phase(&self) -> LocomotionPhase {
        if self.is_grounded && self.velocity.y <= 0.0 {
            LocomotionPhase::Grounded
        } else if self.velocity.y > 0.0 {
            LocomotionPhase::Rising
        } else {
            LocomotionPhase::Falling
        }
    }

    /// Clamped to [-1, 1]; non-finite input reads as no input.
    pub fn set_horizontal_input(&mut self, value: f32) {
        self.horizontal_input = if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.is_sprinting = sprinting;
    }

    /// Project onto the horizontal plane and normalize. A zero axis falls
    /// back to [`DEFAULT_MOVEMENT_AXIS`], warning once per character.
    pub fn set_movement_axis(&mut self, axis: Vec3) {
        match Vec3::new(axis.x, 0.0, axis.z).try_normalize() {
            Some(unit) => self.movement_axis = unit,
            None => {
                if !self.axis_warned {
                    warn!(
                        "Movement axis {:?} has no horizontal direction; using {:?}",
                        axis, DEFAULT_MOVEMENT_AXIS
                    );
                    self.axis_warned = true;
                }
                self.movement_axis = DEFAULT_MOVEMENT_AXIS;
            }
        }
    }

    /// Buffer a jump and flag it for the next fixed step.
    pub fn press_jump(&mut self, now: f64, buffer_time: f32) {
        self.jump_buffer.register(now, buffer_time);
        self.jump_pressed = true;
        self.jump_held = true;
    }

    pub fn release_jump(&mut self) {
        self.jump_held = false;
    }

    pub fn is_jump_held(&self) -> bool {
        self.jump_held
    }

    pub fn apply_intent(&mut self, intent: InputIntentKind, now: f64, buffer_time: f32) {
        match intent {
            InputIntentKind::Move(value) => self.set_horizontal_input(value),
            InputIntentKind::SprintStarted => self.set_sprinting(true),
            InputIntentKind::SprintCanceled => self.set_sprinting(false),
            InputIntentKind::JumpPressed => self.press_jump(now, buffer_time),
            InputIntentKind::JumpReleased => self.release_jump(),
        }
    }

    /// Record a new ground reading and report what changed.
    pub fn update_ground(&mut self, grounded: bool) -> GroundTransitions {
        self.was_grounded = self.is_grounded;
        self.is_grounded = grounded;
        GroundTransitions::detect(self.was_grounded, grounded, self.velocity.y)
    }
}

/// Probe volume under the character's feet.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    /// Probe center relative to the character origin.
    pub offset: Vec3,
    pub radius: f32,
    mask: LayerMask,
    last_result: GroundProbeResult,
}

impl GroundSensor {
    /// An empty `mask` is replaced by the Ground layer with a warning.
    pub fn new(offset: Vec3, radius: f32, mask: LayerMask) -> Self {
        Self {
            offset,
            radius,
            mask: resolve_ground_mask(mask),
            last_result: GroundProbeResult::default(),
        }
    }

    pub fn mask(&self) -> LayerMask {
        self.mask
    }

    pub fn last_result(&self) -> GroundProbeResult {
        self.last_result
    }

    pub fn probe_position(&self, origin: Vec3) -> Vec3 {
        origin + self.offset
    }

    /// Run the probe for a character at `origin` and keep the reading.
    pub fn probe(&mut self, probe: &impl GroundProbe, origin: Vec3) -> GroundProbeResult {
        let position = self.probe_position(origin);
        self.last_result = GroundProbeResult {
            grounded: probe.overlaps(position, self.radius, self.mask),
            position_y: origin.y,
        };
        self.last_result
    }
}
