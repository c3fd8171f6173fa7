//! Movement domain: input intents and locomotion notifications.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::ground::GroundTransitions;

/// Discrete input change delivered by the input provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputIntentKind {
    /// Horizontal axis value, expected in [-1, 1].
    Move(f32),
    SprintStarted,
    SprintCanceled,
    JumpPressed,
    JumpReleased,
}

/// Input addressed to one character. Ignored unless the character is attached.
#[derive(Debug, Clone, Copy)]
pub struct InputIntent {
    pub entity: Entity,
    pub kind: InputIntentKind,
}

impl Message for InputIntent {}

/// Emitted when a fixed step commits a velocity different from the last one.
/// A character at rest commits the same value every step and sends nothing.
#[derive(Debug, Clone, Copy)]
pub struct VelocityChanged {
    pub entity: Entity,
    pub velocity: Vec3,
}

impl Message for VelocityChanged {}

#[derive(Debug, Clone, Copy)]
pub struct GroundedChanged {
    pub entity: Entity,
    pub grounded: bool,
}

impl Message for GroundedChanged {}

#[derive(Debug, Clone, Copy)]
pub struct Landed {
    pub entity: Entity,
}

impl Message for Landed {}

/// Left the ground while already moving down (walked off a ledge).
#[derive(Debug, Clone, Copy)]
pub struct StartedFalling {
    pub entity: Entity,
}

impl Message for StartedFalling {}

/// Forwards ground transitions and committed velocities as messages.
/// Holds no state and never feeds back into the integrator.
#[derive(SystemParam)]
pub struct LocomotionEmitter<'w> {
    grounded_changed: MessageWriter<'w, GroundedChanged>,
    landed: MessageWriter<'w, Landed>,
    started_falling: MessageWriter<'w, StartedFalling>,
    velocity_changed: MessageWriter<'w, VelocityChanged>,
}

impl LocomotionEmitter<'_> {
    /// Writes grounded-changed before landed, so readers draining both in
    /// order see the same sequence the sensor produced.
    pub fn ground_transitions(&mut self, entity: Entity, transitions: GroundTransitions) {
        if let Some(grounded) = transitions.grounded_changed {
            self.grounded_changed
                .write(GroundedChanged { entity, grounded });
        }
        if transitions.landed {
            self.landed.write(Landed { entity });
        }
        if transitions.started_falling {
            self.started_falling.write(StartedFalling { entity });
        }
    }

    pub fn velocity_committed(&mut self, entity: Entity, previous: Vec3, velocity: Vec3) {
        if velocity != previous {
            self.velocity_changed
                .write(VelocityChanged { entity, velocity });
        }
    }
}
