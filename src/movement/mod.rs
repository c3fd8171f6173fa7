//! Movement domain: character locomotion integrator and its plugin wiring.

mod bootstrap;
mod components;
mod events;
mod ground;
mod integrator;
mod jump_buffer;
mod resources;
pub(crate) mod systems;

pub use bootstrap::character_bundle;
pub use components::{
    DEFAULT_MOVEMENT_AXIS, GameLayer, GroundSensor, LocomotionPhase, MotionState, Player,
};
pub use events::{
    GroundedChanged, InputIntent, InputIntentKind, Landed, LocomotionEmitter, StartedFalling,
    VelocityChanged,
};
pub use ground::{
    GroundProbe, GroundProbeResult, GroundTransitions, layer_mask, resolve_ground_mask,
};
pub use integrator::{INPUT_DEADZONE, integrate_step, move_towards};
pub use jump_buffer::JumpBuffer;
pub use resources::{LocomotionTuning, SensorSettings};

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_input_intents, commit_velocity, integrate_motion, read_keyboard_intents, sense_ground,
};
use crate::schedule::LocomotionSystems;

/// Input routing, ground sensing, fixed-step integration and velocity commit.
///
/// Per frame: intents and ground sensing run in `RunFixedMainLoop` before the
/// fixed loop, then every fixed step integrates and commits. Nothing runs
/// until a [`LocomotionTuning`] resource exists.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InputIntent>()
            .add_message::<VelocityChanged>()
            .add_message::<GroundedChanged>()
            .add_message::<Landed>()
            .add_message::<StartedFalling>()
            .add_systems(
                RunFixedMainLoop,
                (apply_input_intents, sense_ground)
                    .chain()
                    .in_set(LocomotionSystems::Sense)
                    .run_if(resource_exists::<LocomotionTuning>),
            )
            .add_systems(
                FixedUpdate,
                integrate_motion
                    .in_set(LocomotionSystems::Integrate)
                    .run_if(resource_exists::<LocomotionTuning>),
            )
            .add_systems(
                FixedUpdate,
                commit_velocity.in_set(LocomotionSystems::Commit),
            );
    }
}

/// Keyboard adapter and a single player spawn, for running the crate as a
/// standalone demo.
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            spawn_player.run_if(resource_exists::<SensorSettings>),
        )
        .add_systems(
            RunFixedMainLoop,
            read_keyboard_intents
                .in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop)
                .before(LocomotionSystems::Sense),
        );
    }
}
