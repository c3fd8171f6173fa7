//! Fixed-timestep character locomotion for a 2.5D platformer.
//!
//! Input intents and ground sensing feed a per-character [`MotionState`];
//! every fixed step the integrator turns it into one committed velocity
//! that is handed to avian3d and announced through bevy messages.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod dev;
pub mod movement;
pub mod schedule;

pub use content::{ConfigError, ConfigPlugin};
pub use movement::{
    GroundedChanged, Landed, LocomotionTuning, MotionState, MovementPlugin, PlayerInputPlugin,
    StartedFalling, VelocityChanged,
};
pub use schedule::{LocomotionSystems, SchedulePlugin};
