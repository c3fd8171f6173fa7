//! Schedule domain: system ordering and character attachment.

mod attach;

pub use attach::AttachedCharacters;

use bevy::app::{RunFixedMainLoop, RunFixedMainLoopSystems};
use bevy::prelude::*;

use crate::schedule::attach::{attach_characters, detach_characters};

/// Locomotion phases in per-frame order.
///
/// `Sense` runs on the variable-rate tick right before the fixed loop, so
/// every fixed step sees ground state from this frame (or, when the fixed
/// loop catches up several steps, at most one frame old). `Integrate` and
/// `Commit` run once per fixed step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSystems {
    Sense,
    Integrate,
    Commit,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttachedCharacters>()
            .configure_sets(
                RunFixedMainLoop,
                LocomotionSystems::Sense.in_set(RunFixedMainLoopSystems::BeforeFixedMainLoop),
            )
            .configure_sets(
                FixedUpdate,
                (LocomotionSystems::Integrate, LocomotionSystems::Commit).chain(),
            )
            .add_systems(PreUpdate, (detach_characters, attach_characters).chain());
    }
}
