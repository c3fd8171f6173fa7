//! Movement domain: fixed-step integration and velocity commit.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::integrator::integrate_step;
use crate::movement::{LocomotionEmitter, LocomotionTuning, MotionState};

pub(crate) fn integrate_motion(
    time: Res<Time<Virtual>>,
    fixed: Res<Time<Fixed>>,
    tuning: Res<LocomotionTuning>,
    mut characters: Query<(Entity, &mut MotionState)>,
    mut emitter: LocomotionEmitter,
) {
    let now = time.elapsed_secs_f64();
    let dt = fixed.timestep().as_secs_f32();

    for (entity, mut state) in &mut characters {
        let previous = state.velocity();
        let velocity = integrate_step(&mut state, &tuning, now, dt);
        emitter.velocity_committed(entity, previous, velocity);
    }
}

/// Hand the committed velocity to the physics backend.
pub(crate) fn commit_velocity(mut bodies: Query<(&MotionState, &mut LinearVelocity)>) {
    for (state, mut velocity) in &mut bodies {
        velocity.0 = state.velocity();
    }
}
