//! Movement domain: fixed-step velocity integration.
//!
//! One step reads the last committed velocity into a local accumulator,
//! runs the horizontal sub-step and then the vertical sub-step on it, and
//! writes it back once. Nothing reads the physics backend's velocity in
//! between, so neither sub-step can observe a half-applied frame.

use bevy::prelude::*;

use crate::movement::{LocomotionTuning, MotionState};

/// Horizontal input magnitude below which the character is treated as idle.
/// Measured in input units ([-1, 1]), not speed; inside it the target speed is 0.
pub const INPUT_DEADZONE: f32 = 0.01;

/// Linear approach from `current` to `target`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Advance `state` by one fixed step of `dt` seconds and return the
/// committed velocity. `now` is virtual time in seconds, used to judge the
/// jump buffer.
pub fn integrate_step(
    state: &mut MotionState,
    tuning: &LocomotionTuning,
    now: f64,
    dt: f32,
) -> Vec3 {
    let mut accum = state.velocity;

    apply_horizontal(&mut accum, state, tuning, dt);
    apply_vertical(&mut accum, state, tuning, now, dt);

    if state.jump_pressed {
        try_jump(&mut accum, state, tuning);
    }
    state.jump_pressed = false;

    state.velocity = accum;
    accum
}

/// Writes x and z only.
fn apply_horizontal(accum: &mut Vec3, state: &MotionState, tuning: &LocomotionTuning, dt: f32) {
    let axis = state.movement_axis();
    let has_input = state.horizontal_input.abs() > INPUT_DEADZONE;

    let top_speed = if state.is_sprinting {
        tuning.sprint_speed
    } else {
        tuning.walk_speed
    };
    let target_speed = if has_input {
        top_speed * state.horizontal_input
    } else {
        0.0
    };

    let rate = match (state.is_grounded, has_input) {
        (true, true) => tuning.ground_accel,
        (true, false) => tuning.ground_decel,
        (false, true) => tuning.air_accel,
        (false, false) => tuning.air_decel,
    };

    let current_speed = accum.dot(axis);
    let new_speed = move_towards(current_speed, target_speed, rate * dt);

    let planar = axis * new_speed;
    accum.x = planar.x;
    accum.z = planar.z;
}

/// Writes y only. Sees this step's horizontal result, never the reverse.
fn apply_vertical(
    accum: &mut Vec3,
    state: &mut MotionState,
    tuning: &LocomotionTuning,
    now: f64,
    dt: f32,
) {
    if state.is_grounded && accum.y <= 0.0 {
        state.jumps_used = 0;
        if state.jump_buffer.try_consume(now) {
            try_jump(accum, state, tuning);
        } else {
            accum.y = tuning.ground_stick_force;
            state.cut_pending = false;
        }
        return;
    }

    // Cut once per jump, on the first airborne rising step with the button up.
    if state.cut_pending {
        if accum.y <= 0.0 {
            state.cut_pending = false;
        } else if !state.is_grounded && !state.jump_held {
            accum.y *= tuning.jump_cut_multiplier;
            state.cut_pending = false;
        }
    }

    let mut gravity = tuning.gravity;
    if accum.y < 0.0 {
        gravity *= tuning.fall_multiplier;
    }
    accum.y += gravity * dt;
}

/// Jump if grounded or a charge is left. The impulse is an assignment so
/// jump height never depends on prior vertical momentum.
pub(crate) fn try_jump(accum: &mut Vec3, state: &mut MotionState, tuning: &LocomotionTuning) -> bool {
    if !state.is_grounded && state.jumps_used >= tuning.max_jumps {
        debug!(
            "Jump rejected: airborne with {}/{} jumps used",
            state.jumps_used, tuning.max_jumps
        );
        state.jump_pressed = false;
        return false;
    }

    accum.y = tuning.jump_force;
    state.jumps_used = (state.jumps_used + 1).min(tuning.max_jumps);
    state.jump_buffer.clear();
    state.jump_pressed = false;
    state.cut_pending = true;
    debug!(
        "Jump: grounded={}, jumps_used={}/{}",
        state.is_grounded, state.jumps_used, tuning.max_jumps
    );
    true
}
