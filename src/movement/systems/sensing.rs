//! Movement domain: ground sensing on the variable-rate tick.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::ground::GroundProbe;
use crate::movement::{GroundSensor, LocomotionEmitter, MotionState};

/// Characters the ground sensor updates each tick.
pub(crate) type SensedCharacters<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Transform,
        &'static mut GroundSensor,
        &'static mut MotionState,
    ),
>;

pub(crate) fn sense_ground(
    spatial_query: SpatialQuery,
    mut characters: SensedCharacters,
    mut emitter: LocomotionEmitter,
) {
    sense_characters(&spatial_query, &mut characters, &mut emitter);
}

/// Probe every character, update its grounded flags and forward transitions.
pub(crate) fn sense_characters(
    probe: &impl GroundProbe,
    characters: &mut SensedCharacters,
    emitter: &mut LocomotionEmitter,
) {
    for (entity, transform, mut sensor, mut state) in characters.iter_mut() {
        let reading = sensor.probe(probe, transform.translation);
        let transitions = state.update_ground(reading.grounded);

        if transitions.landed {
            debug!(
                "Landed: {:?} at y={}, vy={}",
                entity,
                reading.position_y,
                state.velocity().y
            );
        } else if transitions.grounded_changed == Some(false) {
            debug!(
                "Left ground: {:?}, jumps_used={}",
                entity,
                state.jumps_used()
            );
        }

        emitter.ground_transitions(entity, transitions);
    }
}
