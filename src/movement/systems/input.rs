//! Movement domain: input sampling and intent routing.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{InputIntent, InputIntentKind, LocomotionTuning, MotionState, Player};
use crate::schedule::AttachedCharacters;

/// Keyboard adapter turning key edges into intents for every player.
pub(crate) fn read_keyboard_intents(
    keyboard: Res<ButtonInput<KeyCode>>,
    players: Query<Entity, With<Player>>,
    mut intents: MessageWriter<InputIntent>,
    mut last_axis: Local<f32>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut kinds = Vec::new();
    if x != *last_axis {
        *last_axis = x;
        kinds.push(InputIntentKind::Move(x));
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft) {
        kinds.push(InputIntentKind::SprintStarted);
    }
    if keyboard.just_released(KeyCode::ShiftLeft) {
        kinds.push(InputIntentKind::SprintCanceled);
    }
    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        kinds.push(InputIntentKind::JumpPressed);
    }
    if keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK) {
        kinds.push(InputIntentKind::JumpReleased);
    }

    for entity in &players {
        for kind in &kinds {
            intents.write(InputIntent {
                entity,
                kind: *kind,
            });
        }
    }
}

/// Route intents to attached characters' motion state.
pub(crate) fn apply_input_intents(
    time: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    attached: Res<AttachedCharacters>,
    mut intents: MessageReader<InputIntent>,
    mut states: Query<&mut MotionState>,
) {
    let now = time.elapsed_secs_f64();

    for intent in intents.read() {
        if !attached.contains(intent.entity) {
            debug!("Dropping {:?} for detached {:?}", intent.kind, intent.entity);
            continue;
        }
        let Ok(mut state) = states.get_mut(intent.entity) else {
            continue;
        };
        state.apply_intent(intent.kind, now, tuning.jump_buffer_time);
    }
}
