//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod integrate;
pub(crate) mod sensing;

pub(crate) use input::{apply_input_intents, read_keyboard_intents};
pub(crate) use integrate::{commit_velocity, integrate_motion};
pub(crate) use sensing::{SensedCharacters, sense_characters, sense_ground};
