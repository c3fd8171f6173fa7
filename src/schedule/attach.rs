//! Schedule domain: explicit attach/detach of characters to input routing.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::movement::MotionState;

/// Characters currently receiving input intents.
///
/// Every attach is paired with exactly one detach; a repeated attach or a
/// detach without a matching attach is reported and otherwise ignored.
#[derive(Resource, Debug, Default)]
pub struct AttachedCharacters {
    entities: HashSet<Entity>,
}

impl AttachedCharacters {
    pub fn attach(&mut self, entity: Entity) -> bool {
        let inserted = self.entities.insert(entity);
        if !inserted {
            warn!("{:?} is already attached", entity);
        }
        inserted
    }

    pub fn detach(&mut self, entity: Entity) -> bool {
        let removed = self.entities.remove(&entity);
        if !removed {
            warn!("{:?} detached without being attached", entity);
        }
        removed
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub(crate) fn attach_characters(
    added: Query<Entity, Added<MotionState>>,
    mut attached: ResMut<AttachedCharacters>,
) {
    for entity in &added {
        if attached.attach(entity) {
            debug!("Attached {:?}", entity);
        }
    }
}

pub(crate) fn detach_characters(
    mut removed: RemovedComponents<MotionState>,
    mut attached: ResMut<AttachedCharacters>,
) {
    for entity in removed.read() {
        if attached.detach(entity) {
            debug!("Detached {:?}", entity);
        }
    }
}
