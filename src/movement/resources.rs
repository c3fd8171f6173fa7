//! Movement domain: tuning and sensor resources.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::ops::Deref;

use crate::content::{SensorDef, TuningDef, ValidationError, validate_tuning};
use crate::movement::GroundSensor;
use crate::movement::ground::{layer_mask, resolve_ground_mask};

/// Validated motion constants. Only constructible through [`TryFrom`], so a
/// zeroed or half-filled tuning can never reach the integrator.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning(TuningDef);

impl TryFrom<TuningDef> for LocomotionTuning {
    type Error = Vec<ValidationError>;

    fn try_from(def: TuningDef) -> Result<Self, Self::Error> {
        let errors = validate_tuning(&def);
        if errors.is_empty() {
            Ok(Self(def))
        } else {
            Err(errors)
        }
    }
}

impl Deref for LocomotionTuning {
    type Target = TuningDef;

    fn deref(&self) -> &TuningDef {
        &self.0
    }
}

impl LocomotionTuning {
    /// Apex height of one jump from rest: h = v^2 / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * -self.gravity)
    }

    /// Height reachable chaining every jump charge at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * self.max_jumps as f32
    }
}

/// Ground probe placement shared by every spawned character.
#[derive(Resource, Debug, Clone)]
pub struct SensorSettings {
    pub offset: Vec3,
    pub radius: f32,
    pub mask: LayerMask,
}

impl SensorSettings {
    pub fn from_def(def: &SensorDef) -> Self {
        Self {
            offset: Vec3::new(0.0, def.offset_y, 0.0),
            radius: def.radius,
            mask: resolve_ground_mask(layer_mask(&def.ground_layers)),
        }
    }

    pub fn ground_sensor(&self) -> GroundSensor {
        GroundSensor::new(self.offset, self.radius, self.mask)
    }
}
