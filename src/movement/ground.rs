//! Movement domain: ground probing and grounded transition detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// Collision backend query used by the ground sensor.
pub trait GroundProbe {
    /// Whether a sphere at `position` overlaps anything in `mask`.
    fn overlaps(&self, position: Vec3, radius: f32, mask: LayerMask) -> bool;
}

impl GroundProbe for SpatialQuery<'_, '_> {
    fn overlaps(&self, position: Vec3, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .shape_intersections(
                &Collider::sphere(radius),
                position,
                Quat::IDENTITY,
                &filter,
            )
            .is_empty()
    }
}

/// Result of one probe. Not persisted beyond the sensor's last reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundProbeResult {
    pub grounded: bool,
    pub position_y: f32,
}

/// Edge-triggered changes between two consecutive ground readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundTransitions {
    /// New grounded value when it differs from the previous reading.
    pub grounded_changed: Option<bool>,
    pub landed: bool,
    pub started_falling: bool,
}

impl GroundTransitions {
    pub fn detect(was_grounded: bool, grounded: bool, vertical_velocity: f32) -> Self {
        Self {
            grounded_changed: (grounded != was_grounded).then_some(grounded),
            landed: grounded && !was_grounded,
            started_falling: !grounded && was_grounded && vertical_velocity < 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.grounded_changed.is_none() && !self.landed && !self.started_falling
    }
}

/// Replace an empty mask with the ground layer. Never widens to all layers.
pub fn resolve_ground_mask(mask: LayerMask) -> LayerMask {
    if mask == LayerMask::NONE {
        warn!("Ground sensor mask is empty; falling back to the Ground layer");
        LayerMask::from(GameLayer::Ground)
    } else {
        mask
    }
}

/// Build a mask from a list of layers.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}
