//! Movement domain: character bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionState, Player, SensorSettings};

const CAPSULE_RADIUS: f32 = 0.4;
const CAPSULE_LENGTH: f32 = 1.0;

/// Components for a locomotion-driven character moving along `movement_axis`.
/// Gravity is integrated by the motion state, not the physics backend.
pub fn character_bundle(sensor: &SensorSettings, movement_axis: Vec3) -> impl Bundle {
    (
        // Identity & Movement
        (
            Player,
            MotionState::new(movement_axis),
            sensor.ground_sensor(),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    )
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    sensor: Res<SensorSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let entity = commands
        .spawn((
            character_bundle(&sensor, Vec3::X),
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
            Transform::from_xyz(0.0, 2.0, 0.0),
        ))
        .id();

    info!(
        "Spawning player {:?}: probe offset={}, radius={}",
        entity, sensor.offset, sensor.radius
    );
}
