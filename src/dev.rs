//! Dev tools: test room geometry and a notification trace.

use avian3d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundedChanged, Landed, StartedFalling, VelocityChanged};

/// Resource toggled with F3; when on, committed velocities are logged too.
#[derive(Resource, Debug, Default)]
pub struct VelocityTrace(pub bool);

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VelocityTrace>()
            .add_systems(Startup, spawn_test_room)
            .add_systems(Update, (toggle_velocity_trace, log_locomotion_messages).chain());
    }
}

fn spawn_test_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // (center, size, color)
    let blocks = [
        // Floor
        (Vec3::new(0.0, -0.5, 0.0), Vec3::new(40.0, 1.0, 4.0), ground_color),
        // Platform 1 - left side
        (Vec3::new(-6.0, 2.0, 0.0), Vec3::new(4.0, 0.5, 4.0), platform_color),
        // Platform 2 - right side, higher
        (Vec3::new(6.0, 3.5, 0.0), Vec3::new(4.0, 0.5, 4.0), platform_color),
        // Platform 3 - center, highest (needs a double jump)
        (Vec3::new(0.0, 6.0, 0.0), Vec3::new(3.0, 0.5, 4.0), platform_color),
    ];

    for (center, size, color) in blocks {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(center),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }
}

fn toggle_velocity_trace(keyboard: Res<ButtonInput<KeyCode>>, mut trace: ResMut<VelocityTrace>) {
    if keyboard.just_pressed(KeyCode::F3) {
        trace.0 = !trace.0;
        info!("Velocity trace: {}", if trace.0 { "on" } else { "off" });
    }
}

fn log_locomotion_messages(
    trace: Res<VelocityTrace>,
    mut grounded: MessageReader<GroundedChanged>,
    mut landed: MessageReader<Landed>,
    mut falling: MessageReader<StartedFalling>,
    mut velocity: MessageReader<VelocityChanged>,
) {
    for message in grounded.read() {
        info!("{:?} grounded={}", message.entity, message.grounded);
    }
    for message in landed.read() {
        info!("{:?} landed", message.entity);
    }
    for message in falling.read() {
        info!("{:?} started falling", message.entity);
    }
    // Drain even when tracing is off so enabling it doesn't dump a backlog.
    for message in velocity.read() {
        if trace.0 {
            info!("{:?} velocity={}", message.entity, message.velocity);
        }
    }
}
