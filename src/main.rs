use avian3d::prelude::*;
use bevy::prelude::*;

use stride::{ConfigPlugin, MovementPlugin, PlayerInputPlugin, SchedulePlugin};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        ConfigPlugin::default(),
        SchedulePlugin,
        MovementPlugin,
        PlayerInputPlugin,
    ))
    .add_systems(Startup, setup_camera);

    #[cfg(feature = "dev-tools")]
    app.add_plugins(stride::dev::DevToolsPlugin);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 14.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(4.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
