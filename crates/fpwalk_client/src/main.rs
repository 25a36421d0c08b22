use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use fpwalk_simulation::{init_logger, spawn_first_person_player, FirstPersonConfig, FirstPersonControllerPlugin};

mod input;

use input::PlayerInputPlugin;

fn main() {
    init_logger();

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "FPWALK".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics (KinematicCharacterController = mover)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // First-person controller (ECS logic)
        .add_plugins(FirstPersonControllerPlugin)
        // Keyboard/mouse → FrameInput, cursor lock
        .add_plugins(PlayerInputPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Capsule игрока: половина высоты цилиндра + радиус
const PLAYER_HALF_HEIGHT: f32 = 0.5;
const PLAYER_RADIUS: f32 = 0.4;

/// Spawn ground, boxes, light и игрока с камерой
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane (40x40m)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Collider::cuboid(20.0, 0.1, 20.0),
    ));

    // Несколько ящиков — есть во что упереться и на что запрыгнуть
    let crate_mesh = meshes.add(Cuboid::new(1.0, 1.0, 1.0));
    let crate_material = materials.add(Color::srgb(0.6, 0.45, 0.3));
    for (x, z, size) in [(3.0, -4.0, 1.0), (-2.5, -6.0, 0.6), (0.0, -10.0, 1.4)] {
        commands.spawn((
            Mesh3d(crate_mesh.clone()),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_xyz(x, size * 0.5, z).with_scale(Vec3::splat(size)),
            Collider::cuboid(0.5, 0.5, 0.5),
        ));
    }

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
        affects_lightmapped_meshes: false,
    });

    // Игрок: capsule центр на высоте half_height + radius
    let (body, camera) = spawn_first_person_player(
        &mut commands,
        Vec3::new(0.0, PLAYER_HALF_HEIGHT + PLAYER_RADIUS, 0.0),
        FirstPersonConfig::default(),
        Vec3::new(0.0, 0.7, 0.0), // глаза чуть ниже макушки
    );

    commands.entity(body).insert((
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(PLAYER_HALF_HEIGHT, PLAYER_RADIUS),
        KinematicCharacterController {
            snap_to_ground: Some(CharacterLength::Absolute(0.2)),
            ..default()
        },
        Visibility::default(),
    ));

    commands.entity(camera).insert(Camera3d::default());
}
