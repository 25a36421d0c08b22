//! Headless симуляция FPWALK
//!
//! Scripted игрок бегает по плоскому полу без рендера.

use bevy::prelude::*;
use fpwalk_simulation::{
    create_headless_app, log_info, spawn_first_person_player, ControllerState, FirstPersonConfig,
    FlatGround, ScriptedInput, ScriptedInputPlugin,
};

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    app.add_plugins(ScriptedInputPlugin);
    log_info(&format!("Starting FPWALK headless simulation (seed: {})", seed));

    let world = app.world_mut();
    let body = {
        let mut commands = world.commands();
        let (body, _camera) = spawn_first_person_player(
            &mut commands,
            Vec3::ZERO,
            FirstPersonConfig::default(),
            Vec3::new(0.0, 1.6, 0.0),
        );
        commands
            .entity(body)
            .insert((FlatGround::default(), ScriptedInput::default()));
        body
    };
    world.flush();

    // 1000 кадров ≈ 16.7 секунд
    for frame in 0..1000 {
        app.update();

        if frame % 100 == 0 {
            let world = app.world();
            let (Some(transform), Some(state)) = (
                world.get::<Transform>(body),
                world.get::<ControllerState>(body),
            ) else {
                continue;
            };
            log_info(&format!(
                "Frame {}: pos = {:.2?}, vy = {:.2}, pitch = {:.1}°",
                frame, transform.translation, state.vertical_velocity, state.vertical_rotation
            ));
        }
    }

    log_info("Simulation complete!");
}
