//! Player input sampler
//!
//! Keyboard/mouse → FrameInput игрока. Единственное место, где
//! читаются устройства; симуляция видит только FrameInput.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use fpwalk_simulation::{CursorCaptureRequested, FirstPersonSet, FrameInput, Player};

/// Пиксели мыши → единицы look-оси (как у классических "Mouse X/Y" осей)
pub const LOOK_AXIS_SCALE: f32 = 0.1;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sample_player_input.in_set(FirstPersonSet::Sample),
                (capture_cursor, release_cursor).after(FirstPersonSet::Init),
            ),
        );
    }
}

/// Ось из пары клавиш (+ стрелки как альтернатива)
fn key_axis(keys: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut axis = 0.0;
    if keys.any_pressed(negative) {
        axis -= 1.0;
    }
    if keys.any_pressed(positive) {
        axis += 1.0;
    }
    axis
}

/// Заполняет FrameInput каждый кадр
///
/// # Mapping
/// - A/D, ←/→ → horizontal
/// - W/S, ↑/↓ → vertical
/// - Left/Right Shift → sprint
/// - Space → jump (just_pressed)
/// - Mouse → look (Y инвертирован: экранный Y растёт вниз)
fn sample_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut players: Query<&mut FrameInput, With<Player>>,
) {
    // Курсор свободен → камеру мышью не крутим
    let cursor_locked = windows
        .single()
        .map(|w| w.cursor_options.grab_mode != CursorGrabMode::None)
        .unwrap_or(false);

    let look_delta = if cursor_locked {
        Vec2::new(mouse_motion.delta.x, -mouse_motion.delta.y) * LOOK_AXIS_SCALE
    } else {
        Vec2::ZERO
    };

    let move_axes = Vec2::new(
        key_axis(&keys, [KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]),
        key_axis(&keys, [KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]),
    );

    for mut input in players.iter_mut() {
        *input = FrameInput {
            move_axes,
            sprint_left: keys.pressed(KeyCode::ShiftLeft),
            sprint_right: keys.pressed(KeyCode::ShiftRight),
            jump: keys.just_pressed(KeyCode::Space),
            look_delta,
        };
    }
}

/// CursorCaptureRequested → lock + hide
fn capture_cursor(
    mut requests: EventReader<CursorCaptureRequested>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if requests.read().last().is_none() {
        return;
    }

    let Ok(mut window) = windows.single_mut() else {
        fpwalk_simulation::log_warning("Cursor capture requested but no primary window");
        return;
    };

    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
    fpwalk_simulation::log("🖱️ Cursor locked");
}

/// Escape отпускает курсор, клик в окно — захватывает обратно
fn release_cursor(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::Escape) {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    } else if mouse_buttons.just_pressed(MouseButton::Left)
        && window.cursor_options.grab_mode == CursorGrabMode::None
    {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}
