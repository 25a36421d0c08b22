//! Camera bob: sine по local Y камеры пока идём, плавный возврат когда стоим
//!
//! Чисто косметика — коллизии и velocity не трогает.

use bevy::prelude::*;

use super::config::FirstPersonConfig;
use super::input::FrameInput;
use super::state::ControllerState;

/// Bob шаг кадра
///
/// Idle ветка: lerp к rest height с фактором `dt * bob_speed`
/// (базовая скорость, не sprint), фактор прижат к [0, 1].
pub fn apply(
    config: &FirstPersonConfig,
    state: &mut ControllerState,
    input: &FrameInput,
    delta: f32,
    camera: &mut Transform,
) {
    if input.is_moving() {
        state.bob_timer += delta * config.current_bob_speed(input.is_sprinting());
        camera.translation.y = state.default_camera_y + state.bob_timer.sin() * config.bob_amount;
    } else {
        // Фаза всегда стартует заново с нуля
        state.bob_timer = 0.0;

        let target = Vec3::new(camera.translation.x, state.default_camera_y, camera.translation.z);
        let factor = (delta * config.bob_speed).clamp(0.0, 1.0);
        camera.translation = camera.translation.lerp(target, factor);
    }
}
