//! Motion integrator: input + grounded → displacement
//!
//! Horizontal план в basis тела (right/forward), вертикаль через
//! собственную velocity (stick-to-ground / gravity / jump).
//! Коллизии — забота mover'а, мы только отдаём ему displacement.

use bevy::prelude::*;

use super::config::{FirstPersonConfig, GROUNDED_STICK_VELOCITY};
use super::input::FrameInput;
use super::state::ControllerState;
use super::CharacterMover;

/// Результат motion шага
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutcome {
    /// Что отдали mover'у (уже умножено на dt)
    pub displacement: Vec3,
    /// Grounded-флаг mover'а на начало кадра
    pub grounded: bool,
    /// Прыжок стартовал в этом кадре
    pub jumped: bool,
}

/// Новая вертикальная скорость
///
/// - grounded: прижимаем к полу, jump перебивает
/// - airborne: гравитация накапливается без terminal velocity
pub fn step_vertical_velocity(
    config: &FirstPersonConfig,
    current: f32,
    grounded: bool,
    jump: bool,
    delta: f32,
) -> f32 {
    if grounded {
        if jump {
            config.jump_speed
        } else {
            GROUNDED_STICK_VELOCITY
        }
    } else {
        current + config.gravity * delta
    }
}

/// Горизонтальная velocity относительно ориентации тела
///
/// Direction НЕ нормализуется: диагональ (1, 1) даёт speed * √2.
pub fn horizontal_velocity(body: &Transform, axes: Vec2, speed: f32) -> Vec3 {
    let direction = *body.right() * axes.x + *body.forward() * axes.y;
    direction * speed
}

/// Motion шаг кадра
///
/// Использует ориентацию тела с прошлого кадра (look идёт после).
pub fn integrate(
    config: &FirstPersonConfig,
    state: &mut ControllerState,
    input: &FrameInput,
    delta: f32,
    body: &Transform,
    mover: &mut impl CharacterMover,
) -> MotionOutcome {
    let grounded = mover.is_grounded();
    let speed = config.current_speed(input.is_sprinting());

    let mut velocity = horizontal_velocity(body, input.move_axes, speed);

    state.vertical_velocity =
        step_vertical_velocity(config, state.vertical_velocity, grounded, input.jump, delta);

    // Вертикаль перезаписываем целиком (body basis может иметь Y компоненту)
    velocity.y = state.vertical_velocity;

    let displacement = velocity * delta;
    mover.move_by(displacement);

    MotionOutcome {
        displacement,
        grounded,
        jumped: grounded && input.jump,
    }
}
