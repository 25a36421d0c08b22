//! Persistent состояние контроллера (между кадрами)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::CursorCapture;

/// Состояние first-person контроллера
///
/// Мутируется только tick'ом своего entity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct ControllerState {
    /// Вертикальная скорость (m/s): прижата к полу / гравитация / прыжок
    pub vertical_velocity: f32,
    /// Накопленный pitch камеры (градусы, положительный = вниз), clamped
    pub vertical_rotation: f32,
    /// Фаза sine-волны camera bob (сбрасывается в 0 когда стоим)
    pub bob_timer: f32,
    /// Local Y камеры при инициализации — точка покоя bob
    pub default_camera_y: f32,
}

impl ControllerState {
    /// Инициализация: запоминаем rest height камеры и захватываем курсор
    pub fn capture(camera: &Transform, cursor: &mut impl CursorCapture) -> Self {
        cursor.capture_cursor();

        Self {
            default_camera_y: camera.translation.y,
            ..default()
        }
    }
}
