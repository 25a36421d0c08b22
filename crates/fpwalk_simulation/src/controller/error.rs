//! Ошибки инициализации контроллера

use bevy::prelude::Entity;
use thiserror::Error;

/// Некорректный `FirstPersonConfig`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} is not finite ({value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("vertical_look_limit {limit} exceeds 90 degrees")]
    LookLimitTooLarge { limit: f32 },
}

/// Не удалось разрешить внешние ссылки (камера) при инициализации
///
/// Precondition violation: контроллер для entity больше не запускается.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("body {body:?} has no mover (FlatGround or KinematicCharacterController)")]
    MissingMover { body: Entity },

    #[error("body {body:?} has no FirstPersonCamera link")]
    MissingCameraLink { body: Entity },

    #[error("camera {camera:?} of body {body:?} has no PlayerCamera transform")]
    CameraNotFound { body: Entity, camera: Entity },
}
