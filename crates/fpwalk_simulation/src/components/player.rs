//! Player тело и камера

use bevy::prelude::*;

use crate::controller::InitError;

/// Marker component для player-controlled тела
///
/// # Single-player
/// Обычно только один entity имеет этот компонент, но системы
/// контроллера работают с любым количеством.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Marker для камеры игрока (child entity тела)
///
/// Transform камеры — LOCAL относительно тела: pitch + bob offset.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerCamera;

/// Связь тело → камера
///
/// Разрешается один раз при инициализации; после этого
/// считается валидной всё время жизни контроллера.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstPersonCamera(pub Entity);

/// Инициализация провалилась — контроллер этого entity выключен
///
/// Не переинициализируется: это precondition violation, а не временное состояние.
#[derive(Component, Debug, Clone)]
pub struct ControllerFault(pub InitError);
