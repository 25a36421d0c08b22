//! Input за один кадр
//!
//! Заполняется sampler'ом (client: keyboard/mouse, headless: scripted),
//! читается tick'ом. Никакого глобального Input singleton.

use bevy::prelude::*;

/// Снимок input для одного кадра
///
/// # Coordinate System
/// - `move_axes.x`: -1.0 (left) → +1.0 (right)
/// - `move_axes.y`: -1.0 (back) → +1.0 (forward)
/// - `look_delta.x`: мышь вправо = положительно
/// - `look_delta.y`: мышь вверх = положительно
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FrameInput {
    /// Horizontal / vertical оси, каждая в [-1, 1]
    pub move_axes: Vec2,

    /// Left Shift
    pub sprint_left: bool,

    /// Right Shift
    pub sprint_right: bool,

    /// Jump — just_pressed (true только в кадр нажатия)
    pub jump: bool,

    /// Mouse delta в единицах look-оси
    pub look_delta: Vec2,
}

impl FrameInput {
    /// Любая из sprint клавиш зажата
    pub fn is_sprinting(&self) -> bool {
        self.sprint_left || self.sprint_right
    }

    /// Есть movement input
    ///
    /// Сравнение строгое (без deadzone): любое ненулевое значение оси — движение.
    pub fn is_moving(&self) -> bool {
        self.move_axes.x != 0.0 || self.move_axes.y != 0.0
    }

    /// Сбрасывает одноразовые поля после тика (jump, mouse delta)
    pub fn consume_one_shots(&mut self) {
        self.jump = false;
        self.look_delta = Vec2::ZERO;
    }
}
