//! Настройки first-person контроллера
//!
//! Восемь независимых параметров, выставляются до первого тика
//! и могут меняться в runtime (эффект со следующего кадра).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Вертикальная скорость на земле (m/s)
///
/// Небольшое отрицательное значение прижимает mover к полу,
/// иначе grounded-флаг от collision sweep начинает "мигать".
pub const GROUNDED_STICK_VELOCITY: f32 = -0.5;

/// Во сколько раз ускоряется bob при sprint
pub const SPRINT_BOB_MULTIPLIER: f32 = 3.0;

/// Максимально допустимый pitch limit (градусы)
pub const MAX_LOOK_LIMIT: f32 = 90.0;

/// Tuning-параметры контроллера (designer-facing)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct FirstPersonConfig {
    /// Скорость ходьбы (units/sec)
    pub move_speed: f32,
    /// Скорость бега при зажатом Shift (units/sec)
    pub sprint_speed: f32,
    /// Частота camera bob при ходьбе (при sprint ×3)
    pub bob_speed: f32,
    /// Амплитуда camera bob (units)
    pub bob_amount: f32,
    /// Множитель mouse input (градусы на единицу оси в секунду)
    pub mouse_sensitivity: f32,
    /// Максимальный наклон камеры вверх/вниз (градусы)
    pub vertical_look_limit: f32,
    /// Начальная вертикальная скорость прыжка (m/s)
    pub jump_speed: f32,
    /// Гравитация (m/s², обычно отрицательная)
    pub gravity: f32,
}

impl Default for FirstPersonConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sprint_speed: 8.0,
            bob_speed: 5.0,
            bob_amount: 0.0003,
            mouse_sensitivity: 100.0,
            vertical_look_limit: 35.0,
            jump_speed: 5.0,
            gravity: -9.81, // Earth gravity
        }
    }
}

impl FirstPersonConfig {
    /// Скорость для текущего кадра
    pub fn current_speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.move_speed
        }
    }

    /// Частота bob для текущего кадра
    pub fn current_bob_speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.bob_speed * SPRINT_BOB_MULTIPLIER
        } else {
            self.bob_speed
        }
    }

    /// Проверка preconditions
    ///
    /// Контроллер работает и с "плохими" значениями (например нулевая
    /// sensitivity просто выключает look), поэтому результат — только
    /// диагностика при инициализации, а не отказ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("sprint_speed", self.sprint_speed),
            ("bob_speed", self.bob_speed),
            ("bob_amount", self.bob_amount),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("vertical_look_limit", self.vertical_look_limit),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // gravity намеренно не проверяем по знаку
        for &(field, value) in &fields[..7] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.vertical_look_limit > MAX_LOOK_LIMIT {
            return Err(ConfigError::LookLimitTooLarge {
                limit: self.vertical_look_limit,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = FirstPersonConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.sprint_speed, 8.0);
        assert_eq!(config.gravity, -9.81);
    }

    #[test]
    fn test_current_speed_and_bob() {
        let config = FirstPersonConfig::default();
        assert_eq!(config.current_speed(false), 5.0);
        assert_eq!(config.current_speed(true), 8.0);
        assert_eq!(config.current_bob_speed(false), 5.0);
        assert_eq!(config.current_bob_speed(true), 15.0);
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = FirstPersonConfig {
            mouse_sensitivity: f32::NAN,
            ..default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "mouse_sensitivity", .. })
        ));
    }

    #[test]
    fn test_validate_negative_and_limit() {
        let negative = FirstPersonConfig {
            bob_amount: -1.0,
            ..default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::Negative { field: "bob_amount", .. })
        ));

        let too_wide = FirstPersonConfig {
            vertical_look_limit: 120.0,
            ..default()
        };
        assert!(matches!(
            too_wide.validate(),
            Err(ConfigError::LookLimitTooLarge { .. })
        ));

        // Положительная гравитация странная, но допустима
        let upside_down = FirstPersonConfig {
            gravity: 9.81,
            ..default()
        };
        assert!(upside_down.validate().is_ok());
    }

    #[test]
    fn test_zero_sensitivity_is_valid() {
        let config = FirstPersonConfig {
            mouse_sensitivity: 0.0,
            ..default()
        };
        assert!(config.validate().is_ok());
    }
}
