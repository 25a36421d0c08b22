//! First-person контроллер (engine-agnostic ядро)
//!
//! Порядок внутри кадра фиксированный: movement → look → bob.
//! Movement использует ориентацию тела с ПРОШЛОГО кадра,
//! новый yaw от look влияет только на следующий кадр.
//!
//! Ядро — чистая функция от (config, state, input, dt) плюс два
//! делегированных вызова mover'а (grounded query + move).

pub mod bob;
pub mod config;
pub mod error;
pub mod input;
pub mod look;
pub mod motion;
pub mod state;


use bevy::prelude::*;

pub use config::{FirstPersonConfig, GROUNDED_STICK_VELOCITY, SPRINT_BOB_MULTIPLIER};
pub use error::{ConfigError, InitError};
pub use input::FrameInput;
pub use motion::MotionOutcome;
pub use state::ControllerState;

/// Collision-aware mover (character controller движка)
///
/// Разрешение коллизий целиком на стороне реализации.
pub trait CharacterMover {
    /// Grounded по результату последнего move
    fn is_grounded(&self) -> bool;

    /// Сдвинуть тело на displacement (world space, уже умножен на dt)
    fn move_by(&mut self, displacement: Vec3);
}

/// Захват курсора (вызывается один раз при инициализации)
pub trait CursorCapture {
    fn capture_cursor(&mut self);
}

/// Итог одного тика
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Displacement, отданный mover'у
    pub displacement: Vec3,
    /// Grounded на начало кадра
    pub grounded: bool,
    /// Прыжок стартовал в этом кадре
    pub jumped: bool,
    /// Применённый yaw (градусы)
    pub yaw: f32,
}

/// Один кадр контроллера
///
/// `body` — transform тела (yaw), `camera` — LOCAL transform камеры (pitch + bob).
pub fn tick(
    config: &FirstPersonConfig,
    state: &mut ControllerState,
    input: &FrameInput,
    delta: f32,
    body: &mut Transform,
    camera: &mut Transform,
    mover: &mut impl CharacterMover,
) -> TickReport {
    let motion = motion::integrate(config, state, input, delta, body, mover);
    let yaw = look::apply(config, state, input.look_delta, delta, body, camera);
    bob::apply(config, state, input, delta, camera);

    TickReport {
        displacement: motion.displacement,
        grounded: motion.grounded,
        jumped: motion.jumped,
        yaw,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::CharacterMover;
    use bevy::prelude::Vec3;

    /// Mover с фиксированным grounded, записывает все moves
    pub struct RecordingMover {
        pub grounded: bool,
        pub moves: Vec<Vec3>,
    }

    impl RecordingMover {
        pub fn grounded() -> Self {
            Self {
                grounded: true,
                moves: Vec::new(),
            }
        }

        pub fn airborne() -> Self {
            Self {
                grounded: false,
                moves: Vec::new(),
            }
        }
    }

    impl CharacterMover for RecordingMover {
        fn is_grounded(&self) -> bool {
            self.grounded
        }

        fn move_by(&mut self, displacement: Vec3) {
            self.moves.push(displacement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingMover;
    use super::*;

    #[test]
    fn test_movement_uses_previous_frame_yaw() {
        let config = FirstPersonConfig::default();
        let mut state = ControllerState::default();
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::from_xyz(0.0, 1.6, 0.0);
        let mut mover = RecordingMover::grounded();

        // Кадр 1: идём вперёд и одновременно поворачиваем на 90° вправо
        let input = FrameInput {
            move_axes: Vec2::new(0.0, 1.0),
            look_delta: Vec2::new(9.0, 0.0),
            ..default()
        };
        let first = tick(&config, &mut state, &input, 0.1, &mut body, &mut camera, &mut mover);

        // Движение ещё по старому forward (-Z)
        assert!((first.displacement.z + 0.5).abs() < 1e-5);
        assert!(first.displacement.x.abs() < 1e-5);
        assert!((first.yaw - 90.0).abs() < 1e-3);

        // Кадр 2: уже по новому forward (+X)
        let input = FrameInput {
            move_axes: Vec2::new(0.0, 1.0),
            ..default()
        };
        let second = tick(&config, &mut state, &input, 0.1, &mut body, &mut camera, &mut mover);
        assert!((second.displacement.x - 0.5).abs() < 1e-4, "x = {}", second.displacement.x);
    }

    #[test]
    fn test_tick_full_frame() {
        let config = FirstPersonConfig {
            bob_amount: 0.05,
            ..default()
        };
        let mut state = ControllerState {
            default_camera_y: 1.6,
            ..default()
        };
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::from_xyz(0.0, 1.6, 0.0);
        let mut mover = RecordingMover::grounded();
        let input = FrameInput {
            move_axes: Vec2::new(1.0, 0.0),
            jump: true,
            look_delta: Vec2::new(0.0, -0.2),
            ..default()
        };

        let report = tick(&config, &mut state, &input, 0.1, &mut body, &mut camera, &mut mover);

        assert!(report.grounded);
        assert!(report.jumped);
        assert_eq!(mover.moves.len(), 1);
        assert_eq!(state.vertical_velocity, config.jump_speed);
        // Strafe вправо (+X)
        assert!((report.displacement.x - 0.5).abs() < 1e-5);
        // -(-0.2) * 100 * 0.1 = 2° вниз
        assert!((state.vertical_rotation - 2.0).abs() < 1e-4);
        // Bob: timer = 0.5, y = 1.6 + sin(0.5) * 0.05
        assert!((camera.translation.y - (1.6 + 0.5_f32.sin() * 0.05)).abs() < 1e-6);
    }
}
