//! Mouse look: yaw на тело, clamped pitch на камеру
//!
//! Линейный отклик без smoothing/acceleration.

use bevy::prelude::*;

use super::config::FirstPersonConfig;
use super::state::ControllerState;

/// Clamp как у движка: сначала min, потом max
///
/// `f32::clamp` паникует при min > max (отрицательный limit),
/// здесь такой config просто прижимает pitch к `-limit`.
pub fn clamp_pitch(value: f32, limit: f32) -> f32 {
    if value < -limit {
        -limit
    } else if value > limit {
        limit
    } else {
        value
    }
}

/// Local rotation камеры для заданного pitch (градусы, положительный = вниз)
///
/// Только ось X: yaw/roll у камеры всегда нулевые.
pub fn pitch_rotation(vertical_rotation: f32) -> Quat {
    Quat::from_rotation_x(-vertical_rotation.to_radians())
}

/// Look шаг кадра, возвращает применённый yaw (градусы, положительный = вправо)
pub fn apply(
    config: &FirstPersonConfig,
    state: &mut ControllerState,
    look_delta: Vec2,
    delta: f32,
    body: &mut Transform,
    camera: &mut Transform,
) -> f32 {
    let yaw = look_delta.x * config.mouse_sensitivity * delta;
    let pitch = look_delta.y * config.mouse_sensitivity * delta;

    // Инкрементальный поворот вокруг world up
    body.rotate_y(-yaw.to_radians());

    state.vertical_rotation = clamp_pitch(state.vertical_rotation - pitch, config.vertical_look_limit);

    // Абсолютный поворот — камера не копит свой yaw
    camera.rotation = pitch_rotation(state.vertical_rotation);

    yaw
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_yaw_rotates_body_only() {
        let config = FirstPersonConfig::default();
        let mut state = ControllerState::default();
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::from_xyz(0.0, 1.6, 0.0);

        // 0.9 * 100 * 1.0 = 90° вправо
        let yaw = apply(&config, &mut state, Vec2::new(0.9, 0.0), 1.0, &mut body, &mut camera);

        assert!((yaw - 90.0).abs() < 1e-4);
        let forward = *body.forward();
        assert!((forward.x - 1.0).abs() < 1e-4, "forward = {:?}", forward);
        assert_eq!(state.vertical_rotation, 0.0);
        assert!(camera.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_mouse_up_looks_up() {
        let config = FirstPersonConfig::default();
        let mut state = ControllerState::default();
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::IDENTITY;

        // 0.1 * 100 * 1.0 = 10° вверх
        apply(&config, &mut state, Vec2::new(0.0, 0.1), 1.0, &mut body, &mut camera);

        assert!((state.vertical_rotation + 10.0).abs() < 1e-4);
        assert!(camera.forward().y > 0.0, "камера должна смотреть вверх");
        // Тело не наклоняется
        assert!(body.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_pitch_clamped_for_random_sequences() {
        let config = FirstPersonConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..20 {
            let mut state = ControllerState::default();
            let mut body = Transform::IDENTITY;
            let mut camera = Transform::IDENTITY;

            for _ in 0..500 {
                let delta_y = rng.gen_range(-40.0..40.0);
                let dt = rng.gen_range(0.001..0.1);
                apply(&config, &mut state, Vec2::new(0.0, delta_y), dt, &mut body, &mut camera);

                let limit = config.vertical_look_limit;
                assert!(
                    (-limit..=limit).contains(&state.vertical_rotation),
                    "pitch {} вне [-{}, {}]",
                    state.vertical_rotation,
                    limit,
                    limit
                );
            }
        }
    }

    #[test]
    fn test_pitch_saturates_at_limit() {
        let config = FirstPersonConfig::default();
        let mut state = ControllerState::default();
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::IDENTITY;

        apply(&config, &mut state, Vec2::new(0.0, -100.0), 1.0, &mut body, &mut camera);
        assert_eq!(state.vertical_rotation, 35.0);

        // Возврат начинается сразу от limit, без "накопленного" хвоста
        apply(&config, &mut state, Vec2::new(0.0, 0.05), 1.0, &mut body, &mut camera);
        assert!((state.vertical_rotation - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_sensitivity_disables_look() {
        let config = FirstPersonConfig {
            mouse_sensitivity: 0.0,
            ..default()
        };
        let mut state = ControllerState::default();
        let mut body = Transform::IDENTITY;
        let mut camera = Transform::IDENTITY;

        let yaw = apply(&config, &mut state, Vec2::new(50.0, 50.0), 0.016, &mut body, &mut camera);

        assert_eq!(yaw, 0.0);
        assert_eq!(state.vertical_rotation, 0.0);
        assert!(body.rotation.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_negative_limit_does_not_panic() {
        assert_eq!(clamp_pitch(10.0, -5.0), 5.0);
        assert_eq!(clamp_pitch(-10.0, 35.0), -35.0);
        assert_eq!(clamp_pitch(12.0, 35.0), 12.0);
    }
}
