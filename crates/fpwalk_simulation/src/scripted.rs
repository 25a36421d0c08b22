//! Scripted input для headless прогонов
//!
//! Детерминированный "бот": случайно ходит, бегает, прыгает и крутит
//! камерой. Seed берётся из DeterministicRng.

use bevy::prelude::*;
use rand::Rng;

use crate::controller::FrameInput;
use crate::physics::FirstPersonSet;
use crate::DeterministicRng;

/// Marker: FrameInput этого entity заполняет scripted sampler
///
/// Вероятности вне [0, 1] прижимаются к границам, NaN = 0.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScriptedInput {
    /// Вероятность кадра без движения
    pub idle_chance: f64,
    /// Вероятность нажатия jump в кадре
    pub jump_chance: f64,
}

/// Вероятность, безопасная для `gen_bool` (паникует вне [0, 1])
pub fn sanitize_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            idle_chance: 0.25,
            jump_chance: 0.02,
        }
    }
}

/// Генерирует input кадра из seeded RNG
pub fn sample_scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut query: Query<(&ScriptedInput, &mut FrameInput)>,
) {
    for (script, mut input) in query.iter_mut() {
        let rng = &mut rng.rng;

        input.move_axes = if rng.gen_bool(sanitize_chance(script.idle_chance)) {
            Vec2::ZERO
        } else {
            Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0))
        };
        input.sprint_left = rng.gen_bool(0.2);
        input.sprint_right = false;
        input.jump = rng.gen_bool(sanitize_chance(script.jump_chance));
        input.look_delta = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-1.0..1.0));
    }
}

/// Plugin scripted input (headless binary / тесты)
pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sample_scripted_input.in_set(FirstPersonSet::Sample));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_sanitize_chance() {
        assert_eq!(sanitize_chance(0.3), 0.3);
        assert_eq!(sanitize_chance(-2.0), 0.0);
        assert_eq!(sanitize_chance(7.5), 1.0);
        assert_eq!(sanitize_chance(f64::NAN), 0.0);
    }

    #[test]
    fn test_out_of_range_chances_do_not_panic() {
        let mut world = World::new();
        world.insert_resource(DeterministicRng::new(3));
        let scripted = world
            .spawn((
                ScriptedInput {
                    idle_chance: -1.0,
                    jump_chance: 5.0,
                },
                FrameInput::default(),
            ))
            .id();

        world.run_system_once(sample_scripted_input).unwrap();

        // jump_chance → 1: прыжок каждый кадр
        assert!(world.get::<FrameInput>(scripted).unwrap().jump);
    }
}
