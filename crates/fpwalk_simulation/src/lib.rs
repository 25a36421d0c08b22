//! FPWALK Simulation Core
//!
//! First-person контроллер: mouse look, ходьба/бег/прыжок, гравитация, camera bob.
//!
//! Слои:
//! - `controller` — engine-agnostic ядро (чистая per-frame математика)
//! - `physics` — ECS binding: системы, Rapier/FlatGround mover'ы
//! - `components` — маркеры, связи, события для host'а

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod controller;
pub mod logger;
pub mod physics;
pub mod scripted;

// Re-export базовых типов для удобства
pub use components::*;
pub use controller::{
    tick, CharacterMover, ConfigError, ControllerState, CursorCapture, FirstPersonConfig,
    FrameInput, InitError, TickReport,
};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, log_with_level, set_log_level,
    set_logger, set_logger_if_needed, ConsoleLogger, LogLevel, LogPrinter,
};
pub use physics::{spawn_first_person_player, FirstPersonControllerPlugin, FirstPersonSet};
pub use scripted::{ScriptedInput, ScriptedInputPlugin};

/// Шаг времени headless симуляции (60 FPS)
pub const HEADLESS_FRAME: Duration = Duration::from_nanos(16_666_667);

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт фиксированными шагами `HEADLESS_FRAME` на каждый `app.update()`
/// (первый update — нулевой dt, как у любого Bevy приложения).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_FRAME))
        .add_plugins(FirstPersonControllerPlugin);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
