//! Physics binding контроллера
//!
//! Два mover backend'а:
//! - Rapier `KinematicCharacterController` (игра)
//! - `FlatGround` (headless симуляция и тесты)

pub mod movement;

// Re-export основных типов
pub use movement::{
    spawn_first_person_player,
    FirstPersonControllerPlugin,
    FirstPersonSet,
    RapierMover,
};
