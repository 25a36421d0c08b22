//! ECS Components для first-person игрока
//!
//! - player: маркеры тела и камеры, связь body → camera
//! - ground: headless mover (плоский пол)
//! - events: запросы к host-окружению (cursor capture)

pub mod events;
pub mod ground;
pub mod player;

// Re-exports для удобного импорта
pub use events::*;
pub use ground::*;
pub use player::*;
