//! Flat ground — mover для headless режима (без Rapier)

use bevy::prelude::*;

use crate::controller::CharacterMover;

/// Бесконечная горизонтальная плоскость под телом
///
/// Простая замена collision sweep: тело не проваливается ниже `height`,
/// grounded = стоим ровно на плоскости после последнего move.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FlatGround {
    /// Y плоскости (нижняя точка тела)
    pub height: f32,
    /// Результат последнего move
    ///
    /// До первого move false: grounded знает только mover, а не spawn позиция.
    pub grounded: bool,
}

impl Default for FlatGround {
    fn default() -> Self {
        Self::at_height(0.0)
    }
}

impl FlatGround {
    pub fn at_height(height: f32) -> Self {
        Self {
            height,
            grounded: false,
        }
    }
}

/// Mover поверх FlatGround
///
/// Копит позицию локально: transform тела одновременно крутит look,
/// поэтому translation записывается обратно после тика.
pub struct FlatGroundMover<'a> {
    pub ground: &'a mut FlatGround,
    pub position: Vec3,
}

impl<'a> FlatGroundMover<'a> {
    pub fn new(ground: &'a mut FlatGround, position: Vec3) -> Self {
        Self { ground, position }
    }
}

impl CharacterMover for FlatGroundMover<'_> {
    fn is_grounded(&self) -> bool {
        self.ground.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;

        if self.position.y <= self.ground.height {
            self.position.y = self.ground.height;
            self.ground.grounded = true;
        } else {
            self.ground.grounded = false;
        }
    }
}
