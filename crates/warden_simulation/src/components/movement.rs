//! Movement компоненты: позиция, input, скорость

use bevy::prelude::*;

/// Позиция актора в 2D-мире (симуляция — authority)
///
/// Рендерер (внешний collaborator) читает её и сам решает как мапить
/// в экранные координаты; никакого Transform-ownership у симуляции нет.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

/// Входные данные для движения цели
///
/// Для headless тестов — mock input через этот компонент.
/// Для игры — заполняется хостом из реального input.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MovementInput {
    /// Направление движения (нормализуется при применении)
    pub direction: Vec2,
}

/// Скорость движения цели (units/sec)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 5.0 } // базовая скорость цели
    }
}
