//! Движение: чистые примитивы + интеграция player input
//!
//! Вся кинематика — чистые функции `(position, target, speed, dt) -> new
//! position`, без физического движка: коллизий в симуляции нет, поэтому
//! rapier здесь не нужен.

use bevy::prelude::*;

use crate::components::{MovementInput, MovementSpeed, Player, Position};
use crate::SimSet;

/// Шаг к цели с клампом на конечной точке
///
/// Семантика "move towards": смещаемся не дальше чем на max_delta и
/// никогда не перелетаем target. max_delta ≤ 0 (нулевой/отрицательный
/// dt) — позиция не меняется.
pub fn move_towards(from: Vec2, to: Vec2, max_delta: f32) -> Vec2 {
    let max_delta = max_delta.max(0.0);
    let delta = to - from;
    let distance = delta.length();

    if distance <= max_delta || distance <= f32::EPSILON {
        to
    } else {
        from + delta / distance * max_delta
    }
}

/// Направление бегства: от цели, нормализованное
///
/// Агент ровно на позиции цели → нулевой вектор (стоим, не NaN).
pub fn flee_direction(agent: Vec2, target: Vec2) -> Vec2 {
    (agent - target).normalize_or_zero()
}

/// Система: движение цели от MovementInput
///
/// position += normalize(direction) × speed × dt. Работает в FixedUpdate
/// (SimSet::Movement) — до решения агента, чтобы тот видел свежий snapshot.
pub fn apply_movement_input(
    mut query: Query<(&MovementInput, &MovementSpeed, &mut Position), With<Player>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs().max(0.0);

    for (input, speed, mut position) in query.iter_mut() {
        if input.direction.length_squared() > 0.01 {
            let direction = input.direction.normalize();
            position.0 += direction * speed.speed * delta;
        }
    }
}

/// Plugin движения цели
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, apply_movement_input.in_set(SimSet::Movement));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_towards_clamps_at_target() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(1.0, 0.0);

        // Обычный шаг
        let step = move_towards(from, to, 0.25);
        assert!((step.x - 0.25).abs() < 1e-6);
        assert_eq!(step.y, 0.0);

        // Шаг больше дистанции — не перелетаем
        let step = move_towards(from, to, 5.0);
        assert_eq!(step, to);
    }

    #[test]
    fn test_move_towards_zero_and_negative_delta() {
        let from = Vec2::new(3.0, 4.0);
        let to = Vec2::new(10.0, 10.0);

        // Нулевой dt — стоим
        assert_eq!(move_towards(from, to, 0.0), from);
        // Отрицательный dt — не пятимся назад
        assert_eq!(move_towards(from, to, -1.0), from);
    }

    #[test]
    fn test_flee_direction() {
        let dir = flee_direction(Vec2::new(2.0, 0.0), Vec2::new(0.0, 0.0));
        assert!((dir.x - 1.0).abs() < 1e-6);
        assert_eq!(dir.y, 0.0);

        // Совпадающие позиции — нулевой вектор, не NaN
        let dir = flee_direction(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(dir, Vec2::ZERO);
    }
}
