//! Attack cooldown таймер

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cooldown между атаками агента
///
/// Инвариант: remaining ≥ 0; таймер не декрементируется в том же тике,
/// в котором был взведён (tick идёт в SimSet::Movement, взвод — позже,
/// в SimSet::Decision).
///
/// Стартует с 0 — первая атака доступна сразу. attack_cooldown == 0 в
/// конфиге означает атаку каждый тик в радиусе (без starvation).
#[derive(Component, Debug, Clone, Copy, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct AttackTimer {
    /// Остаток cooldown (секунды)
    pub remaining: f32,
}

impl AttackTimer {
    /// Может ли атаковать (cooldown дошёл до 0)
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Взвести таймер после атаки
    pub fn arm(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }
}

/// System: обновление attack cooldown таймеров
///
/// Таймер считает вниз каждый тик независимо от состояния FSM
/// (SimSet::Movement, до решения агента). Кламп на нуле.
pub fn tick_attack_cooldowns(mut query: Query<&mut AttackTimer>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs().max(0.0);

    for mut timer in query.iter_mut() {
        if timer.remaining > 0.0 {
            timer.remaining = (timer.remaining - delta).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_timer_arm_and_ready() {
        let mut timer = AttackTimer::default();
        assert!(timer.ready());

        timer.arm(1.0);
        assert!(!timer.ready());
        assert_eq!(timer.remaining, 1.0);

        // Simulate ticks
        timer.remaining -= 0.5;
        assert!(!timer.ready());

        timer.remaining -= 0.5;
        assert!(timer.ready());
    }

    #[test]
    fn test_attack_timer_zero_cooldown() {
        let mut timer = AttackTimer::default();
        timer.arm(0.0);
        // Нулевой cooldown — готов сразу
        assert!(timer.ready());
    }

    #[test]
    fn test_attack_timer_negative_duration_clamped() {
        let mut timer = AttackTimer::default();
        timer.arm(-5.0);
        assert_eq!(timer.remaining, 0.0);
        assert!(timer.ready());
    }
}
