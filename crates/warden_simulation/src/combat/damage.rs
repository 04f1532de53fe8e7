//! Damage pipeline: AttackLanded → Health → DamageDealt
//!
//! Агент не трогает чужой Health напрямую — он пишет AttackLanded event,
//! apply_damage применяет урон в конце тика. Единственная точка мутации
//! здоровья — Health::take_damage (кламп на нуле).

use bevy::prelude::*;

use crate::components::Health;

/// Событие: атака агента достигла цели (намерение нанести урон)
#[derive(Event, Debug, Clone)]
pub struct AttackLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
}

/// Событие: урон применён к Health
///
/// Используется хостом для UI, звуков, эффектов.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    /// Здоровье цели после применения урона
    pub remaining_health: u32,
}

/// Система: apply damage от AttackLanded событий
///
/// 1. Читаем AttackLanded события
/// 2. Применяем damage к Health цели (saturating, клампится на 0)
/// 3. Генерируем DamageDealt событие
pub fn apply_damage(
    mut strikes: EventReader<AttackLanded>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut targets: Query<&mut Health>,
) {
    for strike in strikes.read() {
        let Ok(mut target_health) = targets.get_mut(strike.target) else {
            crate::log_warning(&format!(
                "AttackLanded: target {:?} has no Health component",
                strike.target
            ));
            continue;
        };

        target_health.take_damage(strike.damage);

        crate::log(&format!(
            "Damage: {:?} → {:?} ({} dmg, health {})",
            strike.attacker, strike.target, strike.damage, target_health.current
        ));

        damage_dealt_events.write(DamageDealt {
            attacker: strike.attacker,
            target: strike.target,
            damage: strike.damage,
            remaining_health: target_health.current,
        });
    }
}
