//! Combat module
//!
//! ECS ответственность:
//! - Game state: Health, AttackTimer
//! - Events: AttackLanded (намерение агента), DamageDealt (результат)
//!
//! Порядок внутри тика (через SimSet):
//! 1. tick_attack_cooldowns (Movement) — таймеры тикают каждый тик
//! 2. FSM агента (Decision) — пишет AttackLanded когда таймер готов
//! 3. apply_damage (Damage) — применяет урон к Health

use bevy::prelude::*;

pub mod attacker;
pub mod damage;

// Re-export основных типов
pub use attacker::{tick_attack_cooldowns, AttackTimer};
pub use damage::{apply_damage, AttackLanded, DamageDealt};

use crate::SimSet;

/// Combat Plugin
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<AttackLanded>().add_event::<DamageDealt>();

        app.add_systems(
            FixedUpdate,
            (
                tick_attack_cooldowns.in_set(SimSet::Movement),
                apply_damage.in_set(SimSet::Damage),
            ),
        );
    }
}
