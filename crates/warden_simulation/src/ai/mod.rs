//! AI decision-making module
//!
//! FSM sentry-агента на четыре состояния: Patrol → Seek → Attack, с глобальным
//! danger-override в Flee. Одно решение на тик, transitions edge-triggered.

use bevy::prelude::*;

pub mod fsm;

#[cfg(test)]
mod fsm_tests;

// Re-export основных типов
pub use fsm::{advance_agents, is_in_danger, target_in_range, AgentConfig, AgentState, PatrolRoute};

use crate::SimSet;

/// AI Plugin
///
/// Регистрирует решение агента в FixedUpdate (SimSet::Decision):
/// после движения цели и тика cooldown-таймеров, до применения урона.
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, fsm::advance_agents.in_set(SimSet::Decision));
    }
}
