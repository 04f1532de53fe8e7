//! Базовые компоненты акторов: Agent, Health

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Sentry-агент — marker для entity под управлением FSM
///
/// Автоматически добавляет Health, Position, AgentState, AgentConfig,
/// PatrolRoute, AttackTimer через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Health,
    crate::components::Position,
    crate::ai::AgentState,
    crate::ai::AgentConfig,
    crate::ai::PatrolRoute,
    crate::combat::AttackTimer
)]
pub struct Agent;

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max. Урон клампится на нуле
/// (saturating_sub) — death/respawn семантики нет, health просто
/// остаётся 0. На этом клампе держится danger-сравнение FSM:
/// отрицательное здоровье непредставимо.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Доля оставшегося здоровья в [0.0, 1.0]
    ///
    /// max == 0 → 1.0 (защита от деления на ноль; пустой актор не
    /// считается умирающим).
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 1.0;
        }
        self.current as f32 / self.max as f32
    }

    /// Единственный путь мутации здоровья вниз
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }
}
