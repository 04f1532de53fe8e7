//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: sentry-агент и здоровье (Agent, Health)
//! - movement: позиционирование и input (Position, MovementInput, MovementSpeed)
//! - player: player control marker (Player)
//!
//! FSM-компоненты агента (AgentState, AgentConfig, PatrolRoute) живут в
//! crate::ai, cooldown-таймер (AttackTimer) — в crate::combat.

pub mod actor;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
