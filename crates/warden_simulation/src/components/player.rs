//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от Agent).

use bevy::prelude::*;

/// Marker component для player-controlled цели
///
/// Автоматически добавляет Health, Position, MovementInput, MovementSpeed
/// через Required Components.
///
/// # Архитектурная заметка
/// - AI системы используют `Without<Player>` filter и читают позицию/здоровье
///   этой entity как snapshot текущего тика
/// - Input systems (внешний harness, тест, headless-демо) пишут MovementInput
///
/// # Single-player
/// Симуляция рассчитана на одну цель: `advance_agents` берёт
/// `players.single()`. Без Player-entity агент просто патрулирует.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    crate::components::Health,
    crate::components::Position,
    crate::components::MovementInput,
    crate::components::MovementSpeed
)]
pub struct Player;
