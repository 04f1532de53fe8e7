//! WARDEN Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16: sentry-агент (FSM
//! Patrol/Seek/Attack/Flee) против player-controlled цели.
//!
//! Архитектура:
//! - ECS = simulation layer (state machine, movement, combat rules)
//! - Рендер/input остаются внешними collaborators: симуляция отдаёт
//!   только `AgentState::color()` как rendering hint и читает
//!   `MovementInput` как mock player input.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use ai::{
    advance_agents, is_in_danger, target_in_range, AIPlugin, AgentConfig, AgentState, PatrolRoute,
};
pub use combat::{tick_attack_cooldowns, AttackLanded, AttackTimer, CombatPlugin, DamageDealt};
pub use components::*;
pub use logger::*;
pub use movement::{apply_movement_input, flee_direction, move_towards, MovementPlugin};

/// Порядок выполнения внутри одного FixedUpdate тика
///
/// 1. Movement — цель двигается от input, cooldown-таймеры тикают
/// 2. Decision — FSM агента (override + dispatch, ровно один state body)
/// 3. Damage — применение AttackLanded → Health
///
/// Жёсткий chain: агент читает snapshot позиции/здоровья цели текущего тика.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Movement,
    Decision,
    Damage,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Детерминистичный RNG (seed по умолчанию)
            .insert_resource(DeterministicRng::new(42))
            .configure_sets(
                FixedUpdate,
                (SimSet::Movement, SimSet::Decision, SimSet::Damage).chain(),
            )
            // Подсистемы
            .add_plugins((MovementPlugin, AIPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в детерминированный байтовый формат
/// (сортировка по Entity ID, сериализация через Debug).
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
