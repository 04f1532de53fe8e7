//! FSM sentry-агента
//!
//! Конечный автомат: Patrol ↔ Seek ↔ Attack, плюс Flee по
//! danger-override. Одно решение на тик (advance_agents в FixedUpdate):
//!
//! 1. Global override: критическое здоровье → Flee (до dispatch,
//!    перебивает любое решение этого тика)
//! 2. Dispatch по текущему состоянию — ровно один state body
//!
//! Transitions edge-triggered: ветка, решившая сменить состояние, в этом
//! тике не двигается и не атакует; новое состояние диспатчится со
//! следующего тика. Вход в состояние — чистая запись enum, без side
//! effects (цвет — rendering hint для внешнего рендерера).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{AttackLanded, AttackTimer};
use crate::components::{Agent, Health, Player, Position};
use crate::movement::{flee_direction, move_towards};

/// Состояния FSM агента
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize,
)]
#[reflect(Component)]
pub enum AgentState {
    /// Patrol — обход waypoint-маршрута, поглядываем на chase range
    #[default]
    Patrol,

    /// Seek — преследование цели в chase range
    Seek,

    /// Attack — цель в attack range, бьём по cooldown
    Attack,

    /// Flee — критическое здоровье, бежим от цели
    Flee,
}

impl AgentState {
    /// Rendering hint: RGBA цвет состояния
    ///
    /// Чистое чтение для внешнего рендерера, в логику не возвращается.
    pub fn color(&self) -> [f32; 4] {
        match self {
            AgentState::Patrol => [0.0, 1.0, 0.0, 1.0], // green
            AgentState::Seek => [1.0, 1.0, 0.0, 1.0],   // yellow
            AgentState::Attack => [1.0, 0.0, 0.0, 1.0], // red
            AgentState::Flee => [0.0, 1.0, 1.0, 1.0],   // cyan
        }
    }
}

/// Параметры агента (read-only, фиксируются при спавне)
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct AgentConfig {
    /// Скорость патруля и бегства (units/sec)
    pub patrol_speed: f32,
    /// Скорость преследования (units/sec)
    pub chase_speed: f32,
    /// Порог прибытия на waypoint (строгое <)
    pub waypoint_arrival_threshold: f32,
    /// Радиус перехода Patrol → Seek
    pub chase_range: f32,
    /// Радиус перехода Seek → Attack
    pub attack_range: f32,
    /// Урон за удар
    pub damage: u32,
    /// Cooldown между ударами (секунды); 0 = удар каждый тик
    pub attack_cooldown: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 4.0,
            chase_speed: 6.0,
            waypoint_arrival_threshold: 0.2,
            chase_range: 2.0,
            attack_range: 1.0,
            damage: 1,
            attack_cooldown: 0.1,
        }
    }
}

/// Waypoint-маршрут патруля (циклический курсор)
///
/// Инвариант: current — валидный индекс пока waypoints непуст.
/// Пустой маршрут легален: агент стоит на месте, но продолжает
/// проверять chase range каждый тик.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec2>,
    pub current: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            current: 0,
        }
    }

    /// Текущий waypoint; None для пустого маршрута
    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current).copied()
    }

    /// Сдвинуть курсор циклически (за последним индексом — 0)
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.current = (self.current + 1) % self.waypoints.len();
        }
    }
}

/// Цель в радиусе? Строгое неравенство: distance == range — вне радиуса
pub fn target_in_range(agent: Vec2, target: Vec2, range: f32) -> bool {
    agent.distance(target) < range
}

/// Danger check: пора ли бежать
///
/// Оба условия обязательны:
/// - своё здоровье ниже 25% от максимума (доля)
/// - своё здоровье меньше здоровья цели (абсолютное значение)
///
/// Асимметрия (доля против абсолюта) — намеренное поведение источника,
/// сохранено как есть. Сравнение только по snapshot текущего тика,
/// гистерезиса нет.
pub fn is_in_danger(agent: &Health, target: &Health) -> bool {
    agent.fraction() < 0.25 && agent.current < target.current
}

/// Система: одно решение агента за тик
///
/// Порядок строго как в контракте: сначала глобальный danger-override,
/// затем dispatch по (возможно уже перезаписанному) состоянию. Ветка либо
/// переходит, либо действует — никогда и то и другое в одном тике.
pub fn advance_agents(
    mut agents: Query<
        (
            Entity,
            &mut AgentState,
            &mut Position,
            &mut PatrolRoute,
            &mut AttackTimer,
            &AgentConfig,
            &Health,
        ),
        (With<Agent>, Without<Player>),
    >,
    players: Query<(Entity, &Position, &Health), With<Player>>,
    mut strikes: EventWriter<AttackLanded>,
    time: Res<Time<Fixed>>,
) {
    // Нулевой/отрицательный dt — тик без движения (cooldown тикает отдельно)
    let dt = time.delta_secs().max(0.0);

    let target = players.single().ok();

    for (entity, mut state, mut position, mut route, mut cooldown, config, health) in
        agents.iter_mut()
    {
        let Some((target_entity, target_position, target_health)) = target else {
            // Цели нет — патрулируем без range/danger проверок
            patrol_step(&mut position, &mut route, config, dt);
            continue;
        };
        let target_pos = target_position.0;

        // 1. Global override: критическое здоровье → Flee, независимо от
        //    текущего состояния. Перепроверяется каждый тик.
        if is_in_danger(health, target_health) && *state != AgentState::Flee {
            crate::log(&format!("AI: {:?} {:?} → Flee (danger override)", entity, *state));
            *state = AgentState::Flee;
        }

        // 2. Dispatch — ровно один state body за тик
        match *state {
            AgentState::Patrol => {
                if target_in_range(position.0, target_pos, config.chase_range) {
                    crate::log(&format!("AI: {:?} Patrol → Seek", entity));
                    *state = AgentState::Seek;
                } else {
                    patrol_step(&mut position, &mut route, config, dt);
                }
            }

            AgentState::Seek => {
                if target_in_range(position.0, target_pos, config.attack_range) {
                    crate::log(&format!("AI: {:?} Seek → Attack", entity));
                    *state = AgentState::Attack;
                } else if target_in_range(position.0, target_pos, config.chase_range) {
                    position.0 = move_towards(position.0, target_pos, config.chase_speed * dt);
                } else {
                    crate::log(&format!("AI: {:?} Seek → Patrol (target lost)", entity));
                    *state = AgentState::Patrol;
                }
            }

            AgentState::Attack => {
                if target_in_range(position.0, target_pos, config.attack_range) {
                    // Удар только когда cooldown дошёл до нуля; таймер
                    // тикает в SimSet::Movement, здесь лишь проверка + взвод
                    if cooldown.ready() {
                        strikes.write(AttackLanded {
                            attacker: entity,
                            target: target_entity,
                            damage: config.damage,
                        });
                        cooldown.arm(config.attack_cooldown);
                    }
                } else {
                    crate::log(&format!("AI: {:?} Attack → Seek (out of range)", entity));
                    *state = AgentState::Seek;
                }
            }

            AgentState::Flee => {
                if is_in_danger(health, target_health) {
                    // Бежим от цели на patrol-скорости; шаг направленный,
                    // без клампа (конечной точки нет)
                    position.0 += flee_direction(position.0, target_pos) * config.patrol_speed * dt;
                } else {
                    crate::log(&format!("AI: {:?} Flee → Seek (recovered)", entity));
                    *state = AgentState::Seek;
                }
            }
        }
    }
}

/// Один patrol-шаг: advance курсора по прибытию + движение к waypoint
///
/// Прибытие — строгое < порога; на точном равенстве ещё не прибыли.
/// Двигаемся к (возможно только что обновлённому) waypoint.
fn patrol_step(position: &mut Position, route: &mut PatrolRoute, config: &AgentConfig, dt: f32) {
    let Some(waypoint) = route.current_waypoint() else {
        return; // пустой маршрут — стоим
    };

    if position.0.distance(waypoint) < config.waypoint_arrival_threshold {
        route.advance();
    }

    if let Some(waypoint) = route.current_waypoint() {
        position.0 = move_towards(position.0, waypoint, config.patrol_speed * dt);
    }
}
