//! Tests for FSM components and condition checks.

use bevy::prelude::*;

use super::fsm::{is_in_danger, target_in_range, AgentConfig, AgentState, PatrolRoute};
use crate::components::Health;

#[test]
fn test_agent_state_default() {
    let state = AgentState::default();
    assert!(matches!(state, AgentState::Patrol));
}

#[test]
fn test_agent_config_default() {
    let config = AgentConfig::default();
    assert_eq!(config.patrol_speed, 4.0);
    assert_eq!(config.chase_speed, 6.0);
    assert_eq!(config.waypoint_arrival_threshold, 0.2);
    assert_eq!(config.chase_range, 2.0);
    assert_eq!(config.attack_range, 1.0);
    assert_eq!(config.damage, 1);
    assert_eq!(config.attack_cooldown, 0.1);
}

#[test]
fn test_state_colors_distinct() {
    // Rendering hint: все четыре состояния различимы по цвету
    let colors = [
        AgentState::Patrol.color(),
        AgentState::Seek.color(),
        AgentState::Attack.color(),
        AgentState::Flee.color(),
    ];
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            assert_ne!(colors[i], colors[j]);
        }
    }
}

#[test]
fn test_range_check_strict_boundary() {
    let agent = Vec2::ZERO;

    // distance == range → вне радиуса (строгое <)
    assert!(!target_in_range(agent, Vec2::new(2.0, 0.0), 2.0));
    // distance = range − ε → в радиусе
    assert!(target_in_range(agent, Vec2::new(2.0 - 1e-4, 0.0), 2.0));
    // далеко — вне
    assert!(!target_in_range(agent, Vec2::new(10.0, 0.0), 2.0));
}

#[test]
fn test_danger_check_both_clauses_required() {
    // 20/100 = 0.20 < 0.25, цель здоровее (50) → опасность
    let agent = Health { current: 20, max: 100 };
    let target = Health { current: 50, max: 100 };
    assert!(is_in_danger(&agent, &target));

    // 20/100, но у цели всего 10 → вторая clause падает
    let weak_target = Health { current: 10, max: 100 };
    assert!(!is_in_danger(&agent, &weak_target));

    // Равенство здоровья — не опасность (строгое <)
    let equal_target = Health { current: 20, max: 100 };
    assert!(!is_in_danger(&agent, &equal_target));

    // Здоровый агент (30/100 = 0.30) — первая clause падает
    let healthy = Health { current: 30, max: 100 };
    assert!(!is_in_danger(&healthy, &target));
}

#[test]
fn test_danger_check_fraction_vs_absolute_asymmetry() {
    // Намеренная асимметрия источника: своя доля против абсолюта цели.
    // 24/100 = 0.24 < 0.25; цель 25/1000 (доля 0.025, но абсолют 25 > 24)
    let agent = Health { current: 24, max: 100 };
    let target = Health { current: 25, max: 1000 };
    assert!(is_in_danger(&agent, &target));
}

#[test]
fn test_danger_check_zero_max_health() {
    // max == 0 не паникует и не считается опасностью
    let agent = Health { current: 0, max: 0 };
    let target = Health { current: 50, max: 100 };
    assert!(!is_in_danger(&agent, &target));
}

#[test]
fn test_patrol_route_cyclic_advance() {
    let mut route = PatrolRoute::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
    ]);
    assert_eq!(route.current, 0);

    route.advance();
    assert_eq!(route.current, 1);
    route.advance();
    assert_eq!(route.current, 2);
    route.advance(); // wrap за последним индексом
    assert_eq!(route.current, 0);
}

#[test]
fn test_patrol_route_empty() {
    let mut route = PatrolRoute::default();
    assert_eq!(route.current_waypoint(), None);

    // advance на пустом маршруте — no-op, не паника
    route.advance();
    assert_eq!(route.current, 0);
}
