//! Headless прогон WARDEN
//!
//! Запускает Bevy App без рендера: один агент на квадратном маршруте,
//! одна цель с детерминированным случайным дрейфом. На тике 1000 —
//! scripted просадка здоровья агента (debug-хук harness'а, вне FSM),
//! после чего видно danger-override в Flee.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use warden_simulation::*;

const TICK: Duration = Duration::from_micros(16_667); // ~60Hz

fn main() {
    let seed = 42;
    println!("Starting WARDEN headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Ровно один FixedUpdate на app.update() — детерминированный прогон
    app.insert_resource(Time::<Fixed>::from_duration(TICK));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TICK));

    let agent = app
        .world_mut()
        .spawn((
            Agent,
            Position::new(0.0, 0.0),
            PatrolRoute::new(vec![
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 4.0),
                Vec2::new(0.0, 4.0),
                Vec2::new(0.0, 0.0),
            ]),
            AgentConfig::default(),
        ))
        .id();

    let player = app
        .world_mut()
        .spawn((Player, Position::new(8.0, 6.0), Health::new(100)))
        .id();

    for tick in 0..2000u32 {
        // Дрейф цели: раз в ~2 секунды новое случайное направление
        if tick % 120 == 0 {
            let direction = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                let angle = rng.rng.gen::<f32>() * std::f32::consts::TAU;
                Vec2::new(angle.cos(), angle.sin())
            };
            if let Some(mut input) = app.world_mut().get_mut::<MovementInput>(player) {
                input.direction = direction;
            }
        }

        // Debug-хук: scripted урон агенту (аналог debug-клавиши, вне FSM)
        if tick == 1000 {
            if let Some(mut health) = app.world_mut().get_mut::<Health>(agent) {
                health.take_damage(85);
                log_info("Harness: agent health dropped to critical");
            }
        }

        app.update();

        if tick % 100 == 0 {
            let state = app
                .world()
                .get::<AgentState>(agent)
                .copied()
                .unwrap_or_default();
            let agent_hp = app.world().get::<Health>(agent).map(|h| h.current).unwrap_or(0);
            let player_hp = app
                .world()
                .get::<Health>(player)
                .map(|h| h.current)
                .unwrap_or(0);
            println!(
                "Tick {}: state={:?} color={:?} agent_hp={} player_hp={}",
                tick,
                state,
                state.color(),
                agent_hp,
                player_hp
            );
        }
    }

    println!("Simulation complete!");
}
