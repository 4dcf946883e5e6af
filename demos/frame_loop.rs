//! Frame Loop
//!
//! This example drives an enemy AI through a fixed-step game loop.
//!
//! Key concepts:
//! - States are built by the caller and registered once
//! - Each frame calls `update` with the frame's delta time
//! - States request transitions by returning another key
//! - Observers see every transition after `exit` and before `enter`
//!
//! Run with: RUST_LOG=framestate=debug cargo run --example frame_loop

use framestate::builder::StateMachineBuilder;
use framestate::core::State;
use framestate::state_key;
use tracing_subscriber::EnvFilter;

state_key! {
    enum Enemy {
        #[sentinel] None,
        Patrol,
        Chase,
        Flee,
    }
}

struct Patrol {
    distance_to_player: f32,
}

impl State<Enemy> for Patrol {
    fn key(&self) -> Enemy {
        Enemy::Patrol
    }

    fn enter(&mut self, _delta_time: f32) {
        println!("  patrol: walking the route");
    }

    fn update(&mut self, delta_time: f32) -> Enemy {
        self.distance_to_player -= 4.0 * delta_time;
        if self.distance_to_player < 5.0 {
            Enemy::Chase
        } else {
            Enemy::None
        }
    }
}

struct Chase {
    health: f32,
}

impl State<Enemy> for Chase {
    fn key(&self) -> Enemy {
        Enemy::Chase
    }

    fn enter(&mut self, delta_time: f32) {
        println!("  chase: player spotted ({delta_time:.2}s into the frame)");
    }

    fn update(&mut self, delta_time: f32) -> Enemy {
        self.health -= 20.0 * delta_time;
        if self.health < 30.0 {
            Enemy::Flee
        } else {
            Enemy::None
        }
    }

    fn exit(&mut self) {
        println!("  chase: giving up");
    }
}

struct Flee;

impl State<Enemy> for Flee {
    fn key(&self) -> Enemy {
        Enemy::Flee
    }

    fn update(&mut self, _delta_time: f32) -> Enemy {
        Enemy::None
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Frame Loop Example ===\n");

    let mut machine = StateMachineBuilder::new()
        .state(Patrol {
            distance_to_player: 12.0,
        })
        .state(Chase { health: 100.0 })
        .state(Flee)
        .on_state_change(|change| {
            println!(
                "  -> {:?} to {:?} after {:.2}s",
                change.from, change.to, change.time_in_previous
            )
        })
        .initial(Enemy::Patrol)
        .build()
        .unwrap();

    let frame = 0.25;
    for tick in 1..=24 {
        if let Err(err) = machine.update(frame) {
            println!("frame {tick}: {err}");
            break;
        }
    }

    println!(
        "\nFinal state: {:?} for {:.2}s",
        machine.current_state().unwrap(),
        machine.time_current_state_active().unwrap()
    );

    println!("\n=== Example Complete ===");
}
