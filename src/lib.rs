//! Framestate: a frame-driven finite state machine engine
//!
//! A machine owns a fixed registry of mutually exclusive states keyed by a
//! discrete key type. The registry is validated and frozen at construction;
//! afterwards the caller activates a first state with `enter` and drives the
//! machine with one `update` per frame. The active state decides when to
//! move on by returning another key from its own `update`.
//!
//! # Core Concepts
//!
//! - **StateKey**: closed set of keys with a reserved `Default` sentinel
//! - **State**: caller-built behavior with `enter`, `update` and `exit` hooks
//! - **StateMachine**: registry, active state, time in state, transitions
//! - **StateChange**: what observers receive on every committed transition
//!
//! # Example
//!
//! ```rust
//! use framestate::core::State;
//! use framestate::machine::StateMachine;
//! use framestate::state_key;
//!
//! state_key! {
//!     pub enum Motor {
//!         #[sentinel] None,
//!         Idle,
//!         Running,
//!         Stopped,
//!     }
//! }
//!
//! struct Idle;
//!
//! impl State<Motor> for Idle {
//!     fn key(&self) -> Motor {
//!         Motor::Idle
//!     }
//!
//!     fn update(&mut self, _delta_time: f32) -> Motor {
//!         Motor::Running
//!     }
//! }
//!
//! struct Running {
//!     fuel: f32,
//! }
//!
//! impl State<Motor> for Running {
//!     fn key(&self) -> Motor {
//!         Motor::Running
//!     }
//!
//!     fn update(&mut self, delta_time: f32) -> Motor {
//!         self.fuel -= delta_time;
//!         if self.fuel <= 0.0 {
//!             Motor::Stopped
//!         } else {
//!             Motor::None
//!         }
//!     }
//! }
//!
//! struct Stopped;
//!
//! impl State<Motor> for Stopped {
//!     fn key(&self) -> Motor {
//!         Motor::Stopped
//!     }
//!
//!     fn update(&mut self, _delta_time: f32) -> Motor {
//!         Motor::None
//!     }
//! }
//!
//! let states: Vec<Box<dyn State<Motor>>> = vec![
//!     Box::new(Idle),
//!     Box::new(Running { fuel: 1.0 }),
//!     Box::new(Stopped),
//! ];
//! let mut machine = StateMachine::new(states).unwrap();
//! machine.on_state_change(|change| println!("{:?} -> {:?}", change.from, change.to));
//!
//! machine.enter(Motor::Idle).unwrap();
//! machine.update(0.5).unwrap();
//! assert_eq!(machine.current_state().unwrap(), Motor::Running);
//!
//! machine.update(0.5).unwrap();
//! machine.update(0.5).unwrap();
//! assert_eq!(machine.current_state().unwrap(), Motor::Stopped);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use core::{State, StateChange, StateKey, StateVariant};
pub use machine::{ErrorKind, StateMachine, StateMachineError, StepResult};
