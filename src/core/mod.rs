//! Core contracts of the state machine.
//!
//! This module holds what the caller supplies and what it gets back:
//! - Keys via the `StateKey` trait
//! - States via the `State` trait
//! - Transition notifications via `StateChange`

mod change;
mod key;
mod state;

pub use change::StateChange;
pub use key::StateKey;
pub use state::{State, StateVariant};
