//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `state_key!` macro for
//! declaring key enums with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
