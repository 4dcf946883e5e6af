//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Registry**: states are validated and frozen at construction
//! - **Transitions**: driven by `enter` and by the active state's `update`
//! - **Observers**: notified synchronously on every committed transition
//!
//! All operations run to completion on the calling thread. The machine is
//! not `Sync` and expects one `update` per frame from a single game loop.

mod error;
mod observers;
mod registry;
mod state_machine;

pub use error::{ErrorKind, StateMachineError};
pub use observers::{Observer, ObserverId, Observers};
pub use registry::{audit, Audit, Registration};
pub use state_machine::{StateMachine, StepResult};
