//! Notification value describing a committed transition.

use super::key::StateKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a single committed transition, handed to every observer.
///
/// Observers receive it after the previous state's `exit` and before the
/// next state's `enter`.
///
/// # Example
///
/// ```rust
/// use framestate::core::StateChange;
/// use framestate::state_key;
/// use uuid::Uuid;
///
/// state_key! {
///     enum Phase {
///         #[sentinel] None,
///         One,
///         Two,
///     }
/// }
///
/// let change = StateChange::new(Uuid::new_v4(), Phase::One, Phase::Two, 0.016, 2.5);
/// assert_eq!(change.from, Phase::One);
/// assert_eq!(change.to, Phase::Two);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateChange<K: StateKey> {
    /// Id of the machine that transitioned
    pub machine: Uuid,
    /// The state being left
    pub from: K,
    /// The state being entered
    pub to: K,
    /// Delta time passed to the entered state's `enter`
    pub delta_time: f32,
    /// Seconds the machine spent in `from`
    pub time_in_previous: f32,
    /// Wall-clock time of the transition
    pub timestamp: DateTime<Utc>,
}

impl<K: StateKey> StateChange<K> {
    /// Record a transition happening now.
    pub fn new(machine: Uuid, from: K, to: K, delta_time: f32, time_in_previous: f32) -> Self {
        Self {
            machine,
            from,
            to,
            delta_time,
            time_in_previous,
            timestamp: Utc::now(),
        }
    }
}
