//! Frame-driven state machine over a fixed registry of states.

use super::error::StateMachineError;
use super::observers::{ObserverId, Observers};
use super::registry::{audit, Registration};
use crate::core::{State, StateChange, StateKey};
use std::collections::HashMap;
use stillwater::validation::Validation;
use tracing::{debug, trace};
use uuid::Uuid;

/// Result of a single [`StateMachine::update`] tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult<K: StateKey> {
    /// The active state asked to stay
    Stayed(K),

    /// The machine moved to another state
    Transitioned { from: K, to: K },
}

/// A finite state machine whose states are registered once, at construction.
///
/// The machine owns boxed handles to caller-built states, keeps exactly one
/// of them active, and accumulates how long it has been active. It is meant
/// to be driven from a single game-loop thread: call [`enter`](Self::enter)
/// once, then [`update`](Self::update) every frame.
///
/// # Example
///
/// ```rust
/// use framestate::core::State;
/// use framestate::machine::{StateMachine, StepResult};
/// use framestate::state_key;
///
/// state_key! {
///     pub enum Pump {
///         #[sentinel] None,
///         Idle,
///         Running,
///     }
/// }
///
/// struct Idle;
///
/// impl State<Pump> for Idle {
///     fn key(&self) -> Pump {
///         Pump::Idle
///     }
///
///     fn update(&mut self, _delta_time: f32) -> Pump {
///         Pump::Running
///     }
/// }
///
/// struct Running;
///
/// impl State<Pump> for Running {
///     fn key(&self) -> Pump {
///         Pump::Running
///     }
///
///     fn update(&mut self, _delta_time: f32) -> Pump {
///         Pump::None
///     }
/// }
///
/// let states: Vec<Box<dyn State<Pump>>> = vec![Box::new(Idle), Box::new(Running)];
/// let mut machine = StateMachine::new(states).unwrap();
///
/// machine.enter(Pump::Idle).unwrap();
/// let step = machine.update(0.5).unwrap();
///
/// assert_eq!(step, StepResult::Transitioned { from: Pump::Idle, to: Pump::Running });
/// assert_eq!(machine.current_state().unwrap(), Pump::Running);
/// assert_eq!(machine.time_current_state_active().unwrap(), 0.0);
/// ```
pub struct StateMachine<K: StateKey> {
    id: Uuid,
    states: HashMap<K, Box<dyn State<K>>>,
    current: Option<K>,
    time_current_state_active: f32,
    observers: Observers<K>,
}

impl<K: StateKey> StateMachine<K> {
    /// Create a machine from a collection of states.
    ///
    /// Items may be boxed states or `Option`s of boxed states; a `None` item
    /// is rejected as an absent state. The collection is iterated once and
    /// the registry is frozen afterwards.
    ///
    /// # Errors
    ///
    /// The first registration problem in iteration order, see
    /// [`audit`](super::audit).
    pub fn new<I>(states: I) -> Result<Self, StateMachineError<K>>
    where
        I: IntoIterator,
        I::Item: Into<Option<Box<dyn State<K>>>>,
    {
        let slots: Vec<Option<Box<dyn State<K>>>> = states.into_iter().map(Into::into).collect();

        let report = audit(
            slots
                .iter()
                .map(|slot| slot.as_deref().map(Registration::of)),
        );
        if let Validation::Failure(errors) = report {
            debug!(problems = errors.len(), "rejected state collection");
            return Err(errors.head().clone());
        }

        let states: HashMap<K, Box<dyn State<K>>> = slots
            .into_iter()
            .flatten()
            .map(|state| (state.key(), state))
            .collect();

        let machine = Self {
            id: Uuid::new_v4(),
            states,
            current: None,
            time_current_state_active: 0.0,
            observers: Observers::new(),
        };
        debug!(machine = %machine.id, states = machine.states.len(), "created state machine");
        Ok(machine)
    }

    /// Unique id of this machine, carried in log fields and [`StateChange`]s.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Key of the active state.
    pub fn current_state(&self) -> Result<K, StateMachineError<K>> {
        self.current.ok_or(StateMachineError::NoStateSet)
    }

    /// Seconds the active state has been active. Resets on every transition.
    pub fn time_current_state_active(&self) -> Result<f32, StateMachineError<K>> {
        match self.current {
            Some(_) => Ok(self.time_current_state_active),
            None => Err(StateMachineError::NoStateSet),
        }
    }

    /// Whether [`enter`](Self::enter) has succeeded at least once.
    pub fn is_state_set(&self) -> bool {
        self.current.is_some()
    }

    /// Whether a state is registered under `key`.
    pub fn contains(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }

    /// Registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.states.keys().copied()
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: construction rejects empty collections.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The state registered under `key`, if any.
    pub fn get(&self, key: K) -> Option<&dyn State<K>> {
        self.states.get(&key).map(|state| &**state)
    }

    /// Subscribe to committed transitions.
    ///
    /// Observers run in subscription order after the previous state's `exit`
    /// and before the next state's `enter`. The first [`enter`](Self::enter)
    /// notifies nobody since no state is left.
    pub fn on_state_change<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Unsubscribe an observer. Returns `false` if it was not subscribed.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Activate the state registered under `target`.
    ///
    /// Entering the state that is already active does nothing: no `exit`,
    /// no `enter`, no notification, and the timer keeps running.
    ///
    /// # Errors
    ///
    /// [`StateMachineError::StateNotRegistered`] or
    /// [`StateMachineError::KeyMismatch`] if `target` does not resolve.
    pub fn enter(&mut self, target: K) -> Result<(), StateMachineError<K>> {
        let target = self.resolve(target)?;
        self.set_state(target, 0.0)
    }

    /// Advance the active state by `delta_time` seconds.
    ///
    /// The elapsed time is accumulated before the active state's `update`
    /// runs. If it returns another key the transition commits in the same
    /// call, and the next state's `enter` receives the same `delta_time`.
    ///
    /// # Errors
    ///
    /// - [`StateMachineError::NoStateSet`] before the first successful `enter`
    /// - [`StateMachineError::SelfTransition`] if the state returns its own key
    /// - [`StateMachineError::StateNotRegistered`] or
    ///   [`StateMachineError::KeyMismatch`] if the returned key does not resolve
    pub fn update(&mut self, delta_time: f32) -> Result<StepResult<K>, StateMachineError<K>> {
        let current = self.current_state()?;

        self.time_current_state_active += delta_time;
        let state = self.state_mut(current)?;
        let next = state.update(delta_time);
        let own = state.key();
        trace!(machine = %self.id, state = ?current, delta_time, ?next, "tick");

        if next == own {
            return Err(StateMachineError::SelfTransition { key: own });
        }
        if next.is_sentinel() {
            return Ok(StepResult::Stayed(current));
        }

        let target = self.resolve(next)?;
        self.set_state(target, delta_time)?;
        Ok(StepResult::Transitioned {
            from: current,
            to: target,
        })
    }

    /// Look up `key` and check the registered state still reports it.
    fn resolve(&self, key: K) -> Result<K, StateMachineError<K>> {
        let state = self
            .states
            .get(&key)
            .ok_or(StateMachineError::StateNotRegistered { key })?;

        let actual = state.key();
        if actual != key {
            return Err(StateMachineError::KeyMismatch {
                expected: key,
                actual,
            });
        }
        Ok(key)
    }

    fn state_mut(&mut self, key: K) -> Result<&mut Box<dyn State<K>>, StateMachineError<K>> {
        self.states
            .get_mut(&key)
            .ok_or(StateMachineError::StateNotRegistered { key })
    }

    fn set_state(&mut self, target: K, delta_time: f32) -> Result<(), StateMachineError<K>> {
        if self.current == Some(target) {
            trace!(machine = %self.id, state = ?target, "already active");
            return Ok(());
        }

        if let Some(previous) = self.current {
            self.state_mut(previous)?.exit();

            let change = StateChange::new(
                self.id,
                previous,
                target,
                delta_time,
                self.time_current_state_active,
            );
            debug!(
                machine = %self.id,
                from = previous.name(),
                to = target.name(),
                time_in_previous = self.time_current_state_active,
                "state transition"
            );
            self.observers.notify(&change);
        } else {
            debug!(machine = %self.id, state = target.name(), "initial state entered");
        }

        self.state_mut(target)?.enter(delta_time);
        self.current = Some(target);
        self.time_current_state_active = 0.0;
        Ok(())
    }
}
