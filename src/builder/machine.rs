//! Builder for constructing state machines.

use crate::core::{State, StateChange, StateKey};
use crate::machine::{Observer, StateMachine, StateMachineError};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use framestate::builder::StateMachineBuilder;
/// use framestate::core::State;
/// use framestate::state_key;
///
/// state_key! {
///     enum Door {
///         #[sentinel] None,
///         Open,
///         Closed,
///     }
/// }
///
/// struct Open;
///
/// impl State<Door> for Open {
///     fn key(&self) -> Door {
///         Door::Open
///     }
///
///     fn update(&mut self, _delta_time: f32) -> Door {
///         Door::Closed
///     }
/// }
///
/// struct Closed;
///
/// impl State<Door> for Closed {
///     fn key(&self) -> Door {
///         Door::Closed
///     }
///
///     fn update(&mut self, _delta_time: f32) -> Door {
///         Door::None
///     }
/// }
///
/// let machine = StateMachineBuilder::new()
///     .state(Open)
///     .state(Closed)
///     .on_state_change(|change| println!("{:?} -> {:?}", change.from, change.to))
///     .initial(Door::Open)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state().unwrap(), Door::Open);
/// ```
pub struct StateMachineBuilder<K: StateKey> {
    states: Option<Vec<Option<Box<dyn State<K>>>>>,
    observers: Vec<Observer<K>>,
    initial: Option<K>,
}

impl<K: StateKey> StateMachineBuilder<K> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: None,
            observers: Vec::new(),
            initial: None,
        }
    }

    /// Register a state.
    pub fn state<S: State<K>>(mut self, state: S) -> Self {
        self.states
            .get_or_insert_with(Vec::new)
            .push(Some(Box::new(state)));
        self
    }

    /// Register a collection of states. An empty collection still counts as
    /// provided, so `build` reports it as empty rather than missing.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Box<dyn State<K>>>>,
    {
        self.states
            .get_or_insert_with(Vec::new)
            .extend(states.into_iter().map(Into::into));
        self
    }

    /// Subscribe an observer before the machine exists.
    pub fn on_state_change<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&StateChange<K>) + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// State to enter right after construction (optional).
    pub fn initial(mut self, key: K) -> Self {
        self.initial = Some(key);
        self
    }

    /// Build the state machine.
    /// Returns an error if no states were given, if registration fails, or
    /// if the initial state cannot be entered.
    pub fn build(self) -> Result<StateMachine<K>, StateMachineError<K>> {
        let states = self.states.ok_or(StateMachineError::MissingStates)?;

        let mut machine = StateMachine::new(states)?;
        for observer in self.observers {
            machine.on_state_change(observer);
        }
        if let Some(initial) = self.initial {
            machine.enter(initial)?;
        }

        Ok(machine)
    }
}

impl<K: StateKey> Default for StateMachineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::ErrorKind;
    use crate::state_key;
    use std::cell::RefCell;
    use std::rc::Rc;

    state_key! {
        enum TestKey {
            #[sentinel] None,
            Initial,
            Processing,
            Complete,
        }
    }

    struct Step {
        key: TestKey,
        next: TestKey,
    }

    impl State<TestKey> for Step {
        fn key(&self) -> TestKey {
            self.key
        }

        fn update(&mut self, _delta_time: f32) -> TestKey {
            self.next
        }
    }

    struct Last;

    impl State<TestKey> for Last {
        fn key(&self) -> TestKey {
            TestKey::Complete
        }

        fn update(&mut self, _delta_time: f32) -> TestKey {
            TestKey::None
        }
    }

    #[test]
    fn builder_requires_states() {
        let result = StateMachineBuilder::<TestKey>::new().build();

        assert!(matches!(result, Err(StateMachineError::MissingStates)));
    }

    #[test]
    fn builder_reports_empty_collection() {
        let result = StateMachineBuilder::<TestKey>::new()
            .states(Vec::<Box<dyn State<TestKey>>>::new())
            .build();

        assert!(matches!(result, Err(StateMachineError::EmptyStates)));
    }

    #[test]
    fn builder_propagates_registration_errors() {
        let result = StateMachineBuilder::<TestKey>::new()
            .state(Step {
                key: TestKey::Initial,
                next: TestKey::None,
            })
            .state(Step {
                key: TestKey::Processing,
                next: TestKey::None,
            })
            .build();

        let err = result.err().unwrap();
        assert_eq!(err.kind(), ErrorKind::StateDuplication);
    }

    #[test]
    fn initial_state_is_entered_without_notification() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut machine = StateMachineBuilder::new()
            .state(Step {
                key: TestKey::Initial,
                next: TestKey::Complete,
            })
            .state(Last)
            .on_state_change(move |change| sink.borrow_mut().push(change.to))
            .initial(TestKey::Initial)
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), Ok(TestKey::Initial));
        assert!(seen.borrow().is_empty());

        machine.update(0.1).unwrap();
        assert_eq!(*seen.borrow(), vec![TestKey::Complete]);
    }

    #[test]
    fn unknown_initial_state_fails() {
        let result = StateMachineBuilder::new()
            .state(Last)
            .initial(TestKey::Processing)
            .build();

        assert!(matches!(
            result,
            Err(StateMachineError::StateNotRegistered {
                key: TestKey::Processing
            })
        ));
    }

    #[test]
    fn state_and_states_combine() {
        let extra: Vec<Box<dyn State<TestKey>>> = vec![Box::new(Last)];

        let machine = StateMachineBuilder::new()
            .state(Step {
                key: TestKey::Initial,
                next: TestKey::None,
            })
            .states(extra)
            .build()
            .unwrap();

        assert_eq!(machine.len(), 2);
        assert!(!machine.is_state_set());
    }
}
