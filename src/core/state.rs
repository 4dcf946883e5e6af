//! The State contract consumed by the machine.
//!
//! States are built by the caller and handed to the machine at construction.
//! The machine only indexes them by key and calls their lifecycle hooks.

use super::key::StateKey;
use std::any::TypeId;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Tag used to detect two registrations of the same kind of state.
///
/// By default a state is tagged with its concrete Rust type, so registering
/// two values of one type is rejected. A state type that is meant to be
/// registered several times (once per key) overrides [`State::variant`] and
/// returns a distinct [`StateVariant::tagged`] value for each instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateVariant {
    /// Concrete type identity.
    Type { id: TypeId, name: &'static str },
    /// Caller supplied tag.
    Tag(&'static str),
}

impl StateVariant {
    /// Variant identified by the type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        StateVariant::Type {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Variant identified by an explicit tag.
    pub fn tagged(tag: &'static str) -> Self {
        StateVariant::Tag(tag)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StateVariant::Type { name, .. } => name,
            StateVariant::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for StateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of behavior registered to a [`StateMachine`](crate::machine::StateMachine).
///
/// # Lifecycle
///
/// - `enter` runs exactly once each time the state becomes active. It receives
///   the delta time of the tick that caused the transition, or `0.0` when the
///   state was activated through [`StateMachine::enter`](crate::machine::StateMachine::enter).
/// - `update` runs once per machine tick while the state is active. It returns
///   the sentinel key to stay, or another registered key to transition there.
///   Returning its own key is a contract violation and the machine rejects it.
/// - `exit` runs exactly once when the state is deactivated, before the next
///   state's `enter`.
///
/// # Example
///
/// ```rust
/// use framestate::core::State;
/// use framestate::state_key;
///
/// state_key! {
///     pub enum Light {
///         #[sentinel] None,
///         Red,
///         Green,
///     }
/// }
///
/// struct RedLight {
///     waited: f32,
/// }
///
/// impl State<Light> for RedLight {
///     fn key(&self) -> Light {
///         Light::Red
///     }
///
///     fn enter(&mut self, _delta_time: f32) {
///         self.waited = 0.0;
///     }
///
///     fn update(&mut self, delta_time: f32) -> Light {
///         self.waited += delta_time;
///         if self.waited >= 30.0 {
///             Light::Green
///         } else {
///             Light::None
///         }
///     }
/// }
///
/// let mut red = RedLight { waited: 0.0 };
/// red.enter(0.0);
/// assert_eq!(red.update(10.0), Light::None);
/// assert_eq!(red.update(25.0), Light::Green);
/// ```
pub trait State<K: StateKey>: 'static {
    /// The fixed key identifying this state.
    ///
    /// Must be a defined key and must not be the sentinel.
    fn key(&self) -> K;

    /// Called when the state becomes active.
    fn enter(&mut self, _delta_time: f32) {}

    /// Called once per tick while active.
    fn update(&mut self, delta_time: f32) -> K;

    /// Called when the state is deactivated.
    fn exit(&mut self) {}

    /// Duplicate-detection tag, the concrete type by default.
    fn variant(&self) -> StateVariant {
        StateVariant::of::<Self>()
    }
}

/// Shared handle to a state, so the caller keeps access to a state it
/// registered.
impl<K: StateKey, S: State<K>> State<K> for Rc<RefCell<S>> {
    fn key(&self) -> K {
        self.borrow().key()
    }

    fn enter(&mut self, delta_time: f32) {
        self.borrow_mut().enter(delta_time)
    }

    fn update(&mut self, delta_time: f32) -> K {
        self.borrow_mut().update(delta_time)
    }

    fn exit(&mut self) {
        self.borrow_mut().exit()
    }

    fn variant(&self) -> StateVariant {
        self.borrow().variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    enum TestKey {
        #[default]
        None,
        Walk,
        Run,
    }

    impl StateKey for TestKey {
        fn members() -> &'static [Self] {
            &[Self::None, Self::Walk, Self::Run]
        }

        fn name(&self) -> &'static str {
            match self {
                Self::None => "None",
                Self::Walk => "Walk",
                Self::Run => "Run",
            }
        }
    }

    struct Walk {
        entered: u32,
        exited: u32,
    }

    impl State<TestKey> for Walk {
        fn key(&self) -> TestKey {
            TestKey::Walk
        }

        fn enter(&mut self, _delta_time: f32) {
            self.entered += 1;
        }

        fn update(&mut self, _delta_time: f32) -> TestKey {
            TestKey::Run
        }

        fn exit(&mut self) {
            self.exited += 1;
        }
    }

    struct Run;

    impl State<TestKey> for Run {
        fn key(&self) -> TestKey {
            TestKey::Run
        }

        fn update(&mut self, _delta_time: f32) -> TestKey {
            TestKey::None
        }
    }

    struct Tagged(&'static str);

    impl State<TestKey> for Tagged {
        fn key(&self) -> TestKey {
            TestKey::Run
        }

        fn update(&mut self, _delta_time: f32) -> TestKey {
            TestKey::None
        }

        fn variant(&self) -> StateVariant {
            StateVariant::tagged(self.0)
        }
    }

    #[test]
    fn default_variant_is_concrete_type() {
        assert_eq!(Run.variant(), StateVariant::of::<Run>());
        assert_ne!(Run.variant(), StateVariant::of::<Walk>());
        assert!(Run.variant().name().ends_with("Run"));
    }

    #[test]
    fn variant_survives_boxing() {
        let boxed: Box<dyn State<TestKey>> = Box::new(Run);
        assert_eq!(boxed.variant(), StateVariant::of::<Run>());
    }

    #[test]
    fn tagged_variants_compare_by_tag() {
        assert_eq!(Tagged("a").variant(), Tagged("a").variant());
        assert_ne!(Tagged("a").variant(), Tagged("b").variant());
        assert_eq!(Tagged("a").variant().to_string(), "a");
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut run = Run;
        run.enter(1.0);
        run.exit();
        assert_eq!(run.update(1.0), TestKey::None);
    }

    #[test]
    fn shared_handle_delegates_to_inner_state() {
        let walk = Rc::new(RefCell::new(Walk {
            entered: 0,
            exited: 0,
        }));
        let mut handle: Box<dyn State<TestKey>> = Box::new(Rc::clone(&walk));

        handle.enter(0.0);
        assert_eq!(handle.update(0.1), TestKey::Run);
        handle.exit();

        assert_eq!(handle.key(), TestKey::Walk);
        assert_eq!(handle.variant(), StateVariant::of::<Walk>());
        assert_eq!(walk.borrow().entered, 1);
        assert_eq!(walk.borrow().exited, 1);
    }
}
