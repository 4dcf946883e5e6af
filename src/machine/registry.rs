//! Registration checks for the states handed to a machine.
//!
//! Uses Stillwater's `Validation` to report every problem with a state
//! collection in one pass. [`StateMachine::new`](super::StateMachine::new)
//! runs the same audit and returns the first problem found.

use super::error::StateMachineError;
use crate::core::{State, StateKey, StateVariant};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of auditing a state collection.
pub type Audit<K> = Validation<(), NonEmptyVec<StateMachineError<K>>>;

/// What the registry needs to know about a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration<K: StateKey> {
    pub key: K,
    pub variant: StateVariant,
}

impl<K: StateKey> Registration<K> {
    /// Read the key and variant a state reports.
    pub fn of(state: &dyn State<K>) -> Self {
        Self {
            key: state.key(),
            variant: state.variant(),
        }
    }
}

/// Audit a sequence of registrations, `None` standing for an absent state.
///
/// Each offending element contributes one error, in iteration order:
/// absent state, sentinel key, undefined key, duplicate key, duplicate
/// variant. Offending elements are not counted as registered, so they never
/// cause a later element to be flagged as a duplicate. A collection with no
/// elements at all fails with [`StateMachineError::EmptyStates`].
///
/// # Example
///
/// ```rust
/// use framestate::core::StateVariant;
/// use framestate::machine::{audit, Registration, StateMachineError};
/// use framestate::state_key;
/// use stillwater::validation::Validation;
///
/// state_key! {
///     enum Mode {
///         #[sentinel] None,
///         Idle,
///         Busy,
///     }
/// }
///
/// let report = audit(vec![
///     Some(Registration { key: Mode::None, variant: StateVariant::tagged("a") }),
///     None,
///     Some(Registration { key: Mode::Idle, variant: StateVariant::tagged("b") }),
/// ]);
///
/// match report {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected failures"),
/// }
/// ```
pub fn audit<K, I>(entries: I) -> Audit<K>
where
    K: StateKey,
    I: IntoIterator<Item = Option<Registration<K>>>,
{
    let mut keys = HashSet::new();
    let mut variants = HashSet::new();
    let mut checks: Vec<Audit<K>> = Vec::new();
    let mut rejected = false;

    for (index, entry) in entries.into_iter().enumerate() {
        let check = match entry {
            None => Validation::fail(StateMachineError::NullState { index }),
            Some(registration) => check_registration(registration, &mut keys, &mut variants),
        };
        rejected |= matches!(check, Validation::Failure(_));
        checks.push(check);
    }

    if keys.is_empty() && !rejected {
        checks.push(Validation::fail(StateMachineError::EmptyStates));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_registration<K: StateKey>(
    registration: Registration<K>,
    keys: &mut HashSet<K>,
    variants: &mut HashSet<StateVariant>,
) -> Audit<K> {
    let Registration { key, variant } = registration;

    if key.is_sentinel() {
        return Validation::fail(StateMachineError::DefaultKey { key });
    }
    if !key.is_defined() {
        return Validation::fail(StateMachineError::UndefinedKey { key });
    }
    if keys.contains(&key) {
        return Validation::fail(StateMachineError::DuplicateKey { key });
    }
    if variants.contains(&variant) {
        return Validation::fail(StateMachineError::DuplicateVariant {
            key,
            variant: variant.name(),
        });
    }

    keys.insert(key);
    variants.insert(variant);
    Validation::success(())
}
