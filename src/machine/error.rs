//! State machine error types.

use crate::core::StateKey;
use thiserror::Error;

/// Broad category of a [`StateMachineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The state collection, or one of its elements, is absent
    ArgumentNull,
    /// No state survived registration
    EmptyCollection,
    /// A state uses the sentinel key
    EnumDefault,
    /// A state uses a key outside the key set
    EnumUndefined,
    /// Two states share a key or a variant
    StateDuplication,
    /// A key has no usable registered state
    StateRetrieval,
    /// The machine was used in a way its current status forbids
    InvalidOperation,
}

/// Errors returned by [`StateMachine`](crate::machine::StateMachine) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateMachineError<K: StateKey> {
    #[error("No state collection was provided")]
    MissingStates,

    #[error("The state collection contains an absent state at index {index}")]
    NullState { index: usize },

    #[error("The state collection is empty")]
    EmptyStates,

    #[error("State key {key:?} is the reserved default value")]
    DefaultKey { key: K },

    #[error("State key {key:?} is not a defined key")]
    UndefinedKey { key: K },

    #[error("A state with key {key:?} is already registered")]
    DuplicateKey { key: K },

    #[error("A state of variant '{variant}' is already registered (duplicate has key {key:?})")]
    DuplicateVariant { key: K, variant: &'static str },

    #[error("No state is registered for key {key:?}")]
    StateNotRegistered { key: K },

    #[error("State registered under key {expected:?} reports key {actual:?}")]
    KeyMismatch { expected: K, actual: K },

    #[error("No state is set. Call enter() first")]
    NoStateSet,

    #[error("State must not return its own key ({key:?}) from update")]
    SelfTransition { key: K },
}

impl<K: StateKey> StateMachineError<K> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingStates | Self::NullState { .. } => ErrorKind::ArgumentNull,
            Self::EmptyStates => ErrorKind::EmptyCollection,
            Self::DefaultKey { .. } => ErrorKind::EnumDefault,
            Self::UndefinedKey { .. } => ErrorKind::EnumUndefined,
            Self::DuplicateKey { .. } | Self::DuplicateVariant { .. } => {
                ErrorKind::StateDuplication
            }
            Self::StateNotRegistered { .. } | Self::KeyMismatch { .. } => {
                ErrorKind::StateRetrieval
            }
            Self::NoStateSet | Self::SelfTransition { .. } => ErrorKind::InvalidOperation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_key;

    state_key! {
        enum TestKey {
            #[sentinel] None,
            Open,
            Shut,
        }
    }

    #[test]
    fn kinds_group_variants() {
        assert_eq!(
            StateMachineError::<TestKey>::MissingStates.kind(),
            ErrorKind::ArgumentNull
        );
        assert_eq!(
            StateMachineError::<TestKey>::NullState { index: 2 }.kind(),
            ErrorKind::ArgumentNull
        );
        assert_eq!(
            StateMachineError::DuplicateVariant {
                key: TestKey::Open,
                variant: "Door"
            }
            .kind(),
            ErrorKind::StateDuplication
        );
        assert_eq!(
            StateMachineError::KeyMismatch {
                expected: TestKey::Open,
                actual: TestKey::Shut
            }
            .kind(),
            ErrorKind::StateRetrieval
        );
        assert_eq!(
            StateMachineError::SelfTransition { key: TestKey::Open }.kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn messages_name_the_keys() {
        let err = StateMachineError::KeyMismatch {
            expected: TestKey::Open,
            actual: TestKey::Shut,
        };
        assert_eq!(
            err.to_string(),
            "State registered under key Open reports key Shut"
        );

        let err = StateMachineError::SelfTransition { key: TestKey::Shut };
        assert!(err.to_string().contains("Shut"));
    }
}
