//! Discrete keys that identify states.
//!
//! A key type is a closed set of values. One of them, the `Default` value,
//! is reserved as a sentinel meaning "no transition requested" and can never
//! identify a registered state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state keys.
///
/// Keys are small `Copy` values, usually fieldless enums. The
/// [`state_key!`](crate::state_key) macro implements this trait for an enum
/// and marks its sentinel variant.
///
/// # Required Traits
///
/// - `Default`: the default value is the sentinel
/// - `Eq` + `Hash`: keys index the state registry
/// - `Debug`: keys appear in errors and log fields
/// - `Serialize` + `Deserialize`: keys travel inside [`StateChange`](crate::core::StateChange)
///
/// # Example
///
/// ```rust
/// use framestate::core::StateKey;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
/// enum Door {
///     #[default]
///     None,
///     Open,
///     Closed,
/// }
///
/// impl StateKey for Door {
///     fn members() -> &'static [Self] {
///         &[Self::None, Self::Open, Self::Closed]
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::None => "None",
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert!(Door::None.is_sentinel());
/// assert!(Door::Open.is_defined());
/// ```
pub trait StateKey:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// Every defined value of the key type, the sentinel included.
    fn members() -> &'static [Self];

    /// Display name of the key.
    fn name(&self) -> &'static str;

    /// Whether this key is the reserved "no transition" value.
    fn is_sentinel(&self) -> bool {
        *self == Self::default()
    }

    /// Whether this key is one of [`members`](StateKey::members).
    fn is_defined(&self) -> bool {
        Self::members().contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
    enum Slot {
        #[default]
        Empty,
        Low,
        High,
        // Deliberately left out of `members()`.
        Orphan,
    }

    impl StateKey for Slot {
        fn members() -> &'static [Self] {
            &[Self::Empty, Self::Low, Self::High]
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Empty => "Empty",
                Self::Low => "Low",
                Self::High => "High",
                Self::Orphan => "Orphan",
            }
        }
    }

    #[test]
    fn default_value_is_the_sentinel() {
        assert!(Slot::Empty.is_sentinel());
        assert!(!Slot::Low.is_sentinel());
        assert!(!Slot::High.is_sentinel());
    }

    #[test]
    fn membership_follows_members_list() {
        assert!(Slot::Empty.is_defined());
        assert!(Slot::Low.is_defined());
        assert!(Slot::High.is_defined());
        assert!(!Slot::Orphan.is_defined());
    }

    #[test]
    fn key_serializes_correctly() {
        let json = serde_json::to_string(&Slot::High).unwrap();
        let deserialized: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Slot::High);
    }
}
