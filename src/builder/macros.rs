//! Macros for ergonomic key declaration.

/// Declare a key enum and implement `StateKey` for it.
///
/// The variant marked `#[sentinel]` must come first. It becomes the
/// `Default` value, which states return from `update` to stay put.
///
/// # Example
///
/// ```
/// use framestate::core::StateKey;
/// use framestate::state_key;
///
/// state_key! {
///     pub enum Enemy {
///         #[sentinel] None,
///         Patrol,
///         Chase,
///         Flee,
///     }
/// }
///
/// assert_eq!(Enemy::default(), Enemy::None);
/// assert!(Enemy::None.is_sentinel());
/// assert_eq!(Enemy::members().len(), 4);
/// assert_eq!(Enemy::Chase.name(), "Chase");
/// ```
#[macro_export]
macro_rules! state_key {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            #[sentinel] $sentinel:ident
            $(, $variant:ident)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            Default,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            #[default]
            $sentinel,
            $($variant),*
        }

        impl $crate::core::StateKey for $name {
            fn members() -> &'static [Self] {
                &[Self::$sentinel, $(Self::$variant),*]
            }

            fn name(&self) -> &'static str {
                match self {
                    Self::$sentinel => stringify!($sentinel),
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
