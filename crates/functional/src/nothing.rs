//! The payload-independent absent value.

use std::hash::{Hash, Hasher};

use crate::traits::ABSENT_HASH;

/// Absence without a payload type.
///
/// `Nothing` converts into an absent [`Opt`](crate::Opt) or
/// [`Maybe`](crate::Maybe) of any payload, and every absent wrapper compares
/// equal to it, whatever its type parameter:
///
/// ```rust
/// use nebula_functional::{Maybe, Nothing, Opt};
///
/// let none: Opt<u32> = Nothing.into();
/// assert_eq!(none, Nothing);
/// assert_eq!(Maybe::<Box<str>>::none(), Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Nothing;

impl Hash for Nothing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ABSENT_HASH.hash(state);
    }
}
