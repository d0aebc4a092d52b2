//! Capability contracts shared by the wrapper types.
//!
//! Generic code is written once against these traits and works with every
//! wrapper:
//!
//! - [`Optional`] - present / absent ([`Opt`], [`Maybe`](crate::Maybe),
//!   [`Try`](crate::Try))
//! - [`Fallible`] - success / failure ([`Try`](crate::Try) and
//!   `Result<T, Error>`)
//! - [`Union`] - left / right ([`Either`](crate::Either), and
//!   [`Try`](crate::Try) as `Union<Error, T>`)
//!
//! Interface-level projections (`map`, `flat_map`) land in the value-optional
//! [`Opt`]; the concrete types carry inherent combinators that stay in their
//! own family.

use crate::attempt::Try;
use crate::error::{Error, Result};
use crate::opt::Opt;

/// Hash written by every absent value, whatever its payload type.
///
/// Present values hash as their payload, so a payload hashing to the same
/// bytes collides with absence. Collisions never break equality.
pub const ABSENT_HASH: u64 = 0x9e37_79b9_7f4a_7c15;

// ============================================================================
// OPTIONAL
// ============================================================================

/// A value that is either present (exactly one `T`) or absent.
///
/// # Examples
///
/// ```rust
/// use nebula_functional::prelude::*;
///
/// fn describe<W: Optional<u32>>(wrapper: W) -> String {
///     wrapper.match_with(|| "nothing".to_owned(), |n| format!("got {n}"))
/// }
///
/// assert_eq!(describe(Opt::some(3)), "got 3");
/// assert_eq!(describe(Try::<u32>::failure("bad")), "nothing");
/// ```
pub trait Optional<T>: Sized {
    /// Returns `true` when a value is present.
    fn has_value(&self) -> bool;

    /// Borrows the value as a value-optional.
    fn as_opt(&self) -> Opt<&T>;

    /// Dispatches on the tag: exactly one branch runs.
    fn match_with<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R;

    /// Keeps a present value only if it satisfies `predicate`.
    fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self;

    /// Borrows the value, failing with [`Error::InvalidState`] when absent.
    fn value(&self) -> Result<&T> {
        match self.as_opt() {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(Error::invalid_state("no value present")),
        }
    }

    /// Takes the value, failing with [`Error::InvalidState`] when absent.
    fn into_value(self) -> Result<T> {
        self.match_with(|| Err(Error::invalid_state("no value present")), Ok)
    }

    /// Projects the value into a value-optional.
    fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
        self.match_with(Opt::none, |value| Opt::Some(f(value)))
    }

    /// Projects the value and collapses the nesting.
    fn flat_map<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        self.match_with(Opt::none, f)
    }

    /// Runs `action` on a present value.
    fn for_each(self, action: impl FnOnce(T)) {
        self.match_with(|| (), action);
    }

    /// Number of held values: 0 or 1.
    fn count(&self) -> usize {
        usize::from(self.has_value())
    }

    /// `true` when a value is present and satisfies `predicate`.
    fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self.as_opt() {
            Opt::Some(value) => predicate(value),
            Opt::None => false,
        }
    }

    /// `true` when absent or when the value satisfies `predicate`.
    fn for_all(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self.as_opt() {
            Opt::Some(value) => predicate(value),
            Opt::None => true,
        }
    }

    /// `true` when the held value equals `expected`.
    fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// `true` when `comparer` accepts the held value against `expected`.
    fn contains_by(&self, expected: &T, comparer: impl FnOnce(&T, &T) -> bool) -> bool {
        self.exists(|value| comparer(value, expected))
    }

    /// The value, or `default` when absent.
    fn get_or_else(self, default: T) -> T {
        self.match_with(|| default, |value| value)
    }

    /// The value, or the result of `supplier` when absent.
    fn get_or_else_with(self, supplier: impl FnOnce() -> T) -> T {
        self.match_with(supplier, |value| value)
    }
}

// ============================================================================
// FALLIBLE
// ============================================================================

/// A value that is either a success (`T`) or a failure ([`Error`]).
pub trait Fallible<T>: Sized {
    /// Returns `true` on success.
    fn is_success(&self) -> bool;

    /// Returns `true` on failure.
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success value; a failure yields [`Error::InvalidState`]
    /// whose cause is the original error.
    fn value(&self) -> Result<&T>;

    /// Borrows the failure; a success yields [`Error::InvalidState`].
    fn error(&self) -> Result<&Error>;

    /// Dispatches on the tag: exactly one branch runs.
    fn match_result<R>(
        self,
        on_failure: impl FnOnce(Error) -> R,
        on_success: impl FnOnce(T) -> R,
    ) -> R;

    /// Normalises into a [`Try`].
    fn into_try(self) -> Try<T> {
        self.match_result(|error| Try::failure(error), Try::success)
    }
}

impl<T> Fallible<T> for std::result::Result<T, Error> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    fn value(&self) -> Result<&T> {
        self.as_ref()
            .map_err(|error| Error::invalid_state_caused_by("result is an error", error.clone()))
    }

    fn error(&self) -> Result<&Error> {
        match self {
            Ok(_) => Err(Error::invalid_state("result is a success")),
            Err(error) => Ok(error),
        }
    }

    fn match_result<R>(
        self,
        on_failure: impl FnOnce(Error) -> R,
        on_success: impl FnOnce(T) -> R,
    ) -> R {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

// ============================================================================
// UNION
// ============================================================================

/// A tagged value holding exactly one of two payload types.
pub trait Union<L, R>: Sized {
    /// Returns `true` for the left variant.
    fn is_left(&self) -> bool;

    /// Returns `true` for the right variant.
    fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Borrows the left payload, if selected.
    fn left_opt(&self) -> Opt<&L>;

    /// Borrows the right payload, if selected.
    fn right_opt(&self) -> Opt<&R>;

    /// Dispatches on the tag: exactly one branch runs.
    fn match_with<X>(self, on_left: impl FnOnce(L) -> X, on_right: impl FnOnce(R) -> X) -> X;

    /// Borrows the left payload; the right variant is [`Error::InvalidState`].
    fn left(&self) -> Result<&L> {
        match self.left_opt() {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(Error::invalid_state("not a left value")),
        }
    }

    /// Borrows the right payload; the left variant is [`Error::InvalidState`].
    fn right(&self) -> Result<&R> {
        match self.right_opt() {
            Opt::Some(value) => Ok(value),
            Opt::None => Err(Error::invalid_state("not a right value")),
        }
    }

    /// Runs the action matching the tag.
    fn for_each(self, on_left: impl FnOnce(L), on_right: impl FnOnce(R)) {
        self.match_with(on_left, on_right);
    }
}
