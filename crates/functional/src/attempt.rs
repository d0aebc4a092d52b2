//! Fallible result: success value or captured error.
//!
//! [`Try<T>`] is the functional form of a guarded block. The catch boundary is
//! [`Try::attempt`] (and its async and `map` counterparts): an `Err` returned
//! from the guarded computation, or a panic unwinding out of it, becomes a
//! failure carrying the original error. Nothing escapes the boundary uncaught.
//!
//! Panic capture relies on unwinding; a binary built with `panic = "abort"`
//! terminates instead of producing a failure.
//!
//! # Examples
//!
//! ```rust
//! use nebula_functional::Try;
//!
//! let port = Try::attempt(|| "8080".parse::<u16>())
//!     .filter(|port| *port > 1024)
//!     .map(|port| port + 1);
//!
//! assert_eq!(port.value().unwrap(), &8081);
//!
//! let bad = Try::attempt(|| "eighty".parse::<u16>());
//! assert!(bad.failed().value().unwrap().to_string().contains("invalid digit"));
//! ```

use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::error::{Error, IntoFailure, Result};
use crate::opt::Opt;
use crate::traits::{ABSENT_HASH, Fallible, Optional, Union};

/// Either a success value or the [`Error`] that prevented it.
///
/// Equality compares tags, then success values by `T: PartialEq` or errors by
/// [`Error`]'s equality. A failure hashes to [`ABSENT_HASH`].
#[derive(Clone, PartialEq, Eq)]
#[must_use = "a Try may hold a failure, which should be handled"]
pub struct Try<T> {
    inner: std::result::Result<T, Error>,
}

impl<T> Try<T> {
    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// A successful result.
    pub const fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failed result.
    pub fn failure(error: impl IntoFailure) -> Self {
        Self {
            inner: Err(error.into_failure()),
        }
    }

    /// Runs `f` inside the catch boundary.
    ///
    /// An `Err` returned by `f` and a panic unwinding out of `f` both become a
    /// failure; the original error is kept unaltered.
    pub fn attempt<E>(f: impl FnOnce() -> std::result::Result<T, E>) -> Self
    where
        E: IntoFailure,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => Self::success(value),
            Ok(Err(error)) => Self::captured(error.into_failure()),
            Err(payload) => Self::panicked(payload),
        }
    }

    /// Runs an infallible computation inside the catch boundary; only a panic
    /// can produce a failure.
    pub fn attempt_value(f: impl FnOnce() -> T) -> Self {
        Self::attempt(|| Ok::<T, Error>(f()))
    }

    /// Awaits `future` inside the catch boundary.
    ///
    /// Applies the same rule as [`attempt`](Self::attempt) to the future's
    /// output and to panics raised while it is polled. Cancellation belongs to
    /// the future: dropping the returned future drops `future` unfinished.
    pub async fn attempt_async<E>(future: impl Future<Output = std::result::Result<T, E>>) -> Self
    where
        E: IntoFailure,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(Ok(value)) => Self::success(value),
            Ok(Err(error)) => Self::captured(error.into_failure()),
            Err(payload) => Self::panicked(payload),
        }
    }

    fn captured(error: Error) -> Self {
        tracing::debug!(error = %error, "captured failure");
        Self { inner: Err(error) }
    }

    fn panicked(payload: Box<dyn std::any::Any + Send>) -> Self {
        let error = Error::from_panic(payload);
        tracing::warn!(error = %error, "captured panic as failure");
        Self { inner: Err(error) }
    }

    pub(crate) const fn from_result(inner: std::result::Result<T, Error>) -> Self {
        Self { inner }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Returns `true` on success.
    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` on failure.
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// Alias of [`is_success`](Self::is_success), for optional-style call sites.
    pub const fn has_value(&self) -> bool {
        self.is_success()
    }

    /// Borrows the success value.
    ///
    /// A failure yields [`Error::InvalidState`] whose
    /// [`cause`](Error::cause) is the original error.
    pub fn value(&self) -> Result<&T> {
        self.inner
            .as_ref()
            .map_err(|error| Error::invalid_state_caused_by("Try failed", error.clone()))
    }

    /// Takes the success value; see [`value`](Self::value).
    pub fn into_value(self) -> Result<T> {
        self.inner
            .map_err(|error| Error::invalid_state_caused_by("Try failed", error))
    }

    /// Borrows the failure; a success yields [`Error::InvalidState`].
    pub fn error(&self) -> Result<&Error> {
        match &self.inner {
            Ok(_) => Err(Error::invalid_state("Try is a success")),
            Err(error) => Ok(error),
        }
    }

    /// Takes the failure; a success yields [`Error::InvalidState`].
    pub fn into_error(self) -> Result<Error> {
        match self.inner {
            Ok(_) => Err(Error::invalid_state("Try is a success")),
            Err(error) => Ok(error),
        }
    }

    /// Inverts the result: a failure's error becomes the success value.
    ///
    /// On a success, reading the error is attempted inside the catch boundary,
    /// so the result is a failure carrying that [`Error::InvalidState`].
    pub fn failed(self) -> Try<Error> {
        Try::attempt(|| self.into_error())
    }

    /// Positional access: index 0 is the value, anything else is out of range.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index == 0 {
            self.value()
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.count(),
            })
        }
    }

    /// Number of held values: 0 or 1.
    pub const fn count(&self) -> usize {
        if self.is_success() { 1 } else { 0 }
    }

    /// `true` when successful with a value equal to `expected`.
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&self.inner, Ok(value) if value == expected)
    }

    /// `true` when successful with a value satisfying `predicate`.
    pub fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        self.inner.as_ref().is_ok_and(predicate)
    }

    /// `true` when failed or when the value satisfies `predicate`.
    pub fn for_all(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match &self.inner {
            Ok(value) => predicate(value),
            Err(_) => true,
        }
    }

    /// Unwraps into the underlying `Result`.
    pub fn into_result(self) -> std::result::Result<T, Error> {
        self.inner
    }

    /// Borrows the inner result.
    pub const fn as_result(&self) -> &std::result::Result<T, Error> {
        &self.inner
    }

    /// Converts `&Try<T>` into `Try<&T>`, cloning a failure's error.
    pub fn as_ref(&self) -> Try<&T> {
        match &self.inner {
            Ok(value) => Try::success(value),
            Err(error) => Try::from_result(Err(error.clone())),
        }
    }

    /// Iterates over the zero or one success value.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.inner.as_ref().ok().into_iter()
    }

    // ------------------------------------------------------------------------
    // Combinators
    // ------------------------------------------------------------------------

    /// Dispatches on the tag: exactly one branch runs.
    pub fn match_with<R>(
        self,
        on_failure: impl FnOnce(Error) -> R,
        on_success: impl FnOnce(T) -> R,
    ) -> R {
        match self.inner {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    /// Applies `f` to a success value inside the catch boundary: a panic in
    /// `f` becomes a failure. A failure passes through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Try<U> {
        match self.inner {
            Ok(value) => Try::attempt_value(|| f(value)),
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Like [`map`](Self::map) for a fallible `f`; its `Err` is captured too.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> std::result::Result<U, E>) -> Try<U>
    where
        E: IntoFailure,
    {
        match self.inner {
            Ok(value) => Try::attempt(|| f(value)),
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Applies `f` to a success value and collapses the nesting.
    ///
    /// A failure short-circuits without invoking `f`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Try<U>) -> Try<U> {
        match self.inner {
            Ok(value) => f(value),
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Continues from either side.
    pub fn and_then_either<U>(
        self,
        on_failure: impl FnOnce(Error) -> Try<U>,
        on_success: impl FnOnce(T) -> Try<U>,
    ) -> Try<U> {
        self.match_with(on_failure, on_success)
    }

    /// Turns a success failing `predicate` into an
    /// [`Error::PredicateRejected`] failure naming the value.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self
    where
        T: fmt::Debug,
    {
        self.filter_or(predicate, |value| Error::predicate_rejected(value))
    }

    fn filter_or(
        self,
        predicate: impl FnOnce(&T) -> bool,
        rejection: impl FnOnce(&T) -> Error,
    ) -> Self {
        match self.inner {
            Ok(value) => {
                if predicate(&value) {
                    Self::success(value)
                } else {
                    Self::from_result(Err(rejection(&value)))
                }
            }
            Err(error) => Self::from_result(Err(error)),
        }
    }

    /// Replaces a failure with a value computed from its error, inside the
    /// catch boundary.
    pub fn recover(self, f: impl FnOnce(Error) -> T) -> Self {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(error) => Self::attempt_value(|| f(error)),
        }
    }

    /// `self` on success, `alternative` otherwise.
    pub fn or_else(self, alternative: Self) -> Self {
        match self.inner {
            Ok(_) => self,
            Err(_) => alternative,
        }
    }

    /// `self` on success, the result of `f` on the error otherwise.
    pub fn or_else_with(self, f: impl FnOnce(Error) -> Self) -> Self {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(error) => f(error),
        }
    }

    /// The success value, or `default`.
    pub fn get_or_else(self, default: T) -> T {
        self.inner.unwrap_or(default)
    }

    /// The success value, or one computed from the error.
    pub fn get_or_else_with(self, f: impl FnOnce(Error) -> T) -> T {
        self.inner.unwrap_or_else(f)
    }

    /// The success value, or `T::default()`.
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// Runs `action` on a success value.
    pub fn for_each(self, action: impl FnOnce(T)) {
        if let Ok(value) = self.inner {
            action(value);
        }
    }

    /// Runs the action matching the tag.
    pub fn for_each_result(self, on_failure: impl FnOnce(Error), on_success: impl FnOnce(T)) {
        match self.inner {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    // ------------------------------------------------------------------------
    // Async combinators
    // ------------------------------------------------------------------------

    /// Async [`match_with`](Self::match_with): awaits the selected branch only.
    pub async fn match_async<R, FF, FS>(
        self,
        on_failure: impl FnOnce(Error) -> FF,
        on_success: impl FnOnce(T) -> FS,
    ) -> R
    where
        FF: Future<Output = R>,
        FS: Future<Output = R>,
    {
        match self.inner {
            Ok(value) => on_success(value).await,
            Err(error) => on_failure(error).await,
        }
    }

    /// Async [`map`](Self::map); panics while producing or polling the future
    /// become a failure.
    pub async fn map_async<U, F>(self, f: impl FnOnce(T) -> F) -> Try<U>
    where
        F: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => Try::attempt_async(async move { Ok::<U, Error>(f(value).await) }).await,
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Async [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F>(self, f: impl FnOnce(T) -> F) -> Try<U>
    where
        F: Future<Output = Try<U>>,
    {
        match self.inner {
            Ok(value) => f(value).await,
            Err(error) => Try::from_result(Err(error)),
        }
    }

    /// Async [`for_each`](Self::for_each).
    pub async fn for_each_async<F>(self, action: impl FnOnce(T) -> F)
    where
        F: Future<Output = ()>,
    {
        if let Ok(value) = self.inner {
            action(value).await;
        }
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting; the outer failure wins.
    pub fn flatten(self) -> Try<T> {
        self.and_then(|inner| inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Success({value})"),
            Err(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<T: Hash> Hash for Try<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.inner {
            Ok(value) => value.hash(state),
            Err(_) => ABSENT_HASH.hash(state),
        }
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.ok().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Try<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Generic filtering names a rejected value by its type, since `T` need not be
/// `Debug`; the inherent [`Try::filter`] renders the value itself.
impl<T> Optional<T> for Try<T> {
    fn has_value(&self) -> bool {
        self.is_success()
    }

    fn as_opt(&self) -> Opt<&T> {
        self.inner.as_ref().ok().into()
    }

    fn match_with<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R {
        Try::match_with(self, |_| on_absent(), on_present)
    }

    fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.filter_or(predicate, |_| Error::predicate_rejected_type::<T>())
    }

    fn value(&self) -> Result<&T> {
        Try::value(self)
    }

    fn into_value(self) -> Result<T> {
        Try::into_value(self)
    }
}

impl<T> Fallible<T> for Try<T> {
    fn is_success(&self) -> bool {
        Try::is_success(self)
    }

    fn value(&self) -> Result<&T> {
        Try::value(self)
    }

    fn error(&self) -> Result<&Error> {
        Try::error(self)
    }

    fn match_result<R>(
        self,
        on_failure: impl FnOnce(Error) -> R,
        on_success: impl FnOnce(T) -> R,
    ) -> R {
        Try::match_with(self, on_failure, on_success)
    }

    fn into_try(self) -> Try<T> {
        self
    }
}

impl<T> Union<Error, T> for Try<T> {
    fn is_left(&self) -> bool {
        self.is_failure()
    }

    fn left_opt(&self) -> Opt<&Error> {
        self.inner.as_ref().err().into()
    }

    fn right_opt(&self) -> Opt<&T> {
        self.inner.as_ref().ok().into()
    }

    fn match_with<X>(self, on_left: impl FnOnce(Error) -> X, on_right: impl FnOnce(T) -> X) -> X {
        Try::match_with(self, on_left, on_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_exposes_value_not_error() {
        let t = Try::attempt(|| Ok::<_, Error>(1));
        assert!(t.is_success());
        assert_eq!(t.value().unwrap(), &1);
        assert!(t.error().unwrap_err().is_invalid_state());
        assert_eq!(t.clone().get_or_else(0), 1);
        assert_eq!(t.clone().match_with(|_| 0, |v| v + 1), 2);
        assert!(!t.failed().has_value());
    }

    #[test]
    fn failure_exposes_error_not_value() {
        let value = 1;
        let t = Try::attempt(|| {
            if value > 0 {
                Err(format!("value is positive: {value}"))
            } else {
                Ok(value)
            }
        });
        assert!(t.is_failure());
        let err = t.value().unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(err.cause().unwrap().to_string(), "value is positive: 1");
        assert_eq!(t.error().unwrap().to_string(), "value is positive: 1");
        assert_eq!(t.clone().get_or_else(0), 0);
        assert_eq!(t.clone().match_with(|_| 0, |v| v + 1), 0);
        assert!(t.failed().has_value());
    }

    #[test]
    fn failed_returns_the_original_error() {
        let original = Error::msg("boom");
        let t: Try<i32> = Try::attempt(|| Err(original.clone()));
        assert_eq!(t.failed().into_value().unwrap(), original);
    }

    #[test]
    fn failed_on_success_is_itself_a_failure() {
        let inverted = Try::success(5).failed();
        assert!(inverted.is_failure());
        assert!(inverted.error().unwrap().is_invalid_state());
    }

    #[test]
    fn map_applies_on_success() {
        assert_eq!(Try::success(10).map(|x| x + 1).value().unwrap(), &11);
    }

    #[test]
    fn map_passes_failure_through() {
        let e = Error::msg("E");
        let mapped = Try::<i32>::failure(e.clone()).map(|x| x + 1);
        assert_eq!(mapped.failed().into_value().unwrap(), e);
    }

    #[test]
    fn map_captures_panics() {
        let mapped = Try::success(0).map(|n: i32| -> i32 {
            if n == 0 {
                panic!("division by zero");
            }
            10 / n
        });
        let error = mapped.error().unwrap();
        assert!(error.is_panic());
        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn try_map_captures_errors() {
        let parsed = Try::success("x1").try_map(str::parse::<i32>);
        assert!(parsed.error().unwrap().downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn and_then_short_circuits_on_failure() {
        let mut called = false;
        let result = Try::<i32>::failure("nope").and_then(|n| {
            called = true;
            Try::success(n)
        });
        assert!(result.is_failure());
        assert!(!called);
    }

    #[test]
    fn filter_rejection_names_the_value() {
        let rejected = Try::success(3).filter(|n| n % 2 == 0);
        let error = rejected.error().unwrap();
        assert!(error.is_predicate_rejected());
        assert_eq!(error.to_string(), "predicate does not hold for value 3");

        assert_eq!(Try::success(4).filter(|n| n % 2 == 0), Try::success(4));
    }

    #[test]
    fn generic_filter_accepts_payloads_without_debug() {
        struct Handle(u8);

        fn keep_even<W: Optional<Handle>>(wrapper: W) -> W {
            Optional::filter(wrapper, |h| h.0 % 2 == 0)
        }

        assert!(keep_even(Try::success(Handle(2))).is_success());
        let rejected = keep_even(Try::success(Handle(3)));
        let error = rejected.error().unwrap();
        assert!(error.is_predicate_rejected());
        assert!(error.to_string().ends_with("Handle"), "{error}");
    }

    #[test]
    fn recovery() {
        let failed = Try::<i32>::failure("bad");
        assert_eq!(failed.clone().recover(|_| 7), Try::success(7));
        assert_eq!(failed.clone().or_else(Try::success(8)), Try::success(8));
        assert_eq!(
            failed.clone().or_else_with(|e| Try::success(e.to_string().len() as i32)),
            Try::success(3)
        );
        assert_eq!(failed.get_or_else_with(|e| e.to_string().len() as i32), 3);
    }

    #[test]
    fn flatten_keeps_outer_failure() {
        let nested = Try::success(Try::success(1));
        assert_eq!(nested.flatten(), Try::success(1));

        let outer = Error::msg("outer");
        let nested: Try<Try<i32>> = Try::failure(outer.clone());
        assert_eq!(nested.flatten().into_error().unwrap(), outer);
    }

    #[test]
    fn positional_access_and_iteration() {
        let t = Try::success('z');
        assert_eq!(t.get(0).unwrap(), &'z');
        assert_eq!(t.get(2).unwrap_err(), Error::IndexOutOfRange { index: 2, len: 1 });
        assert_eq!(t.iter().count(), 1);
        assert!(t.contains(&'z'));
        assert_eq!(Try::<char>::failure("x").into_iter().count(), 0);
    }

    #[test]
    fn failures_hash_to_sentinel() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |t: &Try<u8>| {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&Try::failure("a")), hash(&Try::failure("b")));
        assert_eq!(hash(&Try::success(1)), hash(&Try::success(1)));
    }
}
