//! Value-optional: present / absent for any payload type.
//!
//! [`Opt<T>`] carries its own tag, so it works for payloads with no natural
//! "no value" state (`u32`, structs, tuples). For pointer-like payloads see
//! [`Maybe`](crate::Maybe), which stores absence in the pointer's niche.
//!
//! # Examples
//!
//! ```rust
//! use nebula_functional::Opt;
//!
//! let port = Opt::some("8080")
//!     .and_then(|s| Opt::from(s.parse::<u16>().ok()))
//!     .filter(|port| *port > 1024);
//!
//! assert_eq!(port.get_or_else(80), 8080);
//! ```

use std::future::Future;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::nothing::Nothing;
use crate::traits::{ABSENT_HASH, Optional};

/// An optional value: [`Opt::Some`] holding exactly one `T`, or [`Opt::None`].
///
/// Absent values of every payload type compare equal to [`Nothing`] and hash
/// to [`ABSENT_HASH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[must_use = "an Opt may be absent, which should be handled"]
pub enum Opt<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Opt<T> {
    /// The absent value.
    pub const NONE: Self = Self::None;

    /// Lifts a value.
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The absent value.
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns `true` when a value is present.
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` when absent.
    pub const fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the value, failing with [`Error::InvalidState`] when absent.
    pub fn value(&self) -> Result<&T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::invalid_state("Opt has no value")),
        }
    }

    /// Takes the value, failing with [`Error::InvalidState`] when absent.
    pub fn into_value(self) -> Result<T> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::invalid_state("Opt has no value")),
        }
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
        if self.has_value() { 1 } else { 0 }
    }

    /// Converts `&Opt<T>` into `Opt<&T>`.
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Some(value) => Opt::Some(value),
            Self::None => Opt::None,
        }
    }

    /// Converts `&mut Opt<T>` into `Opt<&mut T>`.
    pub fn as_mut(&mut self) -> Opt<&mut T> {
        match self {
            Self::Some(value) => Opt::Some(value),
            Self::None => Opt::None,
        }
    }

    /// Borrows as the native optional.
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Dispatches on the tag: exactly one branch runs.
    pub fn match_with<R>(self, on_none: impl FnOnce() -> R, on_some: impl FnOnce(T) -> R) -> R {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Applies `f` to a present value. Panics raised by `f` propagate.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Opt<U> {
        match self {
            Self::Some(value) => Opt::Some(f(value)),
            Self::None => Opt::None,
        }
    }

    /// Applies `f` to a present value and collapses the nesting.
    ///
    /// `f` is not invoked when absent.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Opt<U>) -> Opt<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Opt::None,
        }
    }

    /// Keeps a present value only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Runs `action` on a present value.
    pub fn for_each(self, action: impl FnOnce(T)) {
        if let Self::Some(value) = self {
            action(value);
        }
    }

    /// Runs `on_some` on a present value, `on_none` otherwise.
    pub fn for_each_or(self, on_none: impl FnOnce(), on_some: impl FnOnce(T)) {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// `true` when a value is present and satisfies `predicate`.
    pub fn exists(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// `true` when absent or when the value satisfies `predicate`.
    pub fn for_all(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// `true` when the held value equals `expected`.
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// `true` when `comparer` accepts the held value against `expected`.
    pub fn contains_by(&self, expected: &T, comparer: impl FnOnce(&T, &T) -> bool) -> bool {
        self.exists(|value| comparer(value, expected))
    }

    /// The value, or `default` when absent.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// The value, or the result of `supplier` when absent.
    pub fn get_or_else_with(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// The value, or `T::default()` when absent.
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        self.get_or_else_with(T::default)
    }

    /// `self` when present, `alternative` otherwise.
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => alternative,
        }
    }

    /// `self` when present, the result of `supplier` otherwise.
    pub fn or_else_with(self, supplier: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => supplier(),
        }
    }

    /// Pairs two present values; absent if either side is.
    pub fn zip<U>(self, other: Opt<U>) -> Opt<(T, U)> {
        match (self, other) {
            (Self::Some(a), Opt::Some(b)) => Opt::Some((a, b)),
            _ => Opt::None,
        }
    }

    /// Takes the value out, leaving [`Opt::None`].
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Iterates over the zero or one held value.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_option().into_iter()
    }
}

impl<T> Opt<Opt<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Opt<T> {
        self.and_then(|inner| inner)
    }
}

impl<T> Opt<T> {
    /// Async [`match_with`](Self::match_with): awaits the selected branch only.
    pub async fn match_async<R, FN, FS>(
        self,
        on_none: impl FnOnce() -> FN,
        on_some: impl FnOnce(T) -> FS,
    ) -> R
    where
        FN: Future<Output = R>,
        FS: Future<Output = R>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }

    /// Async [`for_each`](Self::for_each).
    pub async fn for_each_async<F>(self, action: impl FnOnce(T) -> F)
    where
        F: Future<Output = ()>,
    {
        if let Self::Some(value) = self {
            action(value).await;
        }
    }

    /// Async [`map`](Self::map).
    pub async fn map_async<U, F>(self, f: impl FnOnce(T) -> F) -> Opt<U>
    where
        F: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Opt::Some(f(value).await),
            Self::None => Opt::None,
        }
    }

    /// Async [`and_then`](Self::and_then).
    pub async fn and_then_async<U, F>(self, f: impl FnOnce(T) -> F) -> Opt<U>
    where
        F: Future<Output = Opt<U>>,
    {
        match self {
            Self::Some(value) => f(value).await,
            Self::None => Opt::None,
        }
    }

    /// Async [`or_else_with`](Self::or_else_with).
    pub async fn or_else_async<F>(self, supplier: impl FnOnce() -> F) -> Self
    where
        F: Future<Output = Self>,
    {
        match self {
            Self::Some(_) => self,
            Self::None => supplier().await,
        }
    }
}

impl<T> Default for Opt<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: Hash> Hash for Opt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(value) => value.hash(state),
            Self::None => ABSENT_HASH.hash(state),
        }
    }
}

impl<T> PartialEq<Nothing> for Opt<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_none()
    }
}

impl<T> PartialEq<Opt<T>> for Nothing {
    fn eq(&self, other: &Opt<T>) -> bool {
        other.is_none()
    }
}

impl<T> From<Nothing> for Opt<T> {
    fn from(_: Nothing) -> Self {
        Self::None
    }
}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::<T>::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Optional<T> for Opt<T> {
    fn has_value(&self) -> bool {
        Opt::has_value(self)
    }

    fn as_opt(&self) -> Opt<&T> {
        self.as_ref()
    }

    fn match_with<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R {
        Opt::match_with(self, on_absent, on_present)
    }

    fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        Opt::filter(self, predicate)
    }

    fn value(&self) -> Result<&T> {
        Opt::value(self)
    }

    fn into_value(self) -> Result<T> {
        Opt::into_value(self)
    }
}
