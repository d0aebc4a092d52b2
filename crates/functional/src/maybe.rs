//! Reference-optional: present / absent for pointer-like payloads.
//!
//! [`Maybe<P>`] is a transparent wrapper over the native nullable form
//! `Option<P>`. Its payloads implement [`Nullable`]: pointer types for which
//! the null pointer is a spare bit pattern, so absence costs no extra tag and
//! `Maybe<P>` has the size of `P`.
//!
//! ```rust
//! use std::ptr::NonNull;
//! use nebula_functional::Maybe;
//!
//! let mut slot = 7_u32;
//! let present = Maybe::<NonNull<u32>>::from_ptr(&mut slot);
//! let absent = Maybe::<NonNull<u32>>::from_ptr(std::ptr::null_mut());
//!
//! assert!(present.has_value());
//! assert!(absent.into_ptr().is_null());
//! ```

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use std::ops::Deref;
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

use static_assertions::assert_eq_size;

use crate::error::{Error, Result};
use crate::nothing::Nothing;
use crate::opt::Opt;
use crate::traits::{ABSENT_HASH, Optional};

mod sealed {
    pub trait Sealed {}
}

/// Payload types whose absence fits in the null-pointer niche.
///
/// Sealed: the implementations are exactly the types for which the layout of
/// `Option<P>` is guaranteed to equal the layout of `P`.
pub trait Nullable: sealed::Sealed {}

macro_rules! nullable {
    ($(impl<$($param:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($param: ?Sized),*> sealed::Sealed for $ty {}
            impl<$($param: ?Sized),*> Nullable for $ty {}
        )*
    };
}

nullable! {
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
    impl<T> for NonNull<T>;
}

impl<T: ?Sized> sealed::Sealed for &T {}
impl<T: ?Sized> Nullable for &T {}
impl<T: ?Sized> sealed::Sealed for &mut T {}
impl<T: ?Sized> Nullable for &mut T {}

macro_rules! nullable_non_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Nullable for $ty {}
        )*
    };
}

nullable_non_zero!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
);

assert_eq_size!(Maybe<Box<u64>>, Box<u64>);
assert_eq_size!(Maybe<&str>, &str);
assert_eq_size!(Maybe<Arc<String>>, Arc<String>);
assert_eq_size!(Maybe<Rc<[u8]>>, Rc<[u8]>);
assert_eq_size!(Maybe<NonNull<u8>>, *mut u8);
assert_eq_size!(Maybe<NonZeroU32>, u32);

/// An optional pointer-like value, absent when null.
///
/// Same contract as [`Opt`]: present values expose exactly one payload, absent
/// values of any payload type compare equal to [`Nothing`] and hash to
/// [`ABSENT_HASH`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[must_use = "a Maybe may be absent, which should be handled"]
pub struct Maybe<P>(Option<P>);

impl<P> Maybe<P> {
    /// The absent value.
    pub const NONE: Self = Self(None);

    /// The absent value.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Returns `true` when a value is present.
    pub const fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` when absent.
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl<P: Nullable> Maybe<P> {
    /// Lifts a payload. A payload is never null, so the result is present.
    pub const fn some(value: P) -> Self {
        Self(Some(value))
    }

    /// Wraps the native nullable form.
    pub const fn from_native(value: Option<P>) -> Self {
        Self(value)
    }

    /// Unwraps into the native nullable form.
    pub fn into_native(self) -> Option<P> {
        self.0
    }

    /// Borrows as the native nullable form.
    pub const fn as_native(&self) -> &Option<P> {
        &self.0
    }

    /// Borrows the value, failing with [`Error::InvalidState`] when absent.
    pub fn value(&self) -> Result<&P> {
        self.0
            .as_ref()
            .ok_or_else(|| Error::invalid_state("Maybe has no value"))
    }

    /// Takes the value, failing with [`Error::InvalidState`] when absent.
    pub fn into_value(self) -> Result<P> {
        self.0.ok_or_else(|| Error::invalid_state("Maybe has no value"))
    }

    /// Positional access: index 0 is the value, anything else is out of range.
    pub fn get(&self, index: usize) -> Result<&P> {
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

    /// Borrows the payload as a value-optional.
    pub fn as_opt(&self) -> Opt<&P> {
        self.0.as_ref().into()
    }

    /// Borrows through the pointer.
    pub fn as_deref(&self) -> Maybe<&P::Target>
    where
        P: Deref,
    {
        Maybe(self.0.as_deref())
    }

    /// Dispatches on the tag: exactly one branch runs.
    pub fn match_with<R>(self, on_none: impl FnOnce() -> R, on_some: impl FnOnce(P) -> R) -> R {
        match self.0 {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Applies `f` to a present payload. Panics raised by `f` propagate.
    pub fn map<Q: Nullable>(self, f: impl FnOnce(P) -> Q) -> Maybe<Q> {
        Maybe(self.0.map(f))
    }

    /// Applies `f` to a present payload and collapses the nesting.
    ///
    /// `f` is not invoked when absent.
    pub fn and_then<Q: Nullable>(self, f: impl FnOnce(P) -> Maybe<Q>) -> Maybe<Q> {
        match self.0 {
            Some(value) => f(value),
            None => Maybe::NONE,
        }
    }

    /// Keeps a present payload only if it satisfies `predicate`.
    pub fn filter(self, predicate: impl FnOnce(&P) -> bool) -> Self {
        Self(self.0.filter(predicate))
    }

    /// Runs `action` on a present payload.
    pub fn for_each(self, action: impl FnOnce(P)) {
        if let Some(value) = self.0 {
            action(value);
        }
    }

    /// Runs `on_some` on a present payload, `on_none` otherwise.
    pub fn for_each_or(self, on_none: impl FnOnce(), on_some: impl FnOnce(P)) {
        match self.0 {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// `true` when a payload is present and satisfies `predicate`.
    pub fn exists(&self, predicate: impl FnOnce(&P) -> bool) -> bool {
        self.0.as_ref().is_some_and(predicate)
    }

    /// `true` when absent or when the payload satisfies `predicate`.
    pub fn for_all(&self, predicate: impl FnOnce(&P) -> bool) -> bool {
        self.0.as_ref().is_none_or(predicate)
    }

    /// `true` when the held payload equals `expected`.
    pub fn contains(&self, expected: &P) -> bool
    where
        P: PartialEq,
    {
        self.exists(|value| value == expected)
    }

    /// `true` when `comparer` accepts the held payload against `expected`.
    pub fn contains_by(&self, expected: &P, comparer: impl FnOnce(&P, &P) -> bool) -> bool {
        self.exists(|value| comparer(value, expected))
    }

    /// The payload, or `default` when absent.
    pub fn get_or_else(self, default: P) -> P {
        self.0.unwrap_or(default)
    }

    /// The payload, or the result of `supplier` when absent.
    pub fn get_or_else_with(self, supplier: impl FnOnce() -> P) -> P {
        self.0.unwrap_or_else(supplier)
    }

    /// The payload, or `P::default()` when absent.
    pub fn get_or_default(self) -> P
    where
        P: Default,
    {
        self.0.unwrap_or_default()
    }

    /// `self` when present, `alternative` otherwise.
    pub fn or_else(self, alternative: Self) -> Self {
        Self(self.0.or(alternative.0))
    }

    /// `self` when present, the result of `supplier` otherwise.
    pub fn or_else_with(self, supplier: impl FnOnce() -> Self) -> Self {
        match self.0 {
            Some(_) => self,
            None => supplier(),
        }
    }

    /// Takes the payload out, leaving an absent value.
    pub fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Iterates over the zero or one held payload.
    pub fn iter(&self) -> std::option::IntoIter<&P> {
        self.0.as_ref().into_iter()
    }
}

impl<P: Nullable> Maybe<P> {
    /// Async [`match_with`](Self::match_with): awaits the selected branch only.
    pub async fn match_async<R, FN, FS>(
        self,
        on_none: impl FnOnce() -> FN,
        on_some: impl FnOnce(P) -> FS,
    ) -> R
    where
        FN: Future<Output = R>,
        FS: Future<Output = R>,
    {
        match self.0 {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }

    /// Async [`for_each`](Self::for_each).
    pub async fn for_each_async<F>(self, action: impl FnOnce(P) -> F)
    where
        F: Future<Output = ()>,
    {
        if let Some(value) = self.0 {
            action(value).await;
        }
    }

    /// Async [`map`](Self::map).
    pub async fn map_async<Q: Nullable, F>(self, f: impl FnOnce(P) -> F) -> Maybe<Q>
    where
        F: Future<Output = Q>,
    {
        match self.0 {
            Some(value) => Maybe(Some(f(value).await)),
            None => Maybe::NONE,
        }
    }

    /// Async [`and_then`](Self::and_then).
    pub async fn and_then_async<Q: Nullable, F>(self, f: impl FnOnce(P) -> F) -> Maybe<Q>
    where
        F: Future<Output = Maybe<Q>>,
    {
        match self.0 {
            Some(value) => f(value).await,
            None => Maybe::NONE,
        }
    }

    /// Async [`or_else_with`](Self::or_else_with).
    pub async fn or_else_async<F>(self, supplier: impl FnOnce() -> F) -> Self
    where
        F: Future<Output = Self>,
    {
        match self.0 {
            Some(_) => self,
            None => supplier().await,
        }
    }
}

impl<T> Maybe<NonNull<T>> {
    /// Collapses a raw pointer: null becomes absent.
    pub fn from_ptr(ptr: *mut T) -> Self {
        Self(NonNull::new(ptr))
    }

    /// Expands into a raw pointer: absent becomes null.
    pub fn into_ptr(self) -> *mut T {
        self.0.map_or(std::ptr::null_mut(), NonNull::as_ptr)
    }
}

impl Maybe<Box<dyn Any>> {
    /// Narrows the payload to a concrete type; absent when the type differs.
    pub fn downcast<T: Any>(self) -> Maybe<Box<T>> {
        self.and_then(|boxed| Maybe(boxed.downcast::<T>().ok()))
    }
}

impl Maybe<Box<dyn Any + Send + Sync>> {
    /// Narrows the payload to a concrete type; absent when the type differs.
    pub fn downcast<T: Any>(self) -> Maybe<Box<T>> {
        self.and_then(|boxed| Maybe(boxed.downcast::<T>().ok()))
    }
}

impl<'a> Maybe<&'a (dyn Any + 'static)> {
    /// Narrows the borrowed payload to a concrete type; absent when the type
    /// differs.
    pub fn downcast_ref<T: Any>(self) -> Maybe<&'a T> {
        self.and_then(|value| Maybe(value.downcast_ref::<T>()))
    }
}

impl<P> Default for Maybe<P> {
    fn default() -> Self {
        Self(None)
    }
}

impl<P: fmt::Debug> fmt::Debug for Maybe<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<P: Hash> Hash for Maybe<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0 {
            Some(value) => value.hash(state),
            None => ABSENT_HASH.hash(state),
        }
    }
}

impl<P> PartialEq<Nothing> for Maybe<P> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_none()
    }
}

impl<P> PartialEq<Maybe<P>> for Nothing {
    fn eq(&self, other: &Maybe<P>) -> bool {
        other.is_none()
    }
}

impl<P> From<Nothing> for Maybe<P> {
    fn from(_: Nothing) -> Self {
        Self(None)
    }
}

impl<P: Nullable> From<P> for Maybe<P> {
    fn from(value: P) -> Self {
        Self(Some(value))
    }
}

impl<P: Nullable> IntoIterator for Maybe<P> {
    type Item = P;
    type IntoIter = std::option::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, P: Nullable> IntoIterator for &'a Maybe<P> {
    type Item = &'a P;
    type IntoIter = std::option::IntoIter<&'a P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Nullable> Optional<P> for Maybe<P> {
    fn has_value(&self) -> bool {
        Maybe::has_value(self)
    }

    fn as_opt(&self) -> Opt<&P> {
        Maybe::as_opt(self)
    }

    fn match_with<R>(self, on_absent: impl FnOnce() -> R, on_present: impl FnOnce(P) -> R) -> R {
        Maybe::match_with(self, on_absent, on_present)
    }

    fn filter(self, predicate: impl FnOnce(&P) -> bool) -> Self {
        Maybe::filter(self, predicate)
    }

    fn value(&self) -> Result<&P> {
        Maybe::value(self)
    }

    fn into_value(self) -> Result<P> {
        Maybe::into_value(self)
    }
}
