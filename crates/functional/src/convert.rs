//! Conversions between the wrapper types and their std counterparts.
//!
//! Every edge that keeps all information is a `From` impl. The one lossy edge
//! (fallible to optional) is a named method, [`Try::into_opt`] and
//! [`Try::into_maybe`], because it drops the error.
//!
//! | From | To | Rule |
//! |------|----|------|
//! | `Opt<P>` / `Maybe<P>` | each other | presence preserved |
//! | `Opt<T>` / `Maybe<Box<T>>` | each other | boxing, named methods |
//! | `Option<T>` | `Opt<T>`, `Maybe<P>` | identity, both ways |
//! | `Try<T>` | `Either<Error, T>` | success is `Right`, both ways |
//! | `Result<T, E>` | `Try<T>` | `Err` becomes a failure |
//! | `Either<L, R>` | `Result<R, L>` | `Right` is `Ok`, both ways |
//! | `Opt<T>` / `Maybe<P>` | `Try<T>` | absent needs a caller-supplied error |

use crate::attempt::Try;
use crate::either::Either;
use crate::error::{Error, IntoFailure};
use crate::maybe::{Maybe, Nullable};
use crate::opt::Opt;

// ============================================================================
// std interop
// ============================================================================

impl<T> From<Option<T>> for Opt<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    fn from(value: Opt<T>) -> Self {
        match value {
            Opt::Some(value) => Some(value),
            Opt::None => None,
        }
    }
}

impl<P: Nullable> From<Option<P>> for Maybe<P> {
    fn from(value: Option<P>) -> Self {
        Self::from_native(value)
    }
}

impl<P: Nullable> From<Maybe<P>> for Option<P> {
    fn from(value: Maybe<P>) -> Self {
        value.into_native()
    }
}

impl<T, E: IntoFailure> From<Result<T, E>> for Try<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Error> {
    fn from(value: Try<T>) -> Self {
        value.into_result()
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

// ============================================================================
// Between wrappers
// ============================================================================

impl<P: Nullable> From<Opt<P>> for Maybe<P> {
    fn from(value: Opt<P>) -> Self {
        Self::from_native(value.into())
    }
}

impl<P: Nullable> From<Maybe<P>> for Opt<P> {
    fn from(value: Maybe<P>) -> Self {
        value.into_native().into()
    }
}

impl<T> From<Try<T>> for Either<Error, T> {
    fn from(value: Try<T>) -> Self {
        value.into_result().into()
    }
}

impl<T> From<Either<Error, T>> for Try<T> {
    fn from(value: Either<Error, T>) -> Self {
        Self::from_result(value.into())
    }
}

impl<P: Nullable + PartialEq> PartialEq<Maybe<P>> for Opt<P> {
    fn eq(&self, other: &Maybe<P>) -> bool {
        self.as_option() == other.as_native().as_ref()
    }
}

impl<P: Nullable + PartialEq> PartialEq<Opt<P>> for Maybe<P> {
    fn eq(&self, other: &Opt<P>) -> bool {
        other == self
    }
}

impl<T> Opt<T> {
    /// Boxes the payload into the reference-optional form.
    pub fn into_boxed_maybe(self) -> Maybe<Box<T>> {
        self.map(Box::new).into()
    }

    /// A present value becomes a success; absence becomes a failure built by
    /// `factory`.
    pub fn into_try_or_else<E: IntoFailure>(self, factory: impl FnOnce() -> E) -> Try<T> {
        match self {
            Self::Some(value) => Try::success(value),
            Self::None => Try::failure(factory()),
        }
    }

    /// Like [`into_try_or_else`](Self::into_try_or_else) with a ready error.
    pub fn into_try_or(self, error: impl IntoFailure) -> Try<T> {
        self.into_try_or_else(|| error)
    }
}

impl<P: Nullable> Opt<Maybe<P>> {
    /// Collapses an optional reference-optional; either absence wins.
    pub fn flatten(self) -> Maybe<P> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::NONE,
        }
    }
}

impl<T> Maybe<Box<T>> {
    /// Unboxes the payload into the value-optional form; the inverse of
    /// [`Opt::into_boxed_maybe`].
    pub fn into_unboxed_opt(self) -> Opt<T> {
        match self.into_native() {
            Some(boxed) => Opt::Some(*boxed),
            None => Opt::None,
        }
    }
}

impl<P: Nullable> Maybe<P> {
    /// A present value becomes a success; absence becomes a failure built by
    /// `factory`.
    pub fn into_try_or_else<E: IntoFailure>(self, factory: impl FnOnce() -> E) -> Try<P> {
        match self.into_native() {
            Some(value) => Try::success(value),
            None => Try::failure(factory()),
        }
    }

    /// Like [`into_try_or_else`](Self::into_try_or_else) with a ready error.
    pub fn into_try_or(self, error: impl IntoFailure) -> Try<P> {
        self.into_try_or_else(|| error)
    }
}

impl<T> Try<T> {
    /// Keeps a success value and **drops the error** of a failure.
    ///
    /// This is the only lossy conversion; reach for
    /// [`into_either`](Self::into_either) when the error matters.
    pub fn into_opt(self) -> Opt<T> {
        self.into_result().ok().into()
    }

    /// Keeps a success value and **drops the error** of a failure; see
    /// [`into_opt`](Self::into_opt).
    pub fn into_maybe(self) -> Maybe<T>
    where
        T: Nullable,
    {
        self.into_result().ok().into()
    }

    /// Success is `Right`, failure is `Left`.
    pub fn into_either(self) -> Either<Error, T> {
        self.into()
    }
}

impl<T> Either<Error, T> {
    /// `Right` is a success, `Left` a failure.
    pub fn into_try(self) -> Try<T> {
        self.into()
    }
}
