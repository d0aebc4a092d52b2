//! Sum of two payload types.

use std::future::Future;

use crate::error::{Error, Result};
use crate::opt::Opt;
use crate::traits::Union;

/// Exactly one of a left `L` or a right `R`.
///
/// By convention the right side is the "expected" one, so
/// [`and_then_right`](Self::and_then_right) and the `Result` conversions treat
/// left as the error side.
///
/// # Examples
///
/// ```rust
/// use nebula_functional::Either;
///
/// let parsed: Either<String, u32> = match "12".parse::<u32>() {
///     Ok(n) => Either::Right(n),
///     Err(e) => Either::Left(e.to_string()),
/// };
///
/// assert_eq!(parsed.map_right(|n| n * 2), Either::Right(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Either<L, R> {
    /// The left payload.
    Left(L),
    /// The right payload.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for the left variant.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for the right variant.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Borrows the left payload; the right variant is [`Error::InvalidState`].
    pub fn left(&self) -> Result<&L> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(Error::invalid_state("not a left value")),
        }
    }

    /// Borrows the right payload; the left variant is [`Error::InvalidState`].
    pub fn right(&self) -> Result<&R> {
        match self {
            Self::Left(_) => Err(Error::invalid_state("not a right value")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Takes the left payload; the right variant is [`Error::InvalidState`].
    pub fn into_left(self) -> Result<L> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(Error::invalid_state("not a left value")),
        }
    }

    /// Takes the right payload; the left variant is [`Error::InvalidState`].
    pub fn into_right(self) -> Result<R> {
        match self {
            Self::Left(_) => Err(Error::invalid_state("not a right value")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Borrows the left payload, if selected.
    pub const fn left_opt(&self) -> Opt<&L> {
        match self {
            Self::Left(value) => Opt::Some(value),
            Self::Right(_) => Opt::None,
        }
    }

    /// Borrows the right payload, if selected.
    pub const fn right_opt(&self) -> Opt<&R> {
        match self {
            Self::Left(_) => Opt::None,
            Self::Right(value) => Opt::Some(value),
        }
    }

    /// Takes the left payload, if selected.
    pub fn into_left_opt(self) -> Opt<L> {
        match self {
            Self::Left(value) => Opt::Some(value),
            Self::Right(_) => Opt::None,
        }
    }

    /// Takes the right payload, if selected.
    pub fn into_right_opt(self) -> Opt<R> {
        match self {
            Self::Left(_) => Opt::None,
            Self::Right(value) => Opt::Some(value),
        }
    }

    /// Converts `&Either<L, R>` into `Either<&L, &R>`.
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Dispatches on the tag: exactly one branch runs.
    pub fn match_with<X>(self, on_left: impl FnOnce(L) -> X, on_right: impl FnOnce(R) -> X) -> X {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Runs the action matching the tag.
    pub fn for_each(self, on_left: impl FnOnce(L), on_right: impl FnOnce(R)) {
        self.match_with(on_left, on_right);
    }

    /// Maps the left payload; a right value passes through.
    pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right payload; a left value passes through.
    pub fn map_right<M>(self, f: impl FnOnce(R) -> M) -> Either<L, M> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Maps whichever side is selected.
    pub fn bimap<A, B>(
        self,
        on_left: impl FnOnce(L) -> A,
        on_right: impl FnOnce(R) -> B,
    ) -> Either<A, B> {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Continues from a left payload; a right passes through.
    pub fn and_then_left<M>(self, f: impl FnOnce(L) -> Either<M, R>) -> Either<M, R> {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Continues from a right payload; a left passes through.
    pub fn and_then_right<M>(self, f: impl FnOnce(R) -> Either<L, M>) -> Either<L, M> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Async [`match_with`](Self::match_with): awaits the selected branch only.
    pub async fn match_async<X, FL, FR>(
        self,
        on_left: impl FnOnce(L) -> FL,
        on_right: impl FnOnce(R) -> FR,
    ) -> X
    where
        FL: Future<Output = X>,
        FR: Future<Output = X>,
    {
        match self {
            Self::Left(value) => on_left(value).await,
            Self::Right(value) => on_right(value).await,
        }
    }

    /// Async [`for_each`](Self::for_each).
    pub async fn for_each_async<FL, FR>(
        self,
        on_left: impl FnOnce(L) -> FL,
        on_right: impl FnOnce(R) -> FR,
    )
    where
        FL: Future<Output = ()>,
        FR: Future<Output = ()>,
    {
        self.match_async(on_left, on_right).await;
    }
}

impl<T> Either<T, T> {
    /// The payload, whichever side holds it.
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L, R> Union<L, R> for Either<L, R> {
    fn is_left(&self) -> bool {
        Either::is_left(self)
    }

    fn left_opt(&self) -> Opt<&L> {
        Either::left_opt(self)
    }

    fn right_opt(&self) -> Opt<&R> {
        Either::right_opt(self)
    }

    fn match_with<X>(self, on_left: impl FnOnce(L) -> X, on_right: impl FnOnce(R) -> X) -> X {
        Either::match_with(self, on_left, on_right)
    }
}
