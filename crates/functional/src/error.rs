//! Error taxonomy shared by every wrapper in the crate.
//!
//! The algebra never retries and never invents values: it only classifies
//! failures and carries them. Three kinds of error exist:
//!
//! - [`Error::InvalidState`] - a value was read from the wrong side of a
//!   wrapper (an absent optional, a failed [`Try`](crate::Try), the error of a
//!   successful `Try`, the other variant of an [`Either`](crate::Either)).
//! - [`Error::Captured`] - an error or panic caught by the `Try` boundary,
//!   kept unaltered inside a [`CapturedError`].
//! - [`Error::PredicateRejected`] - produced by [`Try::filter`](crate::Try::filter).
//!
//! [`Error::IndexOutOfRange`] completes the set for positional access.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Result type for accessors that can hit an invalid state.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised or carried by the optional / fallible wrappers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Wrong-side access.
    #[error("invalid state: {message}")]
    InvalidState {
        /// What was attempted.
        message: Cow<'static, str>,
        /// The failure that made the access invalid, if any.
        #[source]
        cause: Option<Box<Error>>,
    },

    /// An error or panic captured by the `Try` boundary.
    #[error(transparent)]
    Captured(#[from] CapturedError),

    /// `Try::filter` rejected the held value.
    #[error("predicate does not hold for value {value}")]
    PredicateRejected {
        /// `Debug` rendering of the rejected value, or its type name when the
        /// value has no `Debug` impl.
        value: String,
    },

    /// Positional access outside `0..len`.
    #[error("index {index} is out of range for a container of {len} element(s)")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of held elements (0 or 1).
        len: usize,
    },
}

impl Error {
    /// Wrong-side access without an underlying cause.
    pub fn invalid_state(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidState {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrong-side access caused by an earlier failure.
    pub fn invalid_state_caused_by(message: impl Into<Cow<'static, str>>, cause: Error) -> Self {
        Self::InvalidState {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Captures an arbitrary error.
    pub fn captured<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Captured(CapturedError::new(error))
    }

    /// Captures a plain message as an error.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Captured(CapturedError::message(message))
    }

    /// Builds the rejection error for a value that failed a filter.
    pub fn predicate_rejected<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::PredicateRejected {
            value: format!("{value:?}"),
        }
    }

    /// Rejection error for a value that can only be described by its type.
    pub fn predicate_rejected_type<T: ?Sized>() -> Self {
        Self::PredicateRejected {
            value: format!("of type {}", std::any::type_name::<T>()),
        }
    }

    /// Converts a panic payload into a captured error.
    ///
    /// A payload that already is an [`Error`] (raised with
    /// `std::panic::panic_any`) is returned as is.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Error>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_owned()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "panic with a non-string payload".to_owned()
        };
        Self::Captured(CapturedError::panicked(message))
    }

    /// Returns `true` for [`Error::InvalidState`].
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Returns `true` for [`Error::Captured`].
    pub fn is_captured(&self) -> bool {
        matches!(self, Self::Captured(_))
    }

    /// Returns `true` for [`Error::PredicateRejected`].
    pub fn is_predicate_rejected(&self) -> bool {
        matches!(self, Self::PredicateRejected { .. })
    }

    /// Returns `true` when the error was captured from a panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Captured(captured) if captured.is_panic())
    }

    /// The failure behind an [`Error::InvalidState`], if one was recorded.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Self::InvalidState { cause, .. } => cause.as_deref(),
            _ => None,
        }
    }

    /// Follows [`cause`](Self::cause) links to the innermost error.
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Downcasts a captured error to its original type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Captured(captured) => captured.downcast_ref(),
            _ => None,
        }
    }
}

/// How a [`CapturedError`] entered the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureOrigin {
    /// Returned as `Err` from a guarded computation.
    Returned,
    /// Unwound out of a guarded computation as a panic.
    Panicked,
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

/// An error caught by the `Try` boundary, kept without alteration.
///
/// Clones share the original error. Two captured errors are equal only when
/// they hold the same original instance, mirroring identity semantics of
/// thrown errors: capturing the same message twice yields two distinct errors.
#[derive(Clone)]
pub struct CapturedError {
    inner: Arc<dyn std::error::Error + Send + Sync + 'static>,
    origin: CaptureOrigin,
}

impl CapturedError {
    /// Wraps an error returned by a guarded computation.
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
            origin: CaptureOrigin::Returned,
        }
    }

    /// Wraps an already boxed error.
    pub fn from_boxed(error: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
            origin: CaptureOrigin::Returned,
        }
    }

    /// Wraps a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    pub(crate) fn panicked(message: String) -> Self {
        Self {
            inner: Arc::new(Message(message)),
            origin: CaptureOrigin::Panicked,
        }
    }

    /// How the error was captured.
    pub fn origin(&self) -> CaptureOrigin {
        self.origin
    }

    /// Returns `true` when the error was captured from a panic.
    pub fn is_panic(&self) -> bool {
        self.origin == CaptureOrigin::Panicked
    }

    /// The original error.
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.inner
    }

    /// Downcasts the original error.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("origin", &self.origin)
            .field("inner", &self.inner)
            .finish()
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for CapturedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for CapturedError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for CapturedError {}

// =============================================================================
// Conversion into failures
// =============================================================================

/// Conversion of error values into the [`Error`] carried by a failed `Try`.
///
/// [`Error`] converts to itself, so failures flowing back into the algebra are
/// never wrapped twice. Foreign error types without an implementation can be
/// passed through [`Error::captured`].
pub trait IntoFailure {
    /// Convert into a failure payload.
    fn into_failure(self) -> Error;
}

impl IntoFailure for Error {
    fn into_failure(self) -> Error {
        self
    }
}

impl IntoFailure for CapturedError {
    fn into_failure(self) -> Error {
        Error::Captured(self)
    }
}

impl IntoFailure for String {
    fn into_failure(self) -> Error {
        Error::msg(self)
    }
}

impl IntoFailure for &'static str {
    fn into_failure(self) -> Error {
        Error::msg(self)
    }
}

impl IntoFailure for Box<dyn std::error::Error + Send + Sync + 'static> {
    fn into_failure(self) -> Error {
        Error::Captured(CapturedError::from_boxed(self))
    }
}

impl IntoFailure for std::convert::Infallible {
    fn into_failure(self) -> Error {
        match self {}
    }
}

macro_rules! captured_std_errors {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFailure for $ty {
                fn into_failure(self) -> Error {
                    Error::captured(self)
                }
            }
        )*
    };
}

captured_std_errors!(
    std::io::Error,
    fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::ParseBoolError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    std::char::ParseCharError,
);
