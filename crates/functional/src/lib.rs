//! # Nebula Functional
//!
//! Optional, fallible and union value types for the Nebula workflow engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use nebula_functional::prelude::*;
//!
//! fn timeout_ms(raw: Option<&str>) -> Try<u64> {
//!     Opt::from(raw)
//!         .into_try_or("timeout not configured")
//!         .try_map(str::parse::<u64>)
//!         .filter(|ms| *ms <= 60_000)
//! }
//!
//! assert_eq!(timeout_ms(Some("250")).value().unwrap(), &250);
//! assert!(timeout_ms(None).is_failure());
//! assert!(timeout_ms(Some("90000")).error().unwrap().is_predicate_rejected());
//! ```
//!
//! ## Types
//!
//! - [`Opt<T>`]: value-optional, any payload
//! - [`Maybe<P>`]: reference-optional over a [`Nullable`] pointer, absence
//!   stored in the pointer's null niche
//! - [`Try<T>`]: success value or captured [`Error`]; [`Try::attempt`] is the
//!   catch boundary for both `Err` returns and panics
//! - [`Either<L, R>`]: exactly one of two payloads
//!
//! Generic code targets the capability traits [`Optional`], [`Fallible`] and
//! [`Union`]. Conversions between the types live in [`convert`]; serde support
//! in [`codec`] (feature `serde`, on by default).
//!
//! ## Panics
//!
//! Panic capture needs `panic = "unwind"`. Under `panic = "abort"` a panic
//! inside the catch boundary terminates the process.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

pub mod attempt;
pub mod convert;
pub mod either;
pub mod error;
pub mod maybe;
pub mod nothing;
pub mod opt;
pub mod traits;

#[cfg(feature = "serde")]
pub mod codec;

// === Public API Exports ===

pub use attempt::Try;
pub use either::Either;
pub use error::{CaptureOrigin, CapturedError, Error, IntoFailure, Result};
pub use maybe::{Maybe, Nullable};
pub use nothing::Nothing;
pub use opt::Opt;
pub use traits::{ABSENT_HASH, Fallible, Optional, Union};

#[cfg(feature = "serde")]
pub use codec::{Absentable, WrapperKind};

/// Everything needed to write code against the wrappers.
pub mod prelude {
    pub use super::{
        Either, Error, Fallible, IntoFailure, Maybe, Nothing, Nullable, Opt, Optional, Result, Try,
        Union,
    };
}
