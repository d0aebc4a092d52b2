//! Serde support for the absentable wrappers.
//!
//! A present value (or a successful [`Try`]) is written in its payload's own
//! form; absence and failure are written as `null`. The error text of a failure
//! is not persisted, so a failure reads back as absent.
//!
//! A payload whose own form is `null` cannot be told apart from absence: `()`,
//! `Option<T>` holding `None` and a nested absent wrapper all read back as
//! absent. `Opt::some(())` round-trips to `Opt::none()`.
//!
//! The free functions [`serialize`] and [`deserialize`] work for any
//! [`Absentable`] wrapper and can be used on a field directly:
//!
//! ```rust
//! use nebula_functional::Opt;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Retry {
//!     #[serde(with = "nebula_functional::codec")]
//!     max_attempts: Opt<u32>,
//! }
//!
//! let json = serde_json::to_string(&Retry { max_attempts: Opt::none() }).unwrap();
//! assert_eq!(json, r#"{"max_attempts":null}"#);
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attempt::Try;
use crate::error::Error;
use crate::maybe::{Maybe, Nullable};
use crate::opt::Opt;

/// Which wrapper a serialized value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// [`Opt`], the value-optional.
    Opt,
    /// [`Maybe`], the reference-optional.
    Maybe,
    /// [`Try`], the fallible result.
    Try,
}

impl WrapperKind {
    /// Type name used in log fields.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opt => "Opt",
            Self::Maybe => "Maybe",
            Self::Try => "Try",
        }
    }
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A wrapper whose serialized form is its payload or `null`.
pub trait Absentable: Sized {
    /// The value written when present.
    type Payload;

    /// Tag used in diagnostics.
    const KIND: WrapperKind;

    /// Borrows the payload to write, `None` for `null`.
    fn present(&self) -> Option<&Self::Payload>;

    /// Rebuilds the wrapper from a read payload, `None` having been `null`.
    fn from_present(payload: Option<Self::Payload>) -> Self;
}

/// Writes `wrapper` as its payload, or `null` when absent.
pub fn serialize<W, S>(wrapper: &W, serializer: S) -> Result<S::Ok, S::Error>
where
    W: Absentable,
    W::Payload: Serialize,
    S: Serializer,
{
    match wrapper.present() {
        Some(payload) => serializer.serialize_some(payload),
        None => serializer.serialize_none(),
    }
}

/// Reads a payload, or `null` as absent.
pub fn deserialize<'de, W, D>(deserializer: D) -> Result<W, D::Error>
where
    W: Absentable,
    W::Payload: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let payload = Option::<W::Payload>::deserialize(deserializer)?;
    if payload.is_none() {
        tracing::trace!(kind = %W::KIND, "read absent value");
    }
    Ok(W::from_present(payload))
}

// ============================================================================
// Wrapper impls
// ============================================================================

impl<T> Absentable for Opt<T> {
    type Payload = T;
    const KIND: WrapperKind = WrapperKind::Opt;

    fn present(&self) -> Option<&T> {
        self.as_option()
    }

    fn from_present(payload: Option<T>) -> Self {
        payload.into()
    }
}

impl<P: Nullable> Absentable for Maybe<P> {
    type Payload = P;
    const KIND: WrapperKind = WrapperKind::Maybe;

    fn present(&self) -> Option<&P> {
        self.as_native().as_ref()
    }

    fn from_present(payload: Option<P>) -> Self {
        Self::from_native(payload)
    }
}

impl<T> Absentable for Try<T> {
    type Payload = T;
    const KIND: WrapperKind = WrapperKind::Try;

    fn present(&self) -> Option<&T> {
        self.as_result().as_ref().ok()
    }

    fn from_present(payload: Option<T>) -> Self {
        match payload {
            Some(value) => Self::success(value),
            None => Self::failure(Error::invalid_state("absent in serialized form")),
        }
    }
}

impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self, serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer)
    }
}

impl<P: Nullable + Serialize> Serialize for Maybe<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self, serializer)
    }
}

impl<'de, P: Nullable + Deserialize<'de>> Deserialize<'de> for Maybe<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer)
    }
}

impl<T: Serialize> Serialize for Try<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self, serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Try<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn present_values_use_the_payload_form() {
        assert_eq!(serde_json::to_value(Opt::some(42)).unwrap(), json!(42));
        assert_eq!(serde_json::to_value(Maybe::some(Box::new("x"))).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(Try::success([1, 2])).unwrap(), json!([1, 2]));
    }

    #[test]
    fn absence_and_failure_are_null() {
        assert_eq!(serde_json::to_value(Opt::<u8>::none()).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(Maybe::<Box<u8>>::none()).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(Try::<u8>::failure("lost")).unwrap(), json!(null));
    }

    #[test]
    fn null_reads_back_as_a_failed_try() {
        let t: Try<u8> = serde_json::from_value(json!(null)).unwrap();
        let error = t.error().unwrap();
        assert!(error.is_invalid_state());
        assert_eq!(error.to_string(), "invalid state: absent in serialized form");
    }

    #[test]
    fn null_payloads_collapse_to_absent() {
        let json = serde_json::to_string(&Opt::some(())).unwrap();
        assert_eq!(json, "null");
        assert_eq!(serde_json::from_str::<Opt<()>>(&json).unwrap(), Opt::none());

        let nested = serde_json::to_string(&Opt::some(Opt::<u8>::none())).unwrap();
        assert_eq!(serde_json::from_str::<Opt<Opt<u8>>>(&nested).unwrap(), Opt::none());
    }

    #[test]
    fn kinds_are_named() {
        assert_eq!(<Opt<u8> as Absentable>::KIND.to_string(), "Opt");
        assert_eq!(<Maybe<Box<u8>> as Absentable>::KIND.name(), "Maybe");
        assert_eq!(<Try<u8> as Absentable>::KIND, WrapperKind::Try);
    }
}
