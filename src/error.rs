//! Error types captured by a [`Maybe`](crate::Maybe) chain.
//!
//! Every failure a chain can observe is represented by a single opaque
//! [`Error`]. Its [`ErrorKind`] records where the failure came from:
//!
//! - [`ErrorKind::Transform`]: a bound transformation returned an error
//! - [`ErrorKind::Panic`]: a transformation run with
//!   [`bind_catching`](crate::Maybe::bind_catching) panicked
//! - [`ErrorKind::Coercion`]: the success value could not be converted into
//!   the type requested at resolution time
//!
//! The original error, when there is one, stays reachable through
//! [`std::error::Error::source`] and [`Error::downcast_ref`].
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::{Error, ErrorKind};
//!
//! let error = Error::transform("disk full");
//! assert_eq!(error.kind(), ErrorKind::Transform);
//! assert_eq!(error.to_string(), "disk full");
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A boxed, thread-safe error: the form every transformation error is
/// converted into before it is captured.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// The origin of a captured [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A bound transformation returned an error.
    Transform,
    /// A bound transformation panicked.
    Panic,
    /// The success value could not be converted into the requested type.
    Coercion,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transform => "transformation failure",
            Self::Panic => "transformation panic",
            Self::Coercion => "coercion failure",
        };
        formatter.write_str(name)
    }
}

/// The failure carried by a [`Maybe`](crate::Maybe) chain.
///
/// An `Error` pairs the triggering condition ([`ErrorKind`] plus the
/// original error, if any) with a human-readable message. It is cheap to
/// clone: the original error is shared behind an [`Arc`].
///
/// Two errors compare equal when their kind and message are equal; the
/// original error is not compared.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::{ErrorKind, Maybe};
///
/// let error = Maybe::new("hello").resolve_as::<i32>().unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Coercion);
/// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    source: Option<SharedError>,
}

impl Error {
    /// Creates an error with the given kind and message and no source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Error, ErrorKind};
    ///
    /// let error = Error::new(ErrorKind::Transform, "no such user");
    /// assert_eq!(error.message(), "no such user");
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Captures the error returned by a transformation.
    ///
    /// Anything convertible into a [`BoxError`] is accepted, including
    /// `String` and `&str`. An `Error` passed in is returned unchanged, so
    /// a transformation that forwards the failure of an inner chain keeps
    /// its original kind and message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Error, ErrorKind};
    ///
    /// let parse = "x".parse::<i32>().unwrap_err();
    /// let error = Error::transform(parse);
    /// assert_eq!(error.kind(), ErrorKind::Transform);
    /// assert_eq!(error.message(), "invalid digit found in string");
    ///
    /// let coercion = Error::new(ErrorKind::Coercion, "inner");
    /// assert_eq!(Error::transform(coercion.clone()), coercion);
    /// ```
    pub fn transform<E: Into<BoxError>>(error: E) -> Self {
        let boxed: BoxError = error.into();
        match boxed.downcast::<Self>() {
            Ok(error) => *error,
            Err(other) => Self {
                kind: ErrorKind::Transform,
                message: other.to_string(),
                source: Some(SharedError::from(other)),
            },
        }
    }

    /// Captures the payload of a panic raised by a transformation.
    pub(crate) fn panic(payload: &(dyn Any + Send)) -> Self {
        let description = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("non-string panic payload"));

        Self {
            kind: ErrorKind::Panic,
            message: format!("transformation panicked: {description}"),
            source: Some(Arc::new(PanicError { description })),
        }
    }

    /// Creates a coercion error for a failed conversion from `S` into `T`.
    ///
    /// The message names both types and the reason the conversion failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Error, ErrorKind};
    ///
    /// let error = Error::coercion::<&str, u8, _>("value too large");
    /// assert_eq!(error.kind(), ErrorKind::Coercion);
    /// assert_eq!(error.message(), "cannot coerce &str into u8: value too large");
    /// ```
    pub fn coercion<S: ?Sized, T: ?Sized, R: Into<BoxError>>(reason: R) -> Self {
        let reason: BoxError = reason.into();
        Self {
            kind: ErrorKind::Coercion,
            message: format!(
                "cannot coerce {} into {}: {reason}",
                short_type_name::<S>(),
                short_type_name::<T>()
            ),
            source: Some(SharedError::from(reason)),
        }
    }

    /// Returns the origin of this error.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable description of this error.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if a transformation returned this error.
    #[inline]
    #[must_use]
    pub const fn is_transform(&self) -> bool {
        matches!(self.kind, ErrorKind::Transform)
    }

    /// Returns `true` if this error was captured from a panic.
    #[inline]
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self.kind, ErrorKind::Panic)
    }

    /// Returns `true` if this error came from a failed coercion.
    #[inline]
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(self.kind, ErrorKind::Coercion)
    }

    /// Attempts to downcast the original error to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let error = Maybe::new("4x2")
    ///     .bind(|text| text.parse::<u32>())
    ///     .resolve()
    ///     .unwrap_err();
    /// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
    /// assert!(error.downcast_ref::<std::fmt::Error>().is_none());
    /// ```
    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref()?.downcast_ref::<E>()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn StdError + 'static))
    }
}

/// The source of an [`ErrorKind::Panic`] error: the panic payload text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct PanicError {
    /// The panic message, or a placeholder for non-string payloads.
    pub description: String,
}

/// Reasons a numeric conversion can fail during coercion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// The value is NaN or infinite and has no integer counterpart.
    #[error("{value} is not a finite number")]
    NonFinite {
        /// The offending value.
        value: f64,
    },
    /// The value does not fit in the target type.
    #[error("{value} is outside the range of {target}")]
    OutOfRange {
        /// The offending value, in display form.
        value: String,
        /// The name of the target type.
        target: &'static str,
    },
}

/// Returns the name of `T` with module paths stripped
/// (`alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`).
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut characters = full.chars().peekable();

    while let Some(character) = characters.next() {
        if character == ':' && characters.peek() == Some(&':') {
            characters.next();
            segment.clear();
        } else if character.is_alphanumeric() || character == '_' {
            segment.push(character);
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(character);
        }
    }
    short.push_str(&segment);
    short
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorRepr {
    kind: ErrorKind,
    message: String,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorRepr {
            kind: self.kind,
            message: self.message.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Error {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ErrorRepr { kind, message } = ErrorRepr::deserialize(deserializer)?;
        Ok(Self::new(kind, message))
    }
}

static_assertions::assert_impl_all!(Error: Send, Sync, Clone, StdError);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn transform_from_str_keeps_message() {
        let error = Error::transform("boom");
        assert_eq!(error.kind(), ErrorKind::Transform);
        assert_eq!(error.message(), "boom");
        assert!(error.source().is_some());
    }

    #[rstest]
    fn transform_from_string_keeps_message() {
        let error = Error::transform(String::from("owned boom"));
        assert_eq!(error.to_string(), "owned boom");
    }

    #[rstest]
    fn transform_does_not_rewrap_existing_error() {
        let original = Error::coercion::<str, i32, _>("bad digits");
        let captured = Error::transform(original.clone());
        assert_eq!(captured, original);
        assert!(captured.is_coercion());
    }

    #[rstest]
    fn transform_exposes_source_for_downcast() {
        let parse_error = "abc".parse::<i64>().unwrap_err();
        let error = Error::transform(parse_error.clone());
        assert_eq!(
            error.downcast_ref::<std::num::ParseIntError>(),
            Some(&parse_error)
        );
    }

    #[rstest]
    fn new_has_no_source() {
        let error = Error::new(ErrorKind::Panic, "manual");
        assert!(error.source().is_none());
        assert!(error.downcast_ref::<PanicError>().is_none());
    }

    #[rstest]
    fn panic_with_static_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("attempt to divide by zero");
        let error = Error::panic(payload.as_ref());
        assert!(error.is_panic());
        assert_eq!(
            error.message(),
            "transformation panicked: attempt to divide by zero"
        );
        assert_eq!(
            error.downcast_ref::<PanicError>().map(|panic| panic.description.as_str()),
            Some("attempt to divide by zero")
        );
    }

    #[rstest]
    fn panic_with_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("index out of bounds"));
        let error = Error::panic(payload.as_ref());
        assert_eq!(
            error.message(),
            "transformation panicked: index out of bounds"
        );
    }

    #[rstest]
    fn panic_with_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        let error = Error::panic(payload.as_ref());
        assert_eq!(
            error.message(),
            "transformation panicked: non-string panic payload"
        );
    }

    #[rstest]
    fn coercion_message_names_both_types() {
        let error = Error::coercion::<String, Vec<u8>, _>("nope");
        assert_eq!(error.message(), "cannot coerce String into Vec<u8>: nope");
    }

    #[rstest]
    fn equality_ignores_source() {
        let with_source = Error::transform("same");
        let without_source = Error::new(ErrorKind::Transform, "same");
        assert_eq!(with_source, without_source);
        assert_ne!(with_source, Error::new(ErrorKind::Panic, "same"));
    }

    #[rstest]
    #[case(ErrorKind::Transform, "transformation failure")]
    #[case(ErrorKind::Panic, "transformation panic")]
    #[case(ErrorKind::Coercion, "coercion failure")]
    fn error_kind_display(#[case] kind: ErrorKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    fn short_type_name_strips_paths() {
        assert_eq!(short_type_name::<i32>(), "i32");
        assert_eq!(short_type_name::<&str>(), "&str");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
        assert_eq!(
            short_type_name::<Option<std::num::ParseIntError>>(),
            "Option<ParseIntError>"
        );
    }

    #[rstest]
    fn conversion_error_display() {
        let non_finite = ConversionError::NonFinite { value: f64::NAN };
        assert_eq!(non_finite.to_string(), "NaN is not a finite number");

        let out_of_range = ConversionError::OutOfRange {
            value: String::from("300"),
            target: "u8",
        };
        assert_eq!(out_of_range.to_string(), "300 is outside the range of u8");
    }
}
