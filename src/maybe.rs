//! The `Maybe` container - a short-circuiting chain of transformations.
//!
//! A [`Maybe<T>`] holds either a success value of type `T` or a captured
//! [`Error`]. Transformations are applied one after another with
//! [`bind`](Maybe::bind) and its variants; the first failing transformation
//! switches the chain to the failure state and every later transformation is
//! skipped. The chain ends with [`resolve`](Maybe::resolve) or
//! [`resolve_as`](Maybe::resolve_as), which hand the value or the error back
//! to the caller.
//!
//! # State Machine
//!
//! ```text
//!            bind (Ok)           bind (any)
//!          +----------+        +----------+
//!          v          |        v          |
//!  new -> Success ----+---> Failure ------+
//!                bind (Err / panic)
//! ```
//!
//! `resolve*` is not a transition: it consumes the container and returns a
//! plain `Result`. Success and failure are an explicit tag independent of
//! the payload, so a success value that happens to be an error type is
//! never mistaken for a failed chain.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//!
//! let result = Maybe::new("Hello, World")
//!     .map(str::to_uppercase)
//!     .map(|text| text.split(',').map(str::to_owned).collect::<Vec<_>>())
//!     .map(|parts| parts.join(","))
//!     .resolve_as::<String>();
//! assert_eq!(result.unwrap(), "HELLO, WORLD");
//!
//! let error = Maybe::new(10)
//!     .bind(|x: i32| x.checked_div(0).ok_or("division by zero"))
//!     .map(|x| x + 1)
//!     .resolve()
//!     .unwrap_err();
//! assert_eq!(error.message(), "division by zero");
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::coerce::Coerce;
use crate::error::{BoxError, Error};

#[cfg(feature = "tracing")]
macro_rules! trace_failure {
    ($error:expr, $stage:literal) => {
        tracing::trace!(
            stage = $stage,
            kind = %$error.kind(),
            error = %$error,
            "maybe chain captured a failure"
        );
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_failure {
    ($error:expr, $stage:literal) => {
        let _ = &$error;
    };
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// A container that chains transformations and stops at the first failure.
///
/// `Maybe<T>` starts in the success state with [`Maybe::new`]. Each chaining
/// method consumes the container and returns a new one; a container is never
/// modified in place. Clone a container to keep an earlier step of a chain.
///
/// # Examples
///
/// ```rust
/// use maybe_chain::Maybe;
///
/// fn add(x: i32, y: i32) -> i32 {
///     x + y
/// }
///
/// let value = Maybe::new(5)
///     .map_with(5, add)
///     .map(|x| add(x, 5))
///     .map(f64::from)
///     .map(f64::sqrt)
///     .map_with(4.0, f64::powf)
///     .resolve_as::<f64>()
///     .unwrap();
/// assert!((value - 225.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use = "a Maybe does nothing until it is resolved"]
pub struct Maybe<T> {
    state: State<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in the success state.
    ///
    /// Any value is accepted, including one whose type is an error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let chain = Maybe::new(42);
    /// assert!(chain.is_success());
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// Alias for [`Maybe::new`].
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::new(value)
    }

    /// Starts a chain that has already failed with `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Error, ErrorKind, Maybe};
    ///
    /// let chain: Maybe<i32> = Maybe::failure(Error::new(ErrorKind::Transform, "not found"));
    /// assert_eq!(chain.resolve().unwrap_err().message(), "not found");
    /// ```
    #[inline]
    pub const fn failure(error: Error) -> Self {
        Self {
            state: State::Failure(error),
        }
    }

    /// Starts a chain from a `Result`: `Ok` becomes a success, `Err` is
    /// captured as a transformation failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert!(Maybe::from_result("12".parse::<u8>()).is_success());
    /// assert!(Maybe::from_result("1200".parse::<u8>()).is_failure());
    /// ```
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => Self::new(value),
            Err(error) => {
                let error = Error::transform(error);
                trace_failure!(error, "construct");
                Self::failure(error)
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if the chain holds a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the chain has failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Returns a reference to the captured error, if any.
    #[inline]
    pub const fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Binding
    // =========================================================================

    /// Applies a fallible transformation to the success value.
    ///
    /// On success the returned value replaces the current one; it may have a
    /// different type. An `Err` is captured and the chain switches to the
    /// failure state. On a failed chain `transform` is never called and the
    /// original error is carried forward unchanged.
    ///
    /// The error type can be anything convertible into a [`BoxError`]:
    /// any `std::error::Error + Send + Sync`, `String`, `&str`, or an
    /// [`Error`] (which is kept as-is).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let parsed = Maybe::new("21").bind(|text| text.parse::<i32>()).map(|n| n * 2);
    /// assert_eq!(parsed.resolve().unwrap(), 42);
    ///
    /// let mut calls = 0;
    /// let failed = Maybe::new("x")
    ///     .bind(|text| text.parse::<i32>())
    ///     .map(|n| {
    ///         calls += 1;
    ///         n
    ///     });
    /// assert!(failed.is_failure());
    /// assert_eq!(calls, 0);
    /// ```
    pub fn bind<U, E, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        match self.state {
            State::Success(value) => match transform(value) {
                Ok(next) => Maybe::new(next),
                Err(error) => {
                    let error = Error::transform(error);
                    trace_failure!(error, "bind");
                    Maybe::failure(error)
                }
            },
            State::Failure(error) => Maybe::failure(error),
        }
    }

    /// Applies a fallible transformation that takes extra arguments.
    ///
    /// `arguments` is forwarded unchanged as the second parameter of
    /// `transform`; pass a tuple for several arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// fn checked_scale(value: u8, (numerator, denominator): (u8, u8)) -> Result<u8, String> {
    ///     value
    ///         .checked_mul(numerator)
    ///         .and_then(|scaled| scaled.checked_div(denominator))
    ///         .ok_or_else(|| format!("cannot scale {value}"))
    /// }
    ///
    /// assert_eq!(Maybe::new(10).bind_with((3, 2), checked_scale).resolve().unwrap(), 15);
    /// assert!(Maybe::new(100).bind_with((3, 2), checked_scale).is_failure());
    /// ```
    pub fn bind_with<A, U, E, F>(self, arguments: A, transform: F) -> Maybe<U>
    where
        F: FnOnce(T, A) -> Result<U, E>,
        E: Into<BoxError>,
    {
        self.bind(|value| transform(value, arguments))
    }

    /// Applies an infallible transformation to the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let length = Maybe::new("Another string").map(str::len);
    /// assert_eq!(length.resolve().unwrap(), 14);
    /// ```
    pub fn map<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Maybe::new(transform(value)),
            State::Failure(error) => Maybe::failure(error),
        }
    }

    /// Applies an infallible transformation that takes extra arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let powered = Maybe::new(3.0_f64).map_with(2.0, f64::powf);
    /// assert_eq!(powered.resolve().unwrap(), 9.0);
    /// ```
    pub fn map_with<A, U, F>(self, arguments: A, transform: F) -> Maybe<U>
    where
        F: FnOnce(T, A) -> U,
    {
        self.map(|value| transform(value, arguments))
    }

    /// Applies a transformation and captures a panic as a failure.
    ///
    /// Ordinary Rust functions report some failures by panicking (integer
    /// division by zero, out-of-bounds indexing). `bind_catching` runs
    /// `transform` under [`std::panic::catch_unwind`] and turns such a panic
    /// into an [`ErrorKind::Panic`](crate::ErrorKind::Panic) failure. The
    /// process-wide panic hook still runs, so the panic message is printed
    /// unless the hook has been replaced. Panics are only caught when the
    /// crate is built with `panic = "unwind"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let items = vec![1, 2, 3];
    /// let error = Maybe::new(7_usize)
    ///     .bind_catching(|index| items[index])
    ///     .resolve()
    ///     .unwrap_err();
    /// assert!(error.is_panic());
    /// ```
    pub fn bind_catching<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => {
                // The value moves into the closure and is never observed after an unwind.
                match panic::catch_unwind(AssertUnwindSafe(move || transform(value))) {
                    Ok(next) => Maybe::new(next),
                    Err(payload) => {
                        let error = Error::panic(payload.as_ref());
                        trace_failure!(error, "bind_catching");
                        Maybe::failure(error)
                    }
                }
            }
            State::Failure(error) => Maybe::failure(error),
        }
    }

    /// Applies a transformation that itself returns a `Maybe` and flattens
    /// the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// fn reciprocal(value: f64) -> Maybe<f64> {
    ///     Maybe::new(value).bind(|x| if x == 0.0 { Err("zero has no reciprocal") } else { Ok(1.0 / x) })
    /// }
    ///
    /// assert_eq!(Maybe::new(4.0).and_then(reciprocal).resolve().unwrap(), 0.25);
    /// assert!(Maybe::new(0.0).and_then(reciprocal).is_failure());
    /// ```
    pub fn and_then<U, F>(self, transform: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.state {
            State::Success(value) => transform(value),
            State::Failure(error) => Maybe::failure(error),
        }
    }

    /// Calls `inspector` with a reference to the success value and returns
    /// the chain unchanged.
    pub fn inspect<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            inspector(value);
        }
        self
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Ends the chain without coercion.
    ///
    /// Returns the success value as-is, whatever its type, or the captured
    /// error.
    ///
    /// # Errors
    ///
    /// Returns the error captured by the first failing transformation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::new(vec![1, 2]).resolve().unwrap(), vec![1, 2]);
    /// ```
    pub fn resolve(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }

    /// Ends the chain, coercing the success value into `U`.
    ///
    /// The original value is dropped when coercion fails; the result is
    /// either the coerced value or an error, never both.
    ///
    /// # Errors
    ///
    /// Returns the captured error of a failed chain, or an
    /// [`ErrorKind::Coercion`](crate::ErrorKind::Coercion) error when the
    /// value cannot be represented as `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// assert_eq!(Maybe::new("17").resolve_as::<u32>().unwrap(), 17);
    /// assert!(Maybe::new("hello").resolve_as::<u32>().unwrap_err().is_coercion());
    /// ```
    pub fn resolve_as<U>(self) -> Result<U, Error>
    where
        U: Coerce<T>,
    {
        self.resolve().and_then(|value| {
            U::coerce(value).inspect_err(|error| {
                trace_failure!(error, "resolve_as");
            })
        })
    }

    /// Ends the chain, converting the success value with `convert`.
    ///
    /// An error returned by `convert` is reported as a coercion failure.
    ///
    /// # Errors
    ///
    /// Returns the captured error of a failed chain, or a coercion error
    /// wrapping the error of `convert`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    /// use std::net::Ipv4Addr;
    ///
    /// let address = Maybe::new("127.0.0.1").resolve_with(str::parse::<Ipv4Addr>);
    /// assert_eq!(address.unwrap(), Ipv4Addr::LOCALHOST);
    /// ```
    pub fn resolve_with<U, E, F>(self, convert: F) -> Result<U, Error>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<BoxError>,
    {
        self.resolve().and_then(|value| {
            convert(value).map_err(|reason| {
                let error = Error::coercion::<T, U, _>(reason);
                trace_failure!(error, "resolve_with");
                error
            })
        })
    }

    /// Ends the chain as a `(value, error)` pair without coercion.
    ///
    /// Exactly one side of the pair is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let (value, error) = Maybe::new(3).into_pair();
    /// assert_eq!(value, Some(3));
    /// assert!(error.is_none());
    /// ```
    pub fn into_pair(self) -> (Option<T>, Option<Error>) {
        split(self.resolve())
    }

    /// Ends the chain as a `(value, error)` pair, coercing the success value
    /// into `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    ///
    /// let (value, error) = Maybe::new("hello").resolve_pair::<i64>();
    /// assert!(value.is_none());
    /// assert!(error.unwrap().is_coercion());
    /// ```
    pub fn resolve_pair<U>(self) -> (Option<U>, Option<Error>)
    where
        U: Coerce<T>,
    {
        split(self.resolve_as())
    }
}

fn split<V>(result: Result<V, Error>) -> (Option<V>, Option<Error>) {
    match result {
        Ok(value) => (Some(value), None),
        Err(error) => (None, Some(error)),
    }
}

impl<T, E> From<Result<T, E>> for Maybe<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Maybe<T>> for Result<T, Error> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.resolve()
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
