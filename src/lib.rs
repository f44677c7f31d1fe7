//! # maybe-chain
//!
//! A short-circuiting container that chains transformations over a value and
//! defers error inspection to the caller.
//!
//! ## Overview
//!
//! - [`Maybe`]: holds either a success value or a captured [`Error`]
//! - [`Maybe::bind`], [`Maybe::map`] and friends: apply a transformation,
//!   stopping at the first failure
//! - [`Maybe::resolve`] and [`Maybe::resolve_as`]: end the chain, optionally
//!   coercing the value into another type through [`Coerce`]
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` and `Monad` implementations for `Maybe` (default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Error`
//! - `tracing`: `trace`-level events whenever a chain captures a failure
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_chain::prelude::*;
//!
//! let total = Maybe::new((1..=10).collect::<Vec<u32>>())
//!     .map(|values| values.into_iter().map(f64::from).map(f64::sqrt))
//!     .map(|roots| roots.sum::<f64>())
//!     .resolve_as::<f64>();
//! assert!(total.is_ok());
//!
//! let (value, error) = Maybe::new("hello").resolve_pair::<i32>();
//! assert!(value.is_none());
//! assert_eq!(error.map(|error| error.kind()), Some(ErrorKind::Coercion));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use maybe_chain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::coerce::Coerce;
    pub use crate::error::{Error, ErrorKind};
    pub use crate::maybe::Maybe;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod coerce;
pub mod error;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use coerce::Coerce;
pub use error::{BoxError, ConversionError, Error, ErrorKind, PanicError};
pub use maybe::Maybe;
