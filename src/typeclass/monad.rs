//! Monad type class - sequencing computations that may fail.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//! use maybe_chain::typeclass::Monad;
//!
//! fn halve(n: i32) -> Maybe<i32> {
//!     Maybe::new(n).bind(|n| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") })
//! }
//!
//! assert_eq!(Monad::flat_map(Maybe::new(8), halve).flat_map(halve).resolve().unwrap(), 2);
//! assert!(Monad::flat_map(Maybe::new(6), halve).flat_map(halve).is_failure());
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of dependent
/// computations.
pub trait Monad: Functor {
    /// Lifts a plain value into the monad.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function returning a new monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::{Error, ErrorKind, Maybe};
    /// use maybe_chain::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::new(1).then(Maybe::new("next")).resolve().unwrap(), "next");
    ///
    /// let failed: Maybe<i32> = Maybe::failure(Error::new(ErrorKind::Transform, "stop"));
    /// assert!(failed.then(Maybe::new("next")).is_failure());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::new(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}
