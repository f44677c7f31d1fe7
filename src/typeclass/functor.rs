//! Functor type class - mapping over a container's value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//! use maybe_chain::typeclass::Functor;
//!
//! let chain = Maybe::new(5).fmap(|n| n.to_string());
//! assert_eq!(chain.resolve().unwrap(), "5");
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their
/// contents while keeping their structure.
///
/// For [`Maybe`], the structure is the success/failure tag: mapping a failed
/// chain leaves the failure untouched and never calls the function.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_chain::Maybe;
    /// use maybe_chain::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::new(5).replace("replaced").resolve().unwrap(), "replaced");
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}
