//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type that
//! names "the same constructor applied to another type".
//!
//! # Example
//!
//! ```rust
//! use maybe_chain::Maybe;
//! use maybe_chain::typeclass::TypeConstructor;
//!
//! type Retyped = <Maybe<i32> as TypeConstructor>::WithType<String>;
//! let chain: Retyped = Maybe::new(String::from("retyped"));
//! assert!(chain.is_success());
//! ```

use crate::maybe::Maybe;

/// A type constructor applied to an inner type.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
