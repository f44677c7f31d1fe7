//! Type class traits implemented by [`Maybe`](crate::Maybe).
//!
//! - [`TypeConstructor`]: Generic Associated Type emulation of
//!   higher-kinded types
//! - [`Functor`]: mapping over the success value
//! - [`Monad`]: sequencing computations that may fail
//!
//! These traits let generic code treat a chain like any other functor or
//! monad; the inherent methods of `Maybe` remain the primary API.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Maybe;
//! use maybe_chain::typeclass::{Functor, Monad, TypeConstructor};
//!
//! fn double_all<M>(chain: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     chain.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::new(21)).resolve().unwrap(), 42);
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
