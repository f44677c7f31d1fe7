//! Resolution-time type coercion.
//!
//! [`Coerce`] is the conversion used by
//! [`Maybe::resolve_as`](crate::Maybe::resolve_as): it turns the success
//! value of a chain into the type the caller asks for, or reports why it
//! could not.
//!
//! # Provided conversions
//!
//! | From | To | Behavior |
//! |---|---|---|
//! | integer | integer | checked with `TryFrom`, out-of-range fails |
//! | integer | `f32`, `f64` | numeric cast, may round |
//! | float | float | widening is exact, narrowing rounds |
//! | float | integer | truncates toward zero; NaN, infinities and out-of-range values fail |
//! | `bool` | integer | `true` is `1`, `false` is `0` |
//! | integer | `bool` | non-zero is `true` |
//! | `String`, `&str` | integer, float, `bool`, `char` | parsed after trimming whitespace |
//! | integer, float, `bool`, `char`, `&str`, `String` | `String` | display form |
//! | `Vec<T>` | `Vec<U>` | element-wise, the first failure wins |
//!
//! Each of the primitive types above, `String`, and a `Vec` of any of them
//! also coerces into itself without change. Other types need their own
//! [`Coerce`] implementation.
//!
//! # Examples
//!
//! ```rust
//! use maybe_chain::Coerce;
//!
//! assert_eq!(i64::coerce(" 42 ").unwrap(), 42);
//! assert_eq!(f64::coerce(7_u8).unwrap(), 7.0);
//! assert_eq!(u8::coerce(2.9_f64).unwrap(), 2);
//! assert!(u8::coerce(300_i32).is_err());
//! assert_eq!(String::coerce(true).unwrap(), "true");
//! ```
//!
//! Implement [`Coerce`] for your own types to make them a target of
//! `resolve_as`:
//!
//! ```rust
//! use maybe_chain::{Coerce, Error, Maybe};
//!
//! #[derive(Debug, PartialEq)]
//! struct Celsius(f64);
//!
//! impl Coerce<f64> for Celsius {
//!     fn coerce(value: f64) -> Result<Self, Error> {
//!         if value < -273.15 {
//!             Err(Error::coercion::<f64, Self, _>("below absolute zero"))
//!         } else {
//!             Ok(Self(value))
//!         }
//!     }
//! }
//!
//! assert_eq!(Maybe::new(21.5).resolve_as::<Celsius>().unwrap(), Celsius(21.5));
//! assert!(Maybe::new(-300.0).resolve_as::<Celsius>().is_err());
//! ```

use crate::error::{ConversionError, Error};

/// Fallible conversion of a value of type `T` into `Self`.
///
/// This is the counterpart of calling a type as a conversion constructor:
/// `i32::coerce("12")` plays the role of "construct an integer from a
/// string". Failures are reported as [`ErrorKind::Coercion`] errors.
///
/// [`ErrorKind::Coercion`]: crate::ErrorKind::Coercion
pub trait Coerce<T>: Sized {
    /// Converts `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns a coercion [`Error`] when `value` has no representation
    /// in `Self`.
    fn coerce(value: T) -> Result<Self, Error>;
}

// =============================================================================
// Integer Conversions
// =============================================================================

macro_rules! integer_coercions {
    (@into $source:ty => $($target:ty),*) => {
        $(
            impl Coerce<$source> for $target {
                #[inline]
                fn coerce(value: $source) -> Result<Self, Error> {
                    <$target>::try_from(value).map_err(Error::coercion::<$source, $target, _>)
                }
            }
        )*
    };
    ($($source:ty),* $(,)?) => {
        $(
            integer_coercions!(
                @into $source =>
                i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
            );

            impl Coerce<$source> for f32 {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn coerce(value: $source) -> Result<Self, Error> {
                    Ok(value as Self)
                }
            }

            impl Coerce<$source> for f64 {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn coerce(value: $source) -> Result<Self, Error> {
                    Ok(value as Self)
                }
            }

            impl Coerce<$source> for bool {
                #[inline]
                fn coerce(value: $source) -> Result<Self, Error> {
                    Ok(value != 0)
                }
            }

            impl Coerce<bool> for $source {
                #[inline]
                fn coerce(value: bool) -> Result<Self, Error> {
                    Ok(Self::from(value))
                }
            }
        )*
    };
}

integer_coercions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// =============================================================================
// Floating-Point Conversions
// =============================================================================

macro_rules! float_to_integer_coercions {
    ($float:ty => $($target:ty),* $(,)?) => {
        $(
            impl Coerce<$float> for $target {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss
                )]
                fn coerce(value: $float) -> Result<Self, Error> {
                    if !value.is_finite() {
                        return Err(Error::coercion::<$float, $target, _>(
                            ConversionError::NonFinite { value: f64::from(value) },
                        ));
                    }

                    // Exclusive upper bound 2^(bits) or 2^(bits - 1), exact in binary floating point.
                    let signed = <$target>::MIN != 0;
                    let upper = <$float>::powi(2.0, (<$target>::BITS - u32::from(signed)) as i32);
                    let lower = if signed { -upper } else { 0.0 };

                    let truncated = value.trunc();
                    if truncated < lower || truncated >= upper {
                        return Err(Error::coercion::<$float, $target, _>(
                            ConversionError::OutOfRange {
                                value: value.to_string(),
                                target: stringify!($target),
                            },
                        ));
                    }
                    Ok(truncated as $target)
                }
            }
        )*
    };
}

float_to_integer_coercions!(f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_to_integer_coercions!(f64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Coerce<Self> for f32 {
    #[inline]
    fn coerce(value: Self) -> Result<Self, Error> {
        Ok(value)
    }
}

impl Coerce<Self> for f64 {
    #[inline]
    fn coerce(value: Self) -> Result<Self, Error> {
        Ok(value)
    }
}

impl Coerce<f32> for f64 {
    #[inline]
    fn coerce(value: f32) -> Result<Self, Error> {
        Ok(Self::from(value))
    }
}

impl Coerce<f64> for f32 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn coerce(value: f64) -> Result<Self, Error> {
        Ok(value as Self)
    }
}

// =============================================================================
// Identity Conversions
// =============================================================================

impl Coerce<Self> for bool {
    #[inline]
    fn coerce(value: Self) -> Result<Self, Error> {
        Ok(value)
    }
}

impl Coerce<Self> for char {
    #[inline]
    fn coerce(value: Self) -> Result<Self, Error> {
        Ok(value)
    }
}

impl Coerce<Self> for String {
    #[inline]
    fn coerce(value: Self) -> Result<Self, Error> {
        Ok(value)
    }
}

// =============================================================================
// Text Conversions
// =============================================================================

macro_rules! parse_coercions {
    ($($target:ty),* $(,)?) => {
        $(
            impl Coerce<&str> for $target {
                fn coerce(value: &str) -> Result<Self, Error> {
                    value
                        .trim()
                        .parse::<$target>()
                        .map_err(Error::coercion::<&str, $target, _>)
                }
            }

            impl Coerce<String> for $target {
                fn coerce(value: String) -> Result<Self, Error> {
                    value
                        .trim()
                        .parse::<$target>()
                        .map_err(Error::coercion::<String, $target, _>)
                }
            }
        )*
    };
}

parse_coercions!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

macro_rules! display_coercions {
    ($($source:ty),* $(,)?) => {
        $(
            impl Coerce<$source> for String {
                #[inline]
                fn coerce(value: $source) -> Result<Self, Error> {
                    Ok(value.to_string())
                }
            }
        )*
    };
}

display_coercions!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl Coerce<&str> for String {
    #[inline]
    fn coerce(value: &str) -> Result<Self, Error> {
        Ok(value.to_owned())
    }
}

// =============================================================================
// Collection Conversions
// =============================================================================

impl<T, U> Coerce<Vec<T>> for Vec<U>
where
    U: Coerce<T>,
{
    fn coerce(value: Vec<T>) -> Result<Self, Error> {
        value.into_iter().map(U::coerce).collect()
    }
}
