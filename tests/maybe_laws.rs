//! Property-based tests for the behavior of `Maybe` chains.
//!
//! - **Success chain**: a chain of succeeding transformations equals their
//!   plain composition
//! - **Short-circuit**: after the first failure no transformation runs and
//!   the first error is the one reported
//! - **Immutability**: deriving a new chain never changes how the original
//!   resolves
//! - **Coercion**: `resolve_as` agrees with the underlying conversion
//! - **No coercion**: `resolve` hands back the value untouched

use maybe_chain::{Coerce, Error, ErrorKind, Maybe};
use proptest::prelude::*;
use std::cell::Cell;

/// One step of a generated chain: `Ok` steps add their value, `Err` steps fail.
fn apply_steps(start: i64, steps: &[Result<i64, String>], calls: &Cell<usize>) -> Maybe<i64> {
    steps.iter().fold(Maybe::new(start), |chain, step| {
        chain.bind(|value| {
            calls.set(calls.get() + 1);
            step.clone().map(|delta| value.wrapping_add(delta))
        })
    })
}

fn step_strategy() -> impl Strategy<Value = Result<i64, String>> {
    prop_oneof![
        4 => any::<i64>().prop_map(Ok),
        1 => "[a-z]{1,8}".prop_map(Err),
    ]
}

// =============================================================================
// Success Chains
// =============================================================================

proptest! {
    #[test]
    fn prop_success_chain_equals_composition(
        start in any::<i64>(),
        deltas in prop::collection::vec(any::<i64>(), 0..20),
    ) {
        let chain = deltas
            .iter()
            .fold(Maybe::new(start), |chain, delta| chain.map(|value| value.wrapping_add(*delta)));
        let expected = deltas.iter().fold(start, |value, delta| value.wrapping_add(*delta));

        prop_assert_eq!(chain.into_pair(), (Some(expected), None));
    }

    #[test]
    fn prop_bind_ok_equals_map(value in any::<i32>()) {
        let bound = Maybe::new(value).bind(|x| Ok::<_, String>(x.wrapping_mul(3)));
        let mapped = Maybe::new(value).map(|x| x.wrapping_mul(3));
        prop_assert_eq!(bound, mapped);
    }
}

// =============================================================================
// Short-Circuit
// =============================================================================

proptest! {
    #[test]
    fn prop_first_failure_wins(
        start in any::<i64>(),
        steps in prop::collection::vec(step_strategy(), 0..20),
    ) {
        let calls = Cell::new(0);
        let result = apply_steps(start, &steps, &calls).resolve();

        match steps.iter().position(Result::is_err) {
            Some(index) => {
                let expected = steps[index].clone().unwrap_err();
                let error = result.unwrap_err();
                prop_assert_eq!(error.kind(), ErrorKind::Transform);
                prop_assert_eq!(error.message(), expected.as_str());
                prop_assert_eq!(calls.get(), index + 1);
            }
            None => {
                let expected = steps
                    .iter()
                    .fold(start, |value, step| value.wrapping_add(step.clone().unwrap()));
                prop_assert_eq!(result.unwrap(), expected);
                prop_assert_eq!(calls.get(), steps.len());
            }
        }
    }

    #[test]
    fn prop_failed_chain_absorbs_any_number_of_binds(
        message in "[a-z ]{1,16}",
        extra in 0_usize..32,
    ) {
        let calls = Cell::new(0);
        let mut chain: Maybe<u32> = Maybe::failure(Error::new(ErrorKind::Transform, message.clone()));
        for _ in 0..extra {
            chain = chain.bind(|value| {
                calls.set(calls.get() + 1);
                Ok::<_, String>(value)
            });
        }

        prop_assert_eq!(calls.get(), 0);
        let error = chain.resolve().unwrap_err();
        prop_assert_eq!(error.message(), message.as_str());
    }
}

// =============================================================================
// Immutability
// =============================================================================

proptest! {
    #[test]
    fn prop_deriving_does_not_change_original(value in any::<String>()) {
        let original = Maybe::new(value.clone());
        let _derived = original.clone().bind(|_| Err::<String, _>("derived failure"));

        let first = original.clone().resolve();
        let second = original.resolve();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.unwrap(), value);
    }

    #[test]
    fn prop_failed_original_resolves_identically(message in "[a-z]{1,8}") {
        let original: Maybe<i8> = Maybe::new(1).bind(|_| Err::<i8, _>(message.clone()));
        prop_assert_eq!(original.clone().into_pair(), original.into_pair());
    }
}

// =============================================================================
// Coercion
// =============================================================================

proptest! {
    #[test]
    fn prop_resolve_as_matches_try_from(value in any::<i64>()) {
        let coerced = Maybe::new(value).resolve_as::<i16>();
        match i16::try_from(value) {
            Ok(expected) => prop_assert_eq!(coerced.unwrap(), expected),
            Err(_) => prop_assert_eq!(coerced.unwrap_err().kind(), ErrorKind::Coercion),
        }
    }

    #[test]
    fn prop_numeric_text_round_trips(value in any::<i32>()) {
        let text = value.to_string();
        prop_assert_eq!(Maybe::new(text).resolve_as::<i32>().unwrap(), value);
    }

    #[test]
    fn prop_alphabetic_text_never_coerces_to_integer(text in "[a-zA-Z]{1,12}") {
        let (value, error) = Maybe::new(text).resolve_pair::<i64>();
        prop_assert!(value.is_none());
        prop_assert!(error.unwrap().is_coercion());
    }

    #[test]
    fn prop_resolve_as_agrees_with_coerce(value in any::<f64>()) {
        let via_chain = Maybe::new(value).resolve_as::<i32>().ok();
        let direct = <i32 as Coerce<f64>>::coerce(value).ok();
        prop_assert_eq!(via_chain, direct);
    }

    #[test]
    fn prop_pair_has_exactly_one_side(value in any::<f64>()) {
        let (coerced, error) = Maybe::new(value).resolve_pair::<u8>();
        prop_assert!(coerced.is_some() != error.is_some());
    }
}

// =============================================================================
// No Coercion
// =============================================================================

proptest! {
    #[test]
    fn prop_resolve_returns_value_untouched(value in any::<Vec<u8>>()) {
        prop_assert_eq!(Maybe::new(value.clone()).resolve().unwrap(), value);
    }

    #[test]
    fn prop_resolve_never_parses_text(text in "[0-9]{1,6}") {
        let resolved: String = Maybe::new(text.clone()).resolve().unwrap();
        prop_assert_eq!(resolved, text);
    }
}
