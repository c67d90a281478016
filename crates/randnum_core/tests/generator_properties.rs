//! Integration tests for the generator's observable contract.
//!
//! Covers the length and range properties over arbitrary valid inputs,
//! seeded reproducibility, and the error messages callers match on.

use proptest::prelude::*;
use randnum_core::rng::{SeededRng, SharedRng};
use randnum_core::sampling::{Argument, RandomNumberGenerator};
use randnum_core::types::ErrorKind;

fn generator(seed: u64) -> RandomNumberGenerator<SeededRng> {
    RandomNumberGenerator::new(SeededRng::from_seed(seed))
}

/// Bounds with `min <= max`, drawn from a wide but finite range.
fn bounds_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1e12..1e12_f64, -1e12..1e12_f64).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_length_is_exactly_n(
        n in 1_i64..500,
        (min, max) in bounds_strategy(),
        seed in any::<u64>()
    ) {
        let samples = generator(seed).generate(n, min, max).unwrap();
        prop_assert_eq!(samples.len(), n as usize);
    }

    #[test]
    fn test_every_value_within_bounds(
        n in 1_i64..500,
        (min, max) in bounds_strategy(),
        seed in any::<u64>()
    ) {
        let samples = generator(seed).generate(n, min, max).unwrap();
        for &value in &samples {
            prop_assert!(
                min <= value && value <= max,
                "{} outside [{}, {}]", value, min, max
            );
        }
    }

    #[test]
    fn test_inverted_bounds_always_rejected(
        n in 1_i64..100,
        (min, max) in bounds_strategy()
    ) {
        prop_assume!(min < max);
        let err = generator(0).generate(n, max, min).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_non_positive_count_always_rejected(n in i64::MIN..=0) {
        let err = generator(0).generate(n, 1.0, 10.0).unwrap_err();
        prop_assert!(err.to_string().contains("positive"));
    }
}

#[test]
fn test_negative_count_message() {
    let err = generator(1).generate(-5, 1.0, 10.0).unwrap_err();
    assert!(err.to_string().contains("positive"));
}

#[test]
fn test_inverted_bounds_message() {
    let err = generator(1).generate(5, 10.0, 1.0).unwrap_err();
    assert!(err
        .to_string()
        .contains("minimum value must be less than or equal to the maximum value"));
}

#[test]
fn test_non_numeric_count_message() {
    let err = generator(1)
        .generate_args(&Argument::from("five"), &Argument::from(1), &Argument::from(10))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("numeric values"));
}

#[test]
fn test_equal_bounds_yield_constant_values() {
    let samples = generator(1).generate(5, 50.0, 50.0).unwrap();
    assert_eq!(samples.len(), 5);
    assert!(samples.iter().all(|&v| v == 50.0));
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let first = generator(2024).generate(100, -1.0, 1.0).unwrap();
    let second = generator(2024).generate(100, -1.0, 1.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_shared_stream_continues_across_generators() {
    let shared = SharedRng::from_seed(11);
    let first = RandomNumberGenerator::new(shared.clone())
        .generate(3, 0.0, 1.0)
        .unwrap();
    let second = RandomNumberGenerator::new(shared)
        .generate(3, 0.0, 1.0)
        .unwrap();

    let whole = generator(11).generate(6, 0.0, 1.0).unwrap();
    let joined: Vec<f64> = first.into_iter().chain(second).collect();
    assert_eq!(joined, whole.into_values());
}

#[test]
fn test_sample_mean_is_near_midpoint() {
    let samples = generator(7).generate(100_000, 0.0, 10.0).unwrap();
    let summary = samples.summary().unwrap();

    approx::assert_abs_diff_eq!(summary.mean, 5.0, epsilon = 0.05);
    assert!(summary.min >= 0.0 && summary.max <= 10.0);
}
