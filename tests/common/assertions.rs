//! Assertion utilities for testing.
//!
//! Helpers for floating-point comparisons and for the temperature summary
//! records returned by the API.

#![allow(dead_code)]

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a summary record is ordered: min <= avg <= max.
///
/// Records of nulls are accepted as-is.
pub fn assert_stats_ordered(record: &Value) {
    let min = record["Temperature Min"].as_f64();
    let avg = record["Temperature Avg"].as_f64();
    let max = record["Temperature Max"].as_f64();

    match (min, avg, max) {
        (Some(min), Some(avg), Some(max)) => assert!(
            min <= avg && avg <= max,
            "Summary out of order: min = {}, avg = {}, max = {}",
            min,
            avg,
            max
        ),
        (None, None, None) => {}
        _ => panic!("Summary is partially null: {}", record),
    }
}

/// Assert that a summary record has only null fields
pub fn assert_stats_null(record: &Value) {
    for key in ["Temperature Min", "Temperature Avg", "Temperature Max"] {
        assert!(
            record[key].is_null(),
            "Expected {} to be null in {}",
            key,
            record
        );
    }
}
