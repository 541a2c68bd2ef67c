//! Loose integer coercion vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tallylog_core::coerce::{coerce_str, coerce_value};

mod vector_loader;

#[test]
fn coerce_vectors() {
    let cases = vector_loader::load("coerce_cases.json");
    assert!(!cases.is_empty());

    for c in cases {
        assert_eq!(coerce_value(&c.input), c.expect, "vector={}", c.description);
    }
}

#[test]
fn store_strings_round_trip_through_coercion() {
    // The counter writes `i64::to_string` and reads it back through `coerce_str`.
    for n in [0_i64, 1, -1, 20, i64::MAX, i64::MIN] {
        assert_eq!(coerce_str(&n.to_string()), n);
    }
}
