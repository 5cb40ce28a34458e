//! Formal verification rules for `add_numbers`.

use crate::add_numbers;

use cvlr::prelude::*;

/// Largest operand magnitude for which chained sums of three values
/// stay inside `i64`.
pub const SAFE_BOUND: i64 = i64::MAX / 4;

/// Macro to assume an operand lies in the safe range.
/// Safe range: -SAFE_BOUND <= x <= SAFE_BOUND
#[macro_export]
macro_rules! assume_safe_range {
    ($x:expr) => {
        cvlr::cvlr_assume!($x <= $crate::certora::SAFE_BOUND);
        cvlr::cvlr_assume!($x >= -$crate::certora::SAFE_BOUND);
    };
}

/// Verifies that `add_numbers` computes the sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    assume_safe_range!(x);
    assume_safe_range!(y);
    let result = add_numbers(x, y);
    cvlr_assert_eq!(result, x + y);
}

#[rule]
pub fn rule_add_is_commutative() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    assume_safe_range!(x);
    assume_safe_range!(y);
    cvlr_assert_eq!(add_numbers(x, y), add_numbers(y, x));
}

#[rule]
pub fn rule_add_is_associative() {
    let x: i64 = nondet();
    let y: i64 = nondet();
    let z: i64 = nondet();
    assume_safe_range!(x);
    assume_safe_range!(y);
    assume_safe_range!(z);
    let left = add_numbers(add_numbers(x, y), z);
    let right = add_numbers(x, add_numbers(y, z));
    cvlr_assert_eq!(left, right);
}

/// Zero is the identity element. Holds over the whole domain, no bound needed.
#[rule]
pub fn rule_add_has_identity() {
    let x: i64 = nondet();
    cvlr_assert_eq!(add_numbers(0, x), x);
}
