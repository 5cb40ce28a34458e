#[cfg(feature = "certora")]
pub mod certora;

/// Adds two numbers together.
/// Returns the sum of a and b. Overflow follows the `+` operator on `i64`:
/// a panic in debug builds, wrapping in release builds.
#[must_use]
#[inline]
pub const fn add_numbers(a: i64, b: i64) -> i64 {
    a + b
}
