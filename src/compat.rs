//! Older names kept for scripts written against the first helper revisions.
//!
//! Everything here forwards to the canonical function named in the
//! deprecation note.

#![allow(deprecated)]

use num_bigint::BigInt;

use crate::{Maximum, format, random};

#[deprecated(note = "use `random_full_width`")]
pub fn random_bn256() -> crate::Result<BigInt> {
    random::random_full_width()
}

#[deprecated(note = "use `random_half_width`")]
pub fn random_bn255() -> crate::Result<BigInt> {
    random::random_half_width()
}

#[deprecated(note = "use `random_bit_length`")]
pub fn random_bits(bits: usize) -> crate::Result<BigInt> {
    random::random_bit_length(bits)
}

#[deprecated(note = "use `random_range`")]
pub fn random_bn(from: &BigInt, to: &BigInt) -> crate::Result<BigInt> {
    random::random_range(from, to)
}

#[deprecated(note = "use `sum`")]
pub fn sum_bn(values: &[BigInt]) -> BigInt {
    format::sum(values)
}

#[deprecated(note = "use `format_amount`")]
pub fn print_amt(amount: &BigInt, divisor: Option<&BigInt>) -> crate::Result<String> {
    format::format_amount(amount, divisor)
}

#[deprecated(note = "use `format_percent`")]
pub fn print_percent(percent: f64) -> String {
    format::format_percent(percent)
}

#[deprecated(note = "use `draw_booleans`")]
pub fn print_booleans(flags: &[bool]) -> String {
    crate::draw_booleans(flags)
}

#[deprecated(note = "use `draw_symbols`")]
pub fn print_symbols(values: &[BigInt], maximum: Maximum<'_>) -> crate::Result<String> {
    crate::draw_symbols(values, maximum)
}
