use core::borrow::Borrow;

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{Error, ether, gwei};

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;
const TRILLION: u64 = 1_000_000_000_000;

/// Basis points in one whole: percents are computed to two decimals.
const BASIS: u32 = 10_000;

/// Display-only conversion; huge values saturate to infinity.
#[inline]
fn lossy(value: &BigInt) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

// ============================================================================
// Amounts
// ============================================================================

/// Compact representation of an amount: `123`, `4.56k`, `-7.89m`, `1.5b`, `2t`.
///
/// Without a `divisor`, amounts whose magnitude exceeds one gwei are shown in
/// ether and everything else in wei. Below one thousand (after scaling) the
/// value is printed as a plain number; it only carries a fractional part when
/// the divisor is at least a million. Above that, the quotient is shown in
/// thousands, millions, billions or trillions with up to three decimals.
///
/// The tier numerals go through `f64` and may lose precision past ~15
/// significant digits. They print in plain positional notation, so a tiny
/// fraction of ether reads `0.000000001`, never `1e-9`.
///
/// Zero always formats as `"0"`, whatever the divisor.
///
/// # Errors
/// Returns `Error::DivisionByZero` if `divisor` is zero and `amount` is not.
pub fn format_amount(amount: &BigInt, divisor: Option<&BigInt>) -> crate::Result<String> {
    if amount.is_zero() {
        return Ok("0".into());
    }

    let abs = amount.abs();
    let divisor = match divisor {
        Some(divisor) => divisor.clone(),
        None if abs > gwei() => ether(),
        None => BigInt::one(),
    };
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let quotient = &abs / &divisor;
    let million = BigInt::from(MILLION);

    let body = if quotient < BigInt::from(THOUSAND) {
        if divisor < million {
            quotient.to_string()
        } else {
            (lossy(&(&abs / &million)) / lossy(&(&divisor / &million))).to_string()
        }
    } else if quotient < million {
        format!("{}k", lossy(&quotient) / THOUSAND as f64)
    } else if quotient < BigInt::from(BILLION) {
        format!("{}m", lossy(&(&quotient / THOUSAND)) / THOUSAND as f64)
    } else if quotient < BigInt::from(TRILLION) {
        format!("{}b", lossy(&(&quotient / MILLION)) / THOUSAND as f64)
    } else {
        format!("{}t", lossy(&(&quotient / BILLION)) / THOUSAND as f64)
    };

    Ok(if amount.is_negative() { format!("-{body}") } else { body })
}

/// Exact sum of `values`; zero for an empty sequence.
pub fn sum<I>(values: I) -> BigInt
where
    I: IntoIterator,
    I::Item: Borrow<BigInt>,
{
    values
        .into_iter()
        .fold(BigInt::zero(), |acc, value| acc + value.borrow())
}

// ============================================================================
// Percentage Calculations
// ============================================================================

/// `a / b * 100`, truncated toward zero at two decimals.
///
/// Example: `to_percent(2, 3)` → `66.66`
///
/// # Errors
/// Returns `Error::DivisionByZero` if `b` is zero.
pub fn to_percent(a: &BigInt, b: &BigInt) -> crate::Result<f64> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let basis_points = a * BASIS / b;
    Ok(lossy(&basis_points) / 100.0)
}

/// Two-decimal percent string: `14.00%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}

// ============================================================================
// Plain Numbers
// ============================================================================

/// Compact representation of a plain count: `999`, `1.5k`, `2.35M`, `3G`.
///
/// Suffixed values are rounded to two decimals.
pub fn format_count(n: f64) -> String {
    if n < THOUSAND as f64 {
        return n.to_string();
    }
    let (value, suffix) = if n < MILLION as f64 {
        (n / THOUSAND as f64, "k")
    } else if n < BILLION as f64 {
        (n / MILLION as f64, "M")
    } else {
        (n / BILLION as f64, "G")
    };
    format!("{}{suffix}", (value * 100.0).round() / 100.0)
}
