use core::fmt;
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// Constants
// ============================================================================

/// 10^18, one ether in wei.
pub fn ether() -> BigInt {
    Unit::Ether.scale()
}

/// 10^9, one gwei in wei.
pub fn gwei() -> BigInt {
    Unit::Gwei.scale()
}

/// 2^256, the exclusive upper bound of a full-width word.
pub fn two_256() -> BigInt {
    BigInt::one() << 256
}

// ============================================================================
// Units
// ============================================================================

/// Denomination of an on-chain amount.
///
/// Every unit is a power of ten of the base unit (wei).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    #[default]
    Wei,
    Gwei,
    Ether,
}

impl Unit {
    /// Number of decimal places between this unit and wei.
    #[inline]
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Wei => 0,
            Self::Gwei => 9,
            Self::Ether => 18,
        }
    }

    /// The divisor that converts wei into this unit: 10^decimals.
    pub fn scale(self) -> BigInt {
        BigInt::from(10u8).pow(self.decimals())
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wei => "wei",
            Self::Gwei => "gwei",
            Self::Ether => "ether",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wei" => Ok(Self::Wei),
            "gwei" => Ok(Self::Gwei),
            "ether" | "eth" => Ok(Self::Ether),
            _ => Err(Error::InvalidFormat),
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

/// Splits an optional leading sign off `s`.
fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Converts a textual integer into a `BigInt`.
///
/// Accepts decimal (`"123"`, `"-42"`) and `0x`-prefixed hex (`"0xff"`, `"-0x10"`).
/// This is the one place where loosely typed script input becomes a `BigInt`;
/// primitives go through the `From` impls on `BigInt` instead.
///
/// # Errors
/// Returns `Error::InvalidFormat` for empty input, stray characters, embedded
/// separators or a fractional part.
pub fn parse_amount(s: &str) -> crate::Result<BigInt> {
    let (negative, body) = split_sign(s.trim());

    let (radix, digits) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, body),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidFormat);
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix).ok_or(Error::InvalidFormat)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parses a decimal string expressed in `unit` into wei.
///
/// Example: `parse_units("1.5", Unit::Gwei)` → `1_500_000_000`
///
/// # Errors
/// Returns `Error::InvalidFormat` if the string is not a plain decimal.
/// Returns `Error::PrecisionLoss` if it has more significant fractional
/// digits than the unit allows.
pub fn parse_units(s: &str, unit: Unit) -> crate::Result<BigInt> {
    let (negative, body) = split_sign(s.trim());

    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (body, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(Error::InvalidFormat);
    }
    if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidFormat);
    }

    let fraction = fraction.trim_end_matches('0');
    let decimals = unit.decimals() as usize;
    if fraction.len() > decimals {
        return Err(Error::PrecisionLoss);
    }

    // integer and fraction concatenated, then right-padded to the unit's scale
    let mut digits = String::with_capacity(integer.len() + decimals);
    digits.push_str(integer);
    digits.push_str(fraction);
    digits.extend(core::iter::repeat_n('0', decimals - fraction.len()));

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidFormat)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a wei amount in `unit` without losing precision.
///
/// Trailing fractional zeros are dropped: `1_500_000_000` wei in gwei is `"1.5"`.
pub fn format_units(amount: &BigInt, unit: Unit) -> String {
    let scale = unit.scale();
    let abs = amount.abs();
    let integer = &abs / &scale;
    let fraction = &abs % &scale;

    let sign = if amount.is_negative() { "-" } else { "" };
    if fraction.is_zero() {
        return format!("{sign}{integer}");
    }

    let digits = fraction.to_string();
    let leading = "0".repeat(unit.decimals() as usize - digits.len());
    format!("{sign}{integer}.{leading}{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_scales() {
        assert_eq!(Unit::Wei.scale(), BigInt::from(1));
        assert_eq!(gwei(), BigInt::from(1_000_000_000u64));
        assert_eq!(ether(), BigInt::from(1_000_000_000_000_000_000u64));
        assert_eq!(two_256().bits(), 257);
    }

    #[test]
    fn test_unit_names() {
        assert_eq!(Unit::Gwei.to_string(), "gwei");
        assert_eq!("ETH".parse::<Unit>(), Ok(Unit::Ether));
        assert_eq!("wei".parse::<Unit>(), Ok(Unit::Wei));
        assert_eq!("finney".parse::<Unit>(), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_parse_amount_decimal() {
        assert_eq!(parse_amount("123"), Ok(BigInt::from(123)));
        assert_eq!(parse_amount(" -42 "), Ok(BigInt::from(-42)));
        assert_eq!(parse_amount("+7"), Ok(BigInt::from(7)));
        assert_eq!(parse_amount("-0"), Ok(BigInt::zero()));
    }

    #[test]
    fn test_parse_amount_hex() {
        assert_eq!(parse_amount("0xff"), Ok(BigInt::from(255)));
        assert_eq!(parse_amount("-0X10"), Ok(BigInt::from(-16)));
        assert_eq!(
            parse_amount("0x10000000000000000000000000000000000000000000000000000000000000000"),
            Ok(two_256())
        );
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for input in ["", "-", "0x", "12a", "1.5", "1_000", "abc", "--1", "0xfg"] {
            assert_eq!(parse_amount(input), Err(Error::InvalidFormat), "input {input:?}");
        }
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1", Unit::Ether), Ok(ether()));
        assert_eq!(parse_units("1.5", Unit::Gwei), Ok(BigInt::from(1_500_000_000u64)));
        assert_eq!(parse_units(".5", Unit::Gwei), Ok(BigInt::from(500_000_000u64)));
        assert_eq!(parse_units("-2.", Unit::Gwei), Ok(BigInt::from(-2_000_000_000i64)));
        assert_eq!(parse_units("3.000", Unit::Wei), Ok(BigInt::from(3)));
    }

    #[test]
    fn test_parse_units_errors() {
        assert_eq!(parse_units("0.0000000001", Unit::Gwei), Err(Error::PrecisionLoss));
        assert_eq!(parse_units("1.5", Unit::Wei), Err(Error::PrecisionLoss));
        assert_eq!(parse_units(".", Unit::Ether), Err(Error::InvalidFormat));
        assert_eq!(parse_units("1e18", Unit::Ether), Err(Error::InvalidFormat));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(&ether(), Unit::Ether), "1");
        assert_eq!(format_units(&BigInt::from(1_500_000_000u64), Unit::Gwei), "1.5");
        assert_eq!(format_units(&BigInt::from(-1), Unit::Gwei), "-0.000000001");
        assert_eq!(format_units(&BigInt::zero(), Unit::Ether), "0");
        assert_eq!(format_units(&BigInt::from(42), Unit::Wei), "42");
    }

    #[test]
    fn test_units_roundtrip_samples() {
        for (text, unit) in [
            ("0.000000000000000001", Unit::Ether),
            ("123456.789", Unit::Ether),
            ("-0.25", Unit::Gwei),
            ("98765432109876543210", Unit::Wei),
        ] {
            let wei = parse_units(text, unit).unwrap();
            assert_eq!(format_units(&wei, unit), text);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unit_serde() {
        assert_eq!(serde_json::to_string(&Unit::Gwei).unwrap(), r#""gwei""#);
        assert_eq!(serde_json::from_str::<Unit>(r#""ether""#).unwrap(), Unit::Ether);
    }
}
