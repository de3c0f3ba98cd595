//! Big-integer helpers for smart-contract test and deploy scripts
//!
//! This library groups the numeric chores a contract test suite keeps
//! re-implementing:
//!
//! - **Random sampling** ([`random`]): uniform `BigInt` fixtures over
//!   `[0, 2^256)`, `[0, 2^255)`, `[0, 2^bits)` or any `[from, to)` range
//!   - Entropy: OS randomness by default, any `RngCore` via [`Sampler`]
//!   - Use cases: property-based fixtures, fuzzed deposit amounts
//!
//! - **Units** ([`amount`]): wei / gwei / ether scales and exact decimal
//!   conversion between them
//!
//! - **Magnitude formatting** ([`format`]): `4.56k`, `-7.89m`, `12.5%`
//!
//! - **ASCII rendering** ([`draw`]): fixed-width bars whose segments are
//!   proportional to their amounts, with no width lost to rounding
//!
//! ## Features
//!
//! - **Exact arithmetic**: floats only appear in the final display step
//! - **Fail fast**: precondition violations return [`Error`], nothing is clamped silently
//! - **Serde support** (`serde` feature): [`BarStyle`] and [`Unit`] can be loaded from config
//!
//! ## Example
//!
//! ```rust
//! use bn_utils::{draw_amounts, format_amount, parse_units, Unit};
//! use num_bigint::BigInt;
//!
//! let deposit = parse_units("4560", Unit::Ether).unwrap();
//! assert_eq!(format_amount(&deposit, None).unwrap(), "4.56k");
//!
//! let bar = draw_amounts(&[BigInt::from(1), BigInt::from(1), BigInt::from(2)]).unwrap();
//! assert_eq!(bar.len(), 102);
//! ```

pub mod amount;
pub mod compat;
pub mod draw;
pub mod format;
pub mod random;

pub use amount::{Unit, ether, format_units, gwei, parse_amount, parse_units, two_256};
pub use draw::{
    BarStyle, Maximum, Symbol, draw_amounts, draw_booleans, draw_percent, draw_symbols,
    print_symbol,
};
pub use format::{format_amount, format_count, format_percent, sum, to_percent};
pub use random::{
    Sampler, random_bit_length, random_element, random_full_width, random_half_width, random_hex,
    random_range,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: `from` must not exceed `to`")]
    InvalidRange,

    #[error("bit length {0} is not a positive multiple of 8")]
    UnalignedBits(usize),

    #[error("negative amount at index {0}")]
    NegativeAmount(usize),

    #[error("length mismatch: {values} values but {maxima} maxima")]
    LengthMismatch { values: usize, maxima: usize },

    #[error("empty sequence")]
    Empty,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid numeric string")]
    InvalidFormat,

    #[error("precision loss would occur")]
    PrecisionLoss,

    #[error("entropy source failure: {0}")]
    Entropy(String),
}

pub type Result<T> = core::result::Result<T, Error>;
