//! Fixed-width ASCII pictures of amounts for console logs.
//!
//! ```text
//! [..|.........|................|..........|...||...............|.....]
//! [............................................................|.......................................] 60.00%
//! ```

use core::fmt;
use core::iter::repeat_n;

use log::debug;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, format_percent, sum};

// ============================================================================
// Style
// ============================================================================

/// Width and characters of a rendered bar.
///
/// Width counts the columns between the enclosing brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarStyle {
    pub width: usize,
    pub fill: char,
    pub delimiter: char,
}

impl BarStyle {
    pub const WIDTH: usize = 100;

    pub const DEFAULT: Self = Self {
        width: Self::WIDTH,
        fill: '.',
        delimiter: '|',
    };

    fn bracket(&self, interior: impl Iterator<Item = char>) -> String {
        let mut bar = String::with_capacity(self.width + 2);
        bar.push('[');
        bar.extend(interior);
        bar.push(']');
        bar
    }

    /// Draws `amounts` as segments proportional to their share of the total.
    ///
    /// Segments are separated by one delimiter each and the interior is
    /// always exactly `width` columns. Rounding loss is carried from one
    /// segment into the next, so the fill columns add up to
    /// `width - (amounts.len() - 1)` with nothing dropped.
    ///
    /// Degenerate inputs: with `width` or more delimiters the bar is all
    /// delimiters; with a single amount or a zero total it is all fill.
    ///
    /// # Errors
    /// Returns `Error::NegativeAmount` with the index of the first negative amount.
    pub fn draw_amounts(&self, amounts: &[BigInt]) -> crate::Result<String> {
        if let Some(index) = amounts.iter().position(|amount| amount.is_negative()) {
            return Err(Error::NegativeAmount(index));
        }

        let delimiters = amounts.len().saturating_sub(1);
        if delimiters >= self.width {
            debug!("{} amounts do not fit into {} columns", amounts.len(), self.width);
            return Ok(self.bracket(repeat_n(self.delimiter, self.width)));
        }

        let total = sum(amounts);
        if delimiters == 0 || total.is_zero() {
            debug!("nothing to proportion: {} amounts, total {total}", amounts.len());
            return Ok(self.bracket(repeat_n(self.fill, self.width)));
        }

        let weight = self.width - delimiters;
        let scale = BigInt::from(weight);

        let mut bar = String::with_capacity(self.width + 2);
        bar.push('[');
        // carried rounding loss, in units of amount * weight; always below total
        let mut remainder = BigInt::zero();
        for (i, amount) in amounts.iter().enumerate() {
            let scaled = amount * &scale + &remainder;
            let dots = &scaled / &total;
            remainder = scaled - &dots * &total;

            // bounded by weight
            let dots = dots.to_usize().unwrap_or(weight);
            bar.extend(repeat_n(self.fill, dots));
            if i + 1 < amounts.len() {
                bar.push(self.delimiter);
            }
        }
        bar.push(']');
        Ok(bar)
    }

    /// Draws a bar with a single delimiter at column `round(percent)`
    /// (scaled to `width`), followed by the formatted percent.
    ///
    /// Out-of-range percents pin the delimiter to the first or last column;
    /// the suffix still shows the real value.
    pub fn draw_percent(&self, percent: f64) -> String {
        let width = self.width.max(1);
        let column = ((percent * width as f64 / 100.0).round() as usize).clamp(1, width);

        let interior = repeat_n(self.fill, column - 1)
            .chain(Some(self.delimiter))
            .chain(repeat_n(self.fill, width - column));
        let mut bar = Self { width, ..*self }.bracket(interior);
        bar.push(' ');
        bar.push_str(&format_percent(percent));
        bar
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`BarStyle::draw_amounts`] with the default 100-column style.
pub fn draw_amounts(amounts: &[BigInt]) -> crate::Result<String> {
    BarStyle::DEFAULT.draw_amounts(amounts)
}

/// [`BarStyle::draw_percent`] with the default 100-column style.
pub fn draw_percent(percent: f64) -> String {
    BarStyle::DEFAULT.draw_percent(percent)
}

// ============================================================================
// Symbols
// ============================================================================

/// One-character summary of an amount relative to a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Zero.
    Blank,
    /// At most 10% of max.
    Low,
    /// At most 50% of max.
    Half,
    /// Any other non-zero value below max.
    High,
    /// Equal to max.
    Max,
    /// Above max.
    Overflow,
}

impl Symbol {
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Low => '.',
            Self::Half => '+',
            Self::High => '^',
            Self::Max => '*',
            Self::Overflow => '!',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Classifies `amount` against `max` (which defaults to `amount` itself).
pub fn print_symbol(amount: &BigInt, max: Option<&BigInt>) -> Symbol {
    let max = max.unwrap_or(amount);

    if amount.is_zero() {
        Symbol::Blank
    } else if amount == max {
        Symbol::Max
    } else if amount > max {
        Symbol::Overflow
    } else if *amount <= max / 10u32 {
        Symbol::Low
    } else if *amount <= max / 2u32 {
        Symbol::Half
    } else {
        Symbol::High
    }
}

/// Where [`draw_symbols`] takes the maximum for each value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maximum<'a> {
    /// The largest value in the sequence (zero if none is positive).
    Auto,
    /// One maximum for every value.
    Fixed(&'a BigInt),
    /// A maximum per value; must be as long as the values.
    PerElement(&'a [BigInt]),
}

/// Draws each value as its [`Symbol`].
///
/// # Errors
/// Returns `Error::LengthMismatch` if per-element maxima and values differ in length.
pub fn draw_symbols(values: &[BigInt], maximum: Maximum<'_>) -> crate::Result<String> {
    let zero = BigInt::zero();
    let max = match maximum {
        Maximum::Auto => values.iter().max().map_or(&zero, |top| top.max(&zero)),
        Maximum::Fixed(max) => max,
        Maximum::PerElement(maxima) => {
            if maxima.len() != values.len() {
                return Err(Error::LengthMismatch {
                    values: values.len(),
                    maxima: maxima.len(),
                });
            }
            return Ok(values
                .iter()
                .zip(maxima)
                .map(|(value, max)| print_symbol(value, Some(max)).as_char())
                .collect());
        }
    };

    Ok(values
        .iter()
        .map(|value| print_symbol(value, Some(max)).as_char())
        .collect())
}

/// `*` for every set flag, a space for every cleared one.
pub fn draw_booleans(flags: &[bool]) -> String {
    flags.iter().map(|&flag| if flag { '*' } else { ' ' }).collect()
}
