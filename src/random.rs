//! Uniform random `BigInt` fixtures.
//!
//! Values are drawn from a byte-oriented entropy source and interpreted as
//! big-endian unsigned integers. Ranges are mapped linearly from a fresh
//! 256-bit draw instead of reduced modulo the range width, so there is no
//! modulo bias; the remaining non-uniformity is below 2^-256 relative.
//!
//! Good enough for test fixtures. Not for key material.

use log::trace;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::Error;

/// Bytes in a full-width (256-bit) word.
const WORD_BYTES: usize = 32;

/// Bits in a full-width word; also the shift that divides by 2^256.
const WORD_BITS: usize = WORD_BYTES * 8;

/// Draws `BigInt` values from an entropy source.
///
/// `Sampler::os()` reads operating-system randomness; `Sampler::new` accepts
/// any `RngCore`, e.g. a seeded `ChaCha20Rng` for reproducible tests.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
}

impl Sampler<OsRng> {
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Sampler<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore> Sampler<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    fn fill(&mut self, len: usize) -> crate::Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|err| Error::Entropy(err.to_string()))?;
        trace!("drew {len} bytes of entropy");
        Ok(bytes)
    }

    fn unsigned(&mut self, len: usize) -> crate::Result<BigInt> {
        let bytes = self.fill(len)?;
        Ok(BigInt::from_bytes_be(Sign::Plus, &bytes))
    }

    /// Uniform value in `[0, 2^256)`.
    pub fn full_width(&mut self) -> crate::Result<BigInt> {
        self.unsigned(WORD_BYTES)
    }

    /// Uniform value in `[0, 2^255)`.
    pub fn half_width(&mut self) -> crate::Result<BigInt> {
        Ok(self.full_width()? >> 1)
    }

    /// Uniform value in `[0, 2^bits)`.
    ///
    /// # Errors
    /// Returns `Error::UnalignedBits` unless `bits` is a positive multiple of 8.
    pub fn bit_length(&mut self, bits: usize) -> crate::Result<BigInt> {
        if bits == 0 || bits % 8 != 0 {
            return Err(Error::UnalignedBits(bits));
        }
        self.unsigned(bits / 8)
    }

    /// Uniform value in `[from, to)`; returns `from` when the range is empty.
    ///
    /// Computes `from + (to - from) * R / 2^256` for a fresh `R` in `[0, 2^256)`.
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` if `from > to`.
    pub fn range(&mut self, from: &BigInt, to: &BigInt) -> crate::Result<BigInt> {
        if from > to {
            return Err(Error::InvalidRange);
        }
        let r = self.full_width()?;
        Ok(from + (((to - from) * r) >> WORD_BITS))
    }

    /// `size` random bytes as a `0x`-prefixed lowercase hex string.
    pub fn hex(&mut self, size: usize) -> crate::Result<String> {
        let bytes = self.fill(size)?;
        Ok(format!("0x{}", hex::encode(bytes)))
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    /// Returns `Error::Empty` for an empty slice.
    pub fn element<'a, T>(&mut self, items: &'a [T]) -> crate::Result<&'a T> {
        if items.is_empty() {
            return Err(Error::Empty);
        }
        let index = self.range(&BigInt::zero(), &BigInt::from(items.len()))?;
        // always below items.len(), which is non-zero here
        index
            .to_usize()
            .and_then(|i| items.get(i))
            .ok_or(Error::Empty)
    }
}

// ============================================================================
// OS-entropy shortcuts
// ============================================================================

/// Uniform value in `[0, 2^256)` from OS randomness.
pub fn random_full_width() -> crate::Result<BigInt> {
    Sampler::os().full_width()
}

/// Uniform value in `[0, 2^255)` from OS randomness.
pub fn random_half_width() -> crate::Result<BigInt> {
    Sampler::os().half_width()
}

/// Uniform value in `[0, 2^bits)`; `bits` must be a positive multiple of 8.
pub fn random_bit_length(bits: usize) -> crate::Result<BigInt> {
    Sampler::os().bit_length(bits)
}

/// Uniform value in `[from, to)`; fails if `from > to`.
pub fn random_range(from: &BigInt, to: &BigInt) -> crate::Result<BigInt> {
    Sampler::os().range(from, to)
}

/// Random hex string of `size` bytes, `0x`-prefixed.
pub fn random_hex(size: usize) -> crate::Result<String> {
    Sampler::os().hex(size)
}

/// Uniformly chosen element of `items`.
pub fn random_element<T>(items: &[T]) -> crate::Result<&T> {
    Sampler::os().element(items)
}
