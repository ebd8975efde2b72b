//! Unsigned 10-bit fixed-point fractions (Q0.10).
//!
//! A [`Q10`] code `c` stands for the real value `c / 1024`. Encoding rounds
//! half to even and keeps the low ten bits, so `1.0` and above wrap.

use core::fmt;

use crate::error::EncodeError;

/// Number of fractional bits.
pub const FRAC_BITS: u32 = 10;

/// Scale factor between a real value and its code.
pub const SCALE: f64 = (1u32 << FRAC_BITS) as f64;

/// Mask selecting the code bits.
pub const MASK: u16 = (1u16 << FRAC_BITS) - 1;

/// Hex digits needed to print a code.
pub const HEX_DIGITS: usize = 3;

/// A 10-bit unsigned fixed-point fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Q10(u16);

impl Q10 {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Largest code, `1023 / 1024`.
    pub const MAX: Self = Self(MASK);

    /// Encodes `value` as `round(value * 1024) mod 2^10`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NonFinite`] for NaN or infinities and
    /// [`EncodeError::Negative`] for values that round below zero.
    pub fn from_f64(value: f64) -> Result<Self, EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite {
                value,
                format: "Q10",
            });
        }
        let scaled = (value * SCALE).round_ties_even();
        if scaled < 0.0 {
            return Err(EncodeError::Negative {
                value,
                format: "Q10",
            });
        }
        // `scaled` is a non-negative integer, so the remainder is exact. Past
        // f64::MAX / 1024 the product is infinite, and every such value is a
        // multiple of 1024 anyway.
        let wrapped = if scaled.is_finite() { scaled % SCALE } else { 0.0 };
        Ok(Self(wrapped as u16))
    }

    /// Builds a code from raw bits, discarding everything above bit 9.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & MASK)
    }

    /// Raw code bits.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Decoded real value.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / SCALE
    }
}

impl fmt::LowerHex for Q10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = HEX_DIGITS)
    }
}

impl fmt::Display for Q10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
