//! IEEE 754 binary16 codes.
//!
//! Values are rounded from `f64` to half precision in one step with
//! round-to-nearest, ties-to-even. Going through `f32` first would round
//! twice, which can land one ulp off for values near a half-precision tie.

use core::fmt;

use half::f16;

use crate::error::EncodeError;

/// Hex digits needed to print a code.
pub const HEX_DIGITS: usize = 4;

const F64_MANTISSA_BITS: u32 = 52;
const F64_EXP_BIAS: i32 = 1023;
const F16_MANTISSA_BITS: u32 = 10;
const F16_EXP_BIAS: i32 = 15;
const F16_SIGN: u16 = 0x8000;
const F16_INFINITY: u16 = 0x7C00;
const F16_QUIET_NAN: u16 = 0x7E00;

/// An IEEE 754 binary16 value kept as its bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Binary16(u16);

impl Binary16 {
    /// `+0.0`.
    pub const ZERO: Self = Self(0);

    /// `1.0`.
    pub const ONE: Self = Self(0x3C00);

    /// Converts `value` with round-to-nearest-even.
    ///
    /// Finite values beyond the half-precision range become signed infinity,
    /// NaN becomes a quiet NaN carrying the top payload bits.
    pub fn from_f64(value: f64) -> Self {
        Self(f64_to_bits_rne(value))
    }

    /// Converts `value`, refusing results that are not finite numbers.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NonFinite`] for NaN or infinite input and
    /// [`EncodeError::Overflow`] for finite input that rounds to infinity.
    pub fn try_from_f64(value: f64) -> Result<Self, EncodeError> {
        if !value.is_finite() {
            return Err(EncodeError::NonFinite {
                value,
                format: "binary16",
            });
        }
        let code = Self::from_f64(value);
        if code.is_infinite() {
            return Err(EncodeError::Overflow {
                value,
                format: "binary16",
            });
        }
        Ok(code)
    }

    /// Wraps a raw bit pattern.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// The value as a `half::f16`.
    #[inline]
    pub fn to_f16(self) -> f16 {
        f16::from_bits(self.0)
    }

    /// Decoded real value (exact).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_f16().to_f64()
    }

    /// True for `±inf`.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 & !F16_SIGN == F16_INFINITY
    }
}

impl fmt::LowerHex for Binary16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = HEX_DIGITS)
    }
}

impl fmt::Display for Binary16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Shifts `significand` right by `shift` bits, rounding to nearest even.
#[inline]
fn shift_rne(significand: u64, shift: u32) -> u64 {
    let kept = significand >> shift;
    let rem = significand & ((1u64 << shift) - 1);
    let halfway = 1u64 << (shift - 1);
    if rem > halfway || (rem == halfway && kept & 1 == 1) {
        kept + 1
    } else {
        kept
    }
}

fn f64_to_bits_rne(value: f64) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 48) as u16) & F16_SIGN;
    let biased = ((bits >> F64_MANTISSA_BITS) & 0x7FF) as i32;
    let mantissa = bits & ((1u64 << F64_MANTISSA_BITS) - 1);

    if biased == 0x7FF {
        if mantissa == 0 {
            return sign | F16_INFINITY;
        }
        let payload = (mantissa >> (F64_MANTISSA_BITS - F16_MANTISSA_BITS)) as u16;
        return sign | F16_QUIET_NAN | payload;
    }

    let exp = biased - F64_EXP_BIAS;
    if exp > F16_EXP_BIAS {
        return sign | F16_INFINITY;
    }

    let drop = F64_MANTISSA_BITS - F16_MANTISSA_BITS;
    if exp >= 1 - F16_EXP_BIAS {
        // Normal range. A mantissa carry bumps the exponent, and a carry out
        // of the largest exponent lands exactly on infinity.
        let exp_field = ((exp + F16_EXP_BIAS) as u64) << F16_MANTISSA_BITS;
        let rounded = exp_field + shift_rne(mantissa, drop);
        return sign | rounded as u16;
    }

    // Below half the smallest subnormal (2^-25) everything rounds to zero;
    // 2^-25 itself is a tie that goes to the even code 0.
    if exp < -F16_EXP_BIAS - F16_MANTISSA_BITS as i32 {
        return sign;
    }

    // Subnormal range: count in units of 2^-24.
    let significand = mantissa | (1u64 << F64_MANTISSA_BITS);
    let shift = drop + (1 - F16_EXP_BIAS - exp) as u32;
    sign | shift_rne(significand, shift) as u16
}
