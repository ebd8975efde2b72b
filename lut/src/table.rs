//! Table descriptions and construction.
//!
//! The four tables the generators emit are provided as constants:
//!
//! | Constant | Function | Grid | Encoding | File |
//! |----------|----------|------|----------|------|
//! | [`FIXED_LOG2`] | `log2(1+m)` | shifted mantissa | Q10 | `log2_lut_128_new.txt` |
//! | [`FIXED_EXP2`] | `2^m` | uniform | binary16 | `exp2_lut_128_new.txt` |
//! | [`HALF_LOG2`] | `log2(1+m)` | uniform | binary16 | `log2_lut_128.txt` |
//! | [`HALF_EXP2`] | `2^m` | uniform | binary16 | `exp2_lut_128.txt` |

use core::fmt;

use crate::binary16::{self, Binary16};
use crate::error::EncodeError;
use crate::fixed::{self, Q10};
use crate::LUT_ENTRIES;

/// The function a table samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `log2(1 + x)`, the mantissa term of `log2` on a normalized float.
    Log2OnePlus,
    /// `2^x`.
    Exp2,
}

impl Function {
    /// Evaluates the function at `x`.
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Log2OnePlus => (1.0 + x).log2(),
            Function::Exp2 => x.exp2(),
        }
    }

    /// Short human-readable form.
    pub const fn label(self) -> &'static str {
        match self {
            Function::Log2OnePlus => "log2(1+m)",
            Function::Exp2 => "2^m",
        }
    }
}

/// How a table index maps to a sample point in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleGrid {
    /// The 7-bit index placed in the top bits of a 10-bit mantissa:
    /// `(i << 3) / 1024`.
    ShiftedMantissa,
    /// `i / LUT_ENTRIES`.
    Uniform,
}

impl SampleGrid {
    /// Sample point for `index`.
    #[inline]
    pub fn sample(self, index: usize) -> f64 {
        match self {
            SampleGrid::ShiftedMantissa => (index << 3) as f64 / fixed::SCALE,
            SampleGrid::Uniform => index as f64 / LUT_ENTRIES as f64,
        }
    }
}

/// Output encoding of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 10-bit unsigned fixed-point fraction.
    Q10,
    /// IEEE 754 half precision.
    Binary16,
}

impl Encoding {
    /// Hex digits per rendered code.
    pub const fn hex_digits(self) -> usize {
        match self {
            Encoding::Q10 => fixed::HEX_DIGITS,
            Encoding::Binary16 => binary16::HEX_DIGITS,
        }
    }

    /// Encodes `value`.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] if `value` has no representation in this
    /// encoding.
    pub fn encode(self, value: f64) -> Result<Code, EncodeError> {
        match self {
            Encoding::Q10 => Q10::from_f64(value).map(Code::Q10),
            Encoding::Binary16 => Binary16::try_from_f64(value).map(Code::Binary16),
        }
    }
}

/// One encoded table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Fixed-point code.
    Q10(Q10),
    /// Half-precision code.
    Binary16(Binary16),
}

impl Code {
    /// Raw code bits.
    pub const fn to_bits(self) -> u16 {
        match self {
            Code::Q10(q) => q.to_bits(),
            Code::Binary16(h) => h.to_bits(),
        }
    }

    /// Decoded real value.
    pub fn to_f64(self) -> f64 {
        match self {
            Code::Q10(q) => q.to_f64(),
            Code::Binary16(h) => h.to_f64(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Q10(q) => fmt::Display::fmt(q, f),
            Code::Binary16(h) => fmt::Display::fmt(h, f),
        }
    }
}

/// Static description of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableSpec {
    /// Short name used in reports.
    pub name: &'static str,
    /// Output file name.
    pub file_name: &'static str,
    /// Sampled function.
    pub function: Function,
    /// Index-to-sample mapping.
    pub grid: SampleGrid,
    /// Code format.
    pub encoding: Encoding,
}

/// `log2(1+m)` in Q10 on the shifted-mantissa grid.
pub const FIXED_LOG2: TableSpec = TableSpec {
    name: "fixed-log2",
    file_name: "log2_lut_128_new.txt",
    function: Function::Log2OnePlus,
    grid: SampleGrid::ShiftedMantissa,
    encoding: Encoding::Q10,
};

/// `2^m` in binary16, companion of [`FIXED_LOG2`].
pub const FIXED_EXP2: TableSpec = TableSpec {
    name: "fixed-exp2",
    file_name: "exp2_lut_128_new.txt",
    function: Function::Exp2,
    grid: SampleGrid::Uniform,
    encoding: Encoding::Binary16,
};

/// `log2(1+m)` in binary16.
pub const HALF_LOG2: TableSpec = TableSpec {
    name: "half-log2",
    file_name: "log2_lut_128.txt",
    function: Function::Log2OnePlus,
    grid: SampleGrid::Uniform,
    encoding: Encoding::Binary16,
};

/// `2^m` in binary16.
pub const HALF_EXP2: TableSpec = TableSpec {
    name: "half-exp2",
    file_name: "exp2_lut_128.txt",
    function: Function::Exp2,
    grid: SampleGrid::Uniform,
    encoding: Encoding::Binary16,
};

/// A single table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LutEntry {
    /// Position in the table.
    pub index: usize,
    /// Sample point fed to the function.
    pub sample: f64,
    /// Function value in f64.
    pub value: f64,
    /// Encoded value.
    pub code: Code,
}

impl LutEntry {
    /// Absolute difference between the encoded and f64 function value.
    pub fn abs_error(&self) -> f64 {
        (self.code.to_f64() - self.value).abs()
    }
}

/// A fully evaluated table.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut {
    spec: TableSpec,
    entries: Vec<LutEntry>,
}

impl Lut {
    /// Evaluates every entry of `spec`.
    ///
    /// # Errors
    ///
    /// Returns the first [`EncodeError`] hit while encoding an entry.
    pub fn build(spec: &TableSpec) -> Result<Self, EncodeError> {
        let entries = (0..LUT_ENTRIES)
            .map(|index| {
                let sample = spec.grid.sample(index);
                let value = spec.function.eval(sample);
                let code = spec.encoding.encode(value)?;
                Ok(LutEntry {
                    index,
                    sample,
                    value,
                    code,
                })
            })
            .collect::<Result<Vec<_>, EncodeError>>()?;
        Ok(Self {
            spec: *spec,
            entries,
        })
    }

    /// The description this table was built from.
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// Entries in index order.
    pub fn entries(&self) -> &[LutEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Codes rendered as fixed-width lowercase hex, in index order.
    pub fn hex_codes(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.code.to_string())
    }

    /// Largest absolute encoding error over the table.
    pub fn max_abs_error(&self) -> f64 {
        self.entries
            .iter()
            .map(LutEntry::abs_error)
            .fold(0.0, f64::max)
    }
}
