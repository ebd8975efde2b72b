//! Lookup tables for a log-domain activation accelerator.
//!
//! The accelerator evaluates `log2` and `exp2` by table lookup on the top
//! seven mantissa bits of its operand. This crate computes those tables in
//! software and encodes each entry in one of the two formats the hardware
//! consumes:
//!
//! | Encoding | Width | Hex digits | Meaning |
//! |----------|-------|------------|---------|
//! | [`Q10`] | 10 bits | 3 | unsigned fraction scaled by 1024 |
//! | [`Binary16`] | 16 bits | 4 | IEEE 754 half-precision bit pattern |
//!
//! # Tables
//!
//! A table is described by a [`TableSpec`]: which [`Function`] it samples,
//! on which [`SampleGrid`], with which [`Encoding`]. [`Lut::build`] evaluates
//! all [`LUT_ENTRIES`] entries.
//!
//! # Example
//!
//! ```
//! use actlut::{Lut, FIXED_LOG2, HALF_EXP2};
//!
//! let log2 = Lut::build(&FIXED_LOG2).unwrap();
//! assert_eq!(log2.entries()[0].code.to_string(), "000");
//! assert_eq!(log2.entries()[64].code.to_string(), "257");
//!
//! let exp2 = Lut::build(&HALF_EXP2).unwrap();
//! assert_eq!(exp2.entries()[0].code.to_string(), "3c00");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod binary16;
pub mod error;
pub mod fixed;
pub mod table;

pub use binary16::Binary16;
pub use error::EncodeError;
pub use fixed::Q10;
pub use table::{
    Code, Encoding, Function, Lut, LutEntry, SampleGrid, TableSpec, FIXED_EXP2, FIXED_LOG2,
    HALF_EXP2, HALF_LOG2,
};

/// Number of entries in every table (seven index bits).
pub const LUT_ENTRIES: usize = 128;
