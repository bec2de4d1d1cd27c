//! Register width classification.
//!
//! The MXL field encodes the native base integer width of the hart:
//! 1. **Encodings:** `1` → RV32, `2` → RV64, `3` → RV128.
//! 2. **Unknown:** `0` is not a valid MXL value and classifies as `Unknown` rather than failing.

use core::fmt;

use serde::Serialize;

use crate::common::constants::{MISA_MXL_MASK, MISA_MXL_SHIFT, MXL_32, MXL_64, MXL_128};

/// Native integer register width (XLEN) of a hart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Xlen {
    /// 32-bit base ISA.
    Rv32,
    /// 64-bit base ISA.
    Rv64,
    /// 128-bit base ISA.
    Rv128,
    /// MXL field holds an encoding with no defined width.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Xlen {
    /// Classifies a two-bit MXL field value.
    ///
    /// # Arguments
    ///
    /// * `mxl` - The MXL field; only the low two bits are considered.
    ///
    /// # Returns
    ///
    /// The corresponding `Xlen`, or `Unknown` for encoding `0`.
    pub const fn from_mxl(mxl: u32) -> Self {
        match mxl & MISA_MXL_MASK {
            MXL_32 => Self::Rv32,
            MXL_64 => Self::Rv64,
            MXL_128 => Self::Rv128,
            _ => Self::Unknown,
        }
    }

    /// Classifies the MXL field (bits 30–31) of a 32-bit `misa` value.
    pub const fn from_misa(misa: u32) -> Self {
        Self::from_mxl(misa >> MISA_MXL_SHIFT)
    }

    /// Returns the MXL encoding of this width, or `0` for `Unknown`.
    pub const fn mxl(self) -> u32 {
        match self {
            Self::Rv32 => MXL_32,
            Self::Rv64 => MXL_64,
            Self::Rv128 => MXL_128,
            Self::Unknown => 0,
        }
    }

    /// Returns the register width in bits, or `None` for `Unknown`.
    pub const fn bits(self) -> Option<u32> {
        match self {
            Self::Rv32 => Some(32),
            Self::Rv64 => Some(64),
            Self::Rv128 => Some(128),
            Self::Unknown => None,
        }
    }

    /// Returns the conventional name (`"RV32"`, `"RV64"`, `"RV128"`, or `"unknown"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rv32 => "RV32",
            Self::Rv64 => "RV64",
            Self::Rv128 => "RV128",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
