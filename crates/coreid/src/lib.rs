//! RISC-V core identification library.
//!
//! This crate decodes the machine ISA register (`misa`) of a RISC-V hart into structured
//! information. It provides the following:
//! 1. **Register Access:** The `MisaReader` seam, a hardware reader for RISC-V targets, and a
//!    fixed-value reader for overrides and host-side decoding.
//! 2. **Width Decoding:** Classification of the MXL field into RV32, RV64, RV128, or unknown.
//! 3. **Extension Catalogue:** Letter validation, descriptive names, and `"X - name"` labels.
//! 4. **Enumeration:** Ascending, single-read iteration over the present extensions.
//! 5. **Configuration:** JSON configuration with an optional `misa` override.
//!
//! The crate is `no_std` and only needs `alloc` for formatted labels and reports, so it can be
//! linked into firmware that runs these checks during startup.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

/// Common constants (MISA field layout) and the crate error type.
pub mod common;
/// Configuration (MISA override, read tracing) deserialized from JSON.
pub mod config;
/// The `CoreId` front end implementing the public identification operations.
pub mod coreid;
/// Register access seam (`MisaReader`) and its implementations.
pub mod csr;
/// ISA decoding (register width, extension catalogue, decoded `misa` values).
pub mod isa;

/// Crate error type; only returned by construction and parsing paths.
pub use crate::common::CoreIdError;
/// Configuration root; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main identification type; wraps a `MisaReader`.
pub use crate::coreid::CoreId;
/// Register access seam and the fixed-value reader.
pub use crate::csr::{FixedMisa, MisaReader};
/// Decoded types and the hardware-independent name lookup.
pub use crate::isa::{CoreReport, Extension, ExtensionSet, Misa, Xlen, extension_name};

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use crate::coreid::{
    for_each_present_extension, hart, is_extension_present, present_extensions, xlen,
};
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub use crate::csr::HartMisa;
