//! Common types and constants shared by the decoding modules.
//!
//! This module provides:
//! 1. **Constants:** The MISA bit layout (MXL field, extension bits, CSR address).
//! 2. **Error Handling:** The `CoreIdError` type returned by parsing and construction paths.

/// MISA register layout constants.
pub mod constants;

/// Error types.
pub mod error;

pub use error::CoreIdError;
