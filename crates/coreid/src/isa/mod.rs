//! RISC-V ISA identification.
//!
//! This module decodes the contents of the `misa` register. It includes:
//! 1. **Width:** The `Xlen` classification of the MXL field.
//! 2. **Extensions:** The `Extension` identifier and its static name catalogue.
//! 3. **Register Values:** The decoded `Misa` value, the `ExtensionSet` it carries, and ISA
//!    string rendering and parsing.

/// Extension identifiers, the name catalogue, and label formatting.
pub mod extension;

/// Decoded register values and extension sets.
pub mod misa;

/// Register width (MXL) classification.
pub mod xlen;

pub use extension::{Extension, extension_name};
pub use misa::{CoreReport, ExtensionSet, Misa};
pub use xlen::Xlen;
