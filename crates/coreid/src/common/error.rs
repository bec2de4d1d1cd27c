//! Error definitions.
//!
//! The identification operations themselves never fail: invalid letters surface as `false` or
//! `None`. Errors only arise when callers build values from untrusted input, such as an
//! extension letter, an ISA string, or a configuration document.

use alloc::string::String;

use thiserror::Error;

/// Errors produced while constructing or parsing identification values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoreIdError {
    /// The character is not an uppercase letter in `'A'..='Z'`.
    #[error("invalid extension identifier {0:?}: expected an uppercase letter 'A'..='Z'")]
    InvalidExtension(char),

    /// The text is neither a hexadecimal register value nor an `RV<width><letters>` ISA string.
    #[error("invalid ISA string {0:?}")]
    InvalidIsaString(String),

    /// The configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
