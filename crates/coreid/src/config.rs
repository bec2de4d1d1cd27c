//! Configuration.
//!
//! Configuration is supplied as JSON by the firmware image or a host-side tool, or built with
//! `Config::default()`. It provides:
//! 1. **MISA Override:** Decode a fixed value instead of reading hardware.
//! 2. **Read Tracing:** Emit a `trace` event for every register read.
//!
//! ```
//! use rvcoreid::{Config, Misa, Xlen};
//!
//! let config = Config::from_json(r#"{ "misa_override": "RV64IMAFDC", "trace_reads": true }"#)?;
//! assert!(config.trace_reads);
//!
//! let misa = config.override_misa()?.map(Misa::xlen);
//! assert_eq!(misa, Some(Xlen::Rv64));
//! # Ok::<(), rvcoreid::CoreIdError>(())
//! ```

use alloc::string::{String, ToString};

use serde::Deserialize;

use crate::common::error::CoreIdError;
use crate::csr::FixedMisa;
use crate::isa::Misa;

/// Identification settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// MISA register override, either an ISA string (`"RV64IMAFDC"`) or a hexadecimal value
    /// (`"0x40101105"`).
    #[serde(default)]
    pub misa_override: Option<String>,

    /// Emit a `trace` event carrying the raw value on every register read.
    #[serde(default)]
    pub trace_reads: bool,
}

impl Config {
    /// Deserializes a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreIdError::InvalidConfig`] if the document is not valid JSON or has fields of
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, CoreIdError> {
        serde_json::from_str(json).map_err(|e| CoreIdError::InvalidConfig(e.to_string()))
    }

    /// Parses the configured override, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CoreIdError::InvalidIsaString`] if the override cannot be parsed.
    pub fn override_misa(&self) -> Result<Option<Misa>, CoreIdError> {
        self.misa_override.as_deref().map(str::parse).transpose()
    }

    /// Returns a reader for the configured override, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CoreIdError::InvalidIsaString`] if the override cannot be parsed.
    pub fn override_reader(&self) -> Result<Option<FixedMisa>, CoreIdError> {
        Ok(self.override_misa()?.map(FixedMisa::from))
    }
}
