//! Core identification front end.
//!
//! `CoreId` binds a [`MisaReader`] to the identification operations. Each operation that needs
//! register contents performs exactly one read per call and keeps nothing afterwards:
//! 1. **Width:** `xlen` classifies the MXL field.
//! 2. **Presence:** `is_extension_present` validates the letter before touching hardware.
//! 3. **Names:** `extension_name` is a catalogue lookup and never reads the register.
//! 4. **Enumeration:** `present_extensions` and `for_each_present_extension` read once and
//!    report the present extensions in ascending letter order.

use alloc::string::String;

use tracing::{debug, trace};

use crate::config::Config;
use crate::csr::MisaReader;
use crate::isa::{Extension, ExtensionSet, Misa, Xlen};

/// Identification operations over a register source.
#[derive(Clone, Debug, Default)]
pub struct CoreId<R> {
    reader: R,
    trace_reads: bool,
}

impl<R: MisaReader> CoreId<R> {
    /// Creates an identifier reading through `reader`.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            trace_reads: false,
        }
    }

    /// Creates an identifier with the read tracing setting from `config`.
    ///
    /// The override in `config` is not applied here; pass
    /// [`Config::override_reader`] as `reader` to use it.
    pub const fn with_config(reader: R, config: &Config) -> Self {
        Self {
            reader,
            trace_reads: config.trace_reads,
        }
    }

    /// Enables or disables a `trace` event per register read.
    #[must_use]
    pub const fn with_trace_reads(mut self, enabled: bool) -> Self {
        self.trace_reads = enabled;
        self
    }

    /// Returns the underlying reader.
    pub const fn reader(&self) -> &R {
        &self.reader
    }

    /// Consumes the identifier and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the register once and returns the decoded snapshot.
    pub fn read(&self) -> Misa {
        let raw = self.reader.read_misa();
        if self.trace_reads {
            trace!(raw, "read misa");
        }
        Misa::new(raw)
    }

    /// Returns the register width of the hart.
    ///
    /// An MXL encoding without a defined width yields [`Xlen::Unknown`].
    pub fn xlen(&self) -> Xlen {
        let misa = self.read();
        let xlen = misa.xlen();
        if xlen == Xlen::Unknown {
            debug!(raw = misa.raw(), "misa MXL field has no defined width");
        }
        xlen
    }

    /// Returns `true` if the extension named by `letter` is implemented.
    ///
    /// Letters outside `'A'..='Z'` return `false` without reading the register.
    pub fn is_extension_present(&self, letter: char) -> bool {
        Extension::from_letter(letter).is_some_and(|ext| self.read().has(ext))
    }

    /// Looks up the `"<letter> - <name>"` label of an extension.
    ///
    /// Same as [`crate::isa::extension_name`]; no register is read.
    #[allow(clippy::unused_self)]
    pub fn extension_name(&self, letter: char) -> Option<String> {
        crate::isa::extension_name(letter)
    }

    /// Reads the register once and returns the present extensions.
    ///
    /// Iterating the returned set, any number of times, performs no further reads.
    pub fn present_extensions(&self) -> ExtensionSet {
        self.read().extensions()
    }

    /// Calls `callback` with each present extension letter in ascending order.
    ///
    /// `None` is a no-op and does not read the register. Otherwise the register is read once,
    /// whatever the number of present extensions.
    pub fn for_each_present_extension<F: FnMut(char)>(&self, callback: Option<F>) {
        let Some(mut callback) = callback else {
            return;
        };
        self.present_extensions().letters().for_each(&mut callback);
    }
}

/// Returns an identifier for the executing hart.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub const fn hart() -> CoreId<crate::csr::HartMisa> {
    CoreId::new(crate::csr::HartMisa)
}

/// Returns the register width of the executing hart.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub fn xlen() -> Xlen {
    hart().xlen()
}

/// Returns `true` if the executing hart implements the extension named by `letter`.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub fn is_extension_present(letter: char) -> bool {
    hart().is_extension_present(letter)
}

/// Returns the extensions implemented by the executing hart.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub fn present_extensions() -> ExtensionSet {
    hart().present_extensions()
}

/// Calls `callback` with each extension letter the executing hart implements.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub fn for_each_present_extension<F: FnMut(char)>(callback: Option<F>) {
    hart().for_each_present_extension(callback);
}
