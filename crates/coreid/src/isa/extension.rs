//! ISA extension identifiers and the extension name catalogue.
//!
//! Every single-letter extension occupies bit `letter - 'A'` of `misa`. This module provides:
//! 1. **Validation:** Only uppercase letters `'A'..='Z'` name an extension.
//! 2. **Catalogue:** A fixed 26-entry table of descriptive names; letters without one are reserved.
//! 3. **Formatting:** Labels of the form `"<letter> - <name>"`.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::common::constants::{EXTENSION_COUNT, EXTENSION_LABEL_MAX_LEN, RESERVED_NAME};
use crate::common::error::CoreIdError;

/// Descriptive extension names, indexed by `letter - 'A'`.
const EXTENSION_NAMES: [Option<&str>; EXTENSION_COUNT] = [
    Some("Atomic extension"),
    Some("Bit-Manipulation extension"),
    Some("Compressed extension"),
    Some("Double-precision floating-point extension"),
    Some("RV32E base ISA"),
    Some("Single-precision floating-point extension"),
    Some("Additional standard extensions present"),
    Some("Hypervisor extension"),
    Some("RV32I/RV64I/RV128I base ISA"),
    None,
    None,
    None,
    Some("Integer Multiply/Divide extension"),
    Some("User-level interrupts supported"),
    None,
    None,
    Some("Quad-precision floating-point extension"),
    None,
    Some("Supervisor mode implemented"),
    None,
    Some("User mode implemented"),
    Some("Vector extension"),
    None,
    Some("Non-standard extensions present"),
    None,
    None,
];

/// A single-letter ISA extension.
///
/// Holds the bit offset of the extension (`0` for `A` through `25` for `Z`). Values can only be
/// built from a valid uppercase letter, so every `Extension` maps to exactly one `misa` bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Extension(u8);

impl Extension {
    /// `A`: Atomic.
    pub const A: Self = Self(0);
    /// `B`: Bit-Manipulation.
    pub const B: Self = Self(1);
    /// `C`: Compressed.
    pub const C: Self = Self(2);
    /// `D`: Double-precision floating-point.
    pub const D: Self = Self(3);
    /// `E`: RV32E base ISA.
    pub const E: Self = Self(4);
    /// `F`: Single-precision floating-point.
    pub const F: Self = Self(5);
    /// `G`: Additional standard extensions.
    pub const G: Self = Self(6);
    /// `H`: Hypervisor.
    pub const H: Self = Self(7);
    /// `I`: Base integer ISA.
    pub const I: Self = Self(8);
    /// `J`: reserved.
    pub const J: Self = Self(9);
    /// `K`: reserved.
    pub const K: Self = Self(10);
    /// `L`: reserved.
    pub const L: Self = Self(11);
    /// `M`: Integer Multiply/Divide.
    pub const M: Self = Self(12);
    /// `N`: User-level interrupts.
    pub const N: Self = Self(13);
    /// `O`: reserved.
    pub const O: Self = Self(14);
    /// `P`: reserved.
    pub const P: Self = Self(15);
    /// `Q`: Quad-precision floating-point.
    pub const Q: Self = Self(16);
    /// `R`: reserved.
    pub const R: Self = Self(17);
    /// `S`: Supervisor mode.
    pub const S: Self = Self(18);
    /// `T`: reserved.
    pub const T: Self = Self(19);
    /// `U`: User mode.
    pub const U: Self = Self(20);
    /// `V`: Vector.
    pub const V: Self = Self(21);
    /// `W`: reserved.
    pub const W: Self = Self(22);
    /// `X`: Non-standard extensions.
    pub const X: Self = Self(23);
    /// `Y`: reserved.
    pub const Y: Self = Self(24);
    /// `Z`: reserved.
    pub const Z: Self = Self(25);

    /// All extensions in ascending letter order.
    pub const ALL: [Self; EXTENSION_COUNT] = {
        let mut all = [Self(0); EXTENSION_COUNT];
        let mut bit = 0;
        while bit < EXTENSION_COUNT {
            all[bit] = Self(bit as u8);
            bit += 1;
        }
        all
    };

    /// Maximum length of a label returned by [`Extension::label`].
    pub const LABEL_MAX_LEN: usize = EXTENSION_LABEL_MAX_LEN;

    /// Returns the extension named by `letter`, or `None` if it is not in `'A'..='Z'`.
    ///
    /// Lowercase letters are rejected; ISA string parsing normalizes case before calling this.
    pub const fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter as u8 - b'A'))
        } else {
            None
        }
    }

    /// Returns the extension at `misa` bit `bit`, or `None` past bit 25.
    pub const fn from_bit(bit: u32) -> Option<Self> {
        if bit < EXTENSION_COUNT as u32 {
            Some(Self(bit as u8))
        } else {
            None
        }
    }

    /// Returns the extension letter.
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// Returns the bit position of this extension in `misa`.
    pub const fn bit(self) -> u32 {
        self.0 as u32
    }

    /// Returns the single-bit mask of this extension in `misa`.
    pub const fn mask(self) -> u32 {
        1 << self.0
    }

    /// Returns the catalogued name, or `None` for a reserved letter.
    pub const fn name(self) -> Option<&'static str> {
        EXTENSION_NAMES[self.0 as usize]
    }

    /// Returns `true` if the catalogue has no name for this letter.
    pub const fn is_reserved(self) -> bool {
        self.name().is_none()
    }

    /// Returns the catalogued name, or `"(reserved)"` for a reserved letter.
    pub const fn description(self) -> &'static str {
        match self.name() {
            Some(name) => name,
            None => RESERVED_NAME,
        }
    }

    /// Formats the extension as `"<letter> - <description>"`.
    ///
    /// Each call returns a new string; earlier results are never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvcoreid::Extension;
    ///
    /// assert_eq!(Extension::A.label(), "A - Atomic extension");
    /// assert_eq!(Extension::T.label(), "T - (reserved)");
    /// ```
    pub fn label(self) -> String {
        format!("{} - {}", self.letter(), self.description())
    }
}

impl TryFrom<char> for Extension {
    type Error = CoreIdError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(CoreIdError::InvalidExtension(letter))
    }
}

impl From<Extension> for char {
    fn from(ext: Extension) -> Self {
        ext.letter()
    }
}

impl fmt::Display for Extension {
    /// Writes the bare extension letter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Looks up the label of the extension named by `letter`.
///
/// Pure catalogue lookup; no register is read. Returns `None` when `letter` is not in
/// `'A'..='Z'`, and `"<letter> - (reserved)"` for letters without a catalogued name.
pub fn extension_name(letter: char) -> Option<String> {
    Extension::from_letter(letter).map(Extension::label)
}
