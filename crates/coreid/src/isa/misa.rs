//! Decoded `misa` values.
//!
//! A `Misa` is the result of a single register read. This module provides:
//! 1. **Decoding:** Width classification and per-extension bit tests on one snapshot.
//! 2. **Extension Sets:** `ExtensionSet`, a restartable ascending iterator source over set bits.
//! 3. **ISA Strings:** Rendering as `RV64ACDFIMSU` and parsing from ISA strings or hex values.
//! 4. **Reports:** A serializable summary for diagnostics output.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::str::FromStr;

use serde::Serialize;

use super::extension::Extension;
use super::xlen::Xlen;
use crate::common::constants::{MISA_EXTENSIONS_MASK, MISA_MXL_SHIFT};
use crate::common::error::CoreIdError;

/// A 32-bit view of the `misa` register.
///
/// Decoding never fails. Bits 26–29 are carried in [`Misa::raw`] but ignored by decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Misa(u32);

impl Misa {
    /// Wraps a raw register value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Assembles a register value from a width and a set of extensions.
    ///
    /// `Xlen::Unknown` leaves the MXL field at zero.
    pub const fn from_parts(xlen: Xlen, extensions: ExtensionSet) -> Self {
        Self((xlen.mxl() << MISA_MXL_SHIFT) | extensions.bits())
    }

    /// Returns the raw register value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Classifies the MXL field.
    pub const fn xlen(self) -> Xlen {
        Xlen::from_misa(self.0)
    }

    /// Returns `true` if the bit for `ext` is set.
    pub const fn has(self, ext: Extension) -> bool {
        self.0 & ext.mask() != 0
    }

    /// Returns the set of present extensions.
    pub const fn extensions(self) -> ExtensionSet {
        ExtensionSet::from_bits(self.0)
    }

    /// Builds a serializable summary of this value.
    pub fn report(self) -> CoreReport {
        CoreReport {
            raw: self.0,
            xlen: self.xlen(),
            extensions: self.extensions().letters().collect(),
            isa: self.to_string(),
        }
    }
}

impl From<u32> for Misa {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Misa> for u32 {
    fn from(misa: Misa) -> Self {
        misa.0
    }
}

impl fmt::Display for Misa {
    /// Writes the ISA string, e.g. `RV32ACIMU`.
    ///
    /// An unclassifiable width is written as `RV?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.xlen().bits() {
            Some(bits) => write!(f, "RV{bits}")?,
            None => f.write_str("RV?")?,
        }
        for ext in self.extensions() {
            write!(f, "{ext}")?;
        }
        Ok(())
    }
}

impl FromStr for Misa {
    type Err = CoreIdError;

    /// Parses an ISA string (`RV64IMAFDC`) or a hexadecimal register value (`0x40101105`).
    ///
    /// ISA strings are case-insensitive. Each letter sets its own bit; `G` is not expanded
    /// because `misa` reports it as a separate bit. Text without an `RV` prefix is read as
    /// hexadecimal digits with an optional `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || CoreIdError::InvalidIsaString(text.to_owned());

        let Some((xlen, letters)) = split_isa_prefix(text) else {
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text);
            // `from_str_radix` tolerates a leading sign.
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            return u32::from_str_radix(digits, 16)
                .map(Self)
                .map_err(|_| invalid());
        };

        let mut extensions = ExtensionSet::EMPTY;
        for letter in letters.chars() {
            let ext = Extension::from_letter(letter.to_ascii_uppercase()).ok_or_else(invalid)?;
            extensions = extensions.with(ext);
        }
        Ok(Self::from_parts(xlen, extensions))
    }
}

/// Splits `RV32`/`RV64`/`RV128` off an ISA string.
fn split_isa_prefix(text: &str) -> Option<(Xlen, &str)> {
    if !text.get(..2)?.eq_ignore_ascii_case("rv") {
        return None;
    }
    let rest = text.get(2..)?;
    [("32", Xlen::Rv32), ("64", Xlen::Rv64), ("128", Xlen::Rv128)]
        .into_iter()
        .find_map(|(digits, xlen)| rest.strip_prefix(digits).map(|letters| (xlen, letters)))
}

/// Set of single-letter extensions taken from one `misa` snapshot.
///
/// The set is `Copy`, so iterating it again replays the same snapshot without touching
/// hardware. Iteration yields extensions in strictly ascending letter order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtensionSet(u32);

impl ExtensionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from `misa` bits; bits above 25 are discarded.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & MISA_EXTENSIONS_MASK)
    }

    /// Returns the extension bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if `ext` is in the set.
    pub const fn contains(self, ext: Extension) -> bool {
        self.0 & ext.mask() != 0
    }

    /// Returns a copy of the set with `ext` added.
    #[must_use]
    pub const fn with(self, ext: Extension) -> Self {
        Self(self.0 | ext.mask())
    }

    /// Returns the number of extensions in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if no extension is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the extensions in ascending letter order.
    pub const fn iter(self) -> Iter {
        Iter { remaining: self.0 }
    }

    /// Iterates the extension letters in ascending order.
    pub fn letters(self) -> impl Iterator<Item = char> + Clone {
        self.iter().map(Extension::letter)
    }
}

impl IntoIterator for ExtensionSet {
    type Item = Extension;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &ExtensionSet {
    type Item = Extension;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Extension> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = Extension>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Ascending iterator over an [`ExtensionSet`].
#[derive(Clone, Debug)]
pub struct Iter {
    remaining: u32,
}

impl Iterator for Iter {
    type Item = Extension;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.remaining.trailing_zeros();
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        Extension::from_bit(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

/// Serializable summary of one `misa` read, for diagnostics output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoreReport {
    /// Raw register value.
    pub raw: u32,
    /// Decoded register width.
    pub xlen: Xlen,
    /// Present extension letters, ascending.
    pub extensions: Vec<char>,
    /// Canonical ISA string, e.g. `RV32ACIMU`.
    pub isa: String,
}
