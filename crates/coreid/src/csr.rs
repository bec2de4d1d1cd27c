//! Access to the machine ISA register.
//!
//! Reading `misa` is the only hardware interaction this crate needs. It is modelled as a trait
//! so that decoding can run against real hardware, a configured override, or a test double:
//! 1. **Seam:** `MisaReader`, one infallible read returning a 32-bit view of the register.
//! 2. **Fixed Values:** `FixedMisa`, a constant register value.
//! 3. **Hardware:** `HartMisa`, a `csrr` read on RISC-V targets.

use crate::isa::Misa;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
use crate::common::constants::MISA_CSR;
use crate::common::constants::{
    MISA_EXTENSIONS_MASK, MISA_MXL_MASK, MISA_MXL_SHIFT, MISA64_MXL_SHIFT,
};

/// Source of `misa` register values.
///
/// Each call to [`MisaReader::read_misa`] is one register access. Implementations must reflect
/// the current register state and must not cache across calls.
pub trait MisaReader {
    /// Reads the register and returns its 32-bit view: MXL in bits 30–31 and the extension
    /// bits in 0–25.
    fn read_misa(&self) -> u32;
}

impl<R: MisaReader + ?Sized> MisaReader for &R {
    fn read_misa(&self) -> u32 {
        (**self).read_misa()
    }
}

/// A reader that always returns the same register value.
///
/// Used for configured overrides and for decoding values captured elsewhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedMisa(pub u32);

impl FixedMisa {
    /// Creates a reader returning `raw`.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Misa> for FixedMisa {
    fn from(misa: Misa) -> Self {
        Self(misa.raw())
    }
}

impl MisaReader for FixedMisa {
    fn read_misa(&self) -> u32 {
        self.0
    }
}

/// Folds a 64-bit `misa` value into the 32-bit view.
///
/// RV64 harts report MXL in bits 62–63. The field is moved to bits 30–31 and the extension
/// bits are kept, so RV64 values decode with the same rules as RV32 values.
///
/// # Arguments
///
/// * `raw` - The full 64-bit register value.
///
/// # Returns
///
/// The 32-bit register view; bits 26–61 of `raw` are discarded.
pub const fn fold_misa64(raw: u64) -> u32 {
    let mxl = (raw >> MISA64_MXL_SHIFT) as u32 & MISA_MXL_MASK;
    (mxl << MISA_MXL_SHIFT) | (raw as u32 & MISA_EXTENSIONS_MASK)
}

/// Reads `misa` of the executing hart with `csrr`.
///
/// Requires machine mode; lower privilege levels trap on the access.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct HartMisa;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
impl HartMisa {
    /// Reads the full-width register.
    #[inline]
    fn read_raw() -> usize {
        let value: usize;

        // SAFETY: `csrr` on `misa` only copies the register into a general-purpose register. It
        // touches no memory or stack and leaves the flags alone.
        unsafe {
            core::arch::asm!(
                "csrr {0}, {1}",
                out(reg) value,
                const MISA_CSR,
                options(nomem, nostack, preserves_flags)
            );
        }

        value
    }
}

#[cfg(target_arch = "riscv32")]
impl MisaReader for HartMisa {
    fn read_misa(&self) -> u32 {
        Self::read_raw() as u32
    }
}

#[cfg(target_arch = "riscv64")]
impl MisaReader for HartMisa {
    fn read_misa(&self) -> u32 {
        fold_misa64(Self::read_raw() as u64)
    }
}
