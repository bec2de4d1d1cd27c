//! MISA register layout.
//!
//! Bit positions follow the RISC-V privileged architecture. The decoder works on a 32-bit view of
//! the register: MXL in bits 30–31 and one bit per extension letter in bits 0–25.

/// CSR address of the machine ISA register.
pub const MISA_CSR: u16 = 0x301;

/// Bit shift of the MXL (machine XLEN) field in the 32-bit register view.
pub const MISA_MXL_SHIFT: u32 = 30;

/// Bit shift of the MXL field in the 64-bit register of an RV64 hart.
pub const MISA64_MXL_SHIFT: u32 = 62;

/// Width mask of the MXL field (after shifting).
pub const MISA_MXL_MASK: u32 = 0x3;

/// MXL encoding for a 32-bit hart.
pub const MXL_32: u32 = 1;

/// MXL encoding for a 64-bit hart.
pub const MXL_64: u32 = 2;

/// MXL encoding for a 128-bit hart.
pub const MXL_128: u32 = 3;

/// Mask of the extension bits `A` (bit 0) through `Z` (bit 25).
pub const MISA_EXTENSIONS_MASK: u32 = 0x03FF_FFFF;

/// Number of single-letter extensions encoded in MISA.
pub const EXTENSION_COUNT: usize = 26;

/// Upper bound on the length of a formatted `"X - name"` label.
pub const EXTENSION_LABEL_MAX_LEN: usize = 64;

/// Text substituted for letters without a catalogued name.
pub const RESERVED_NAME: &str = "(reserved)";
