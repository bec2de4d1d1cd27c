//! # Register Reader Tests
//!
//! Verifies the fixed-value reader and the folding of 64-bit `misa` values into the 32-bit view.

use rvcoreid::csr::fold_misa64;
use rvcoreid::{FixedMisa, Misa, MisaReader, Xlen};

/// RV64 reset value with A, I, M, S, and U set.
const RV64_AIMSU: u64 = 0x8000_0000_0014_1101;

#[test]
fn fixed_misa_returns_its_value_every_time() {
    let csr = FixedMisa::new(0x4000_0100);
    assert_eq!(csr.read_misa(), 0x4000_0100);
    assert_eq!(csr.read_misa(), 0x4000_0100);
    assert_eq!(FixedMisa::default().read_misa(), 0);
}

#[test]
fn fixed_misa_from_decoded_value() {
    let csr = FixedMisa::from(Misa::new(0x8000_112D));
    assert_eq!(csr, FixedMisa(0x8000_112D));
}

#[test]
fn fold_moves_rv64_mxl_into_bits_30_and_31() {
    let folded = fold_misa64(RV64_AIMSU);
    assert_eq!(folded, 0x8014_1101);
    assert_eq!(Xlen::from_misa(folded), Xlen::Rv64);
    assert_eq!(Misa::new(folded).to_string(), "RV64AIMSU");
}

#[test]
fn fold_discards_bits_between_extensions_and_mxl() {
    assert_eq!(fold_misa64(0x0000_0000_FFFF_FFFF), 0x03FF_FFFF);
    assert_eq!(fold_misa64(0x3FFF_FFFF_FC00_0000), 0);
    assert_eq!(fold_misa64(0xC000_0000_0000_0000), 0xC000_0000);
    assert_eq!(fold_misa64(0x4000_0000_0000_0000), 0x4000_0000);
}
