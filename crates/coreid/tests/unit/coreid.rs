//! # Identification Operation Tests
//!
//! Verifies the four identification operations against stub registers, with particular
//! attention to how many times each operation reads `misa`.

use crate::common::harness::init_tracing;
use crate::common::mocks::csr::{CountingMisa, MockMisaCsr};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rvcoreid::{Config, CoreId, Xlen, extension_name};

// ─── Register width ─────────────────────────────────────────────────────────

#[rstest]
#[case::rv32(0x4000_0000, Xlen::Rv32)]
#[case::rv64(0x8000_0000, Xlen::Rv64)]
#[case::rv128(0xC000_0000, Xlen::Rv128)]
#[case::zero_encoding(0x0000_0000, Xlen::Unknown)]
#[case::extensions_only(0x03FF_FFFF, Xlen::Unknown)]
#[case::rv32_with_extensions(0x4014_1105, Xlen::Rv32)]
fn xlen_classifies_mxl_field(#[case] raw: u32, #[case] expected: Xlen) {
    let csr = CountingMisa::new(raw);
    let core = CoreId::new(&csr);
    assert_eq!(core.xlen(), expected);
    assert_eq!(csr.reads(), 1);
}

#[test]
fn xlen_after_reset_is_unknown() {
    let csr = CountingMisa::new(0x4000_0000);
    csr.reset();
    assert_eq!(CoreId::new(&csr).xlen(), Xlen::Unknown);
}

#[test]
fn xlen_rereads_on_every_call() {
    let csr = CountingMisa::new(0x4000_0000);
    let core = CoreId::new(&csr);
    assert_eq!(core.xlen(), Xlen::Rv32);
    csr.set(0x8000_0000);
    assert_eq!(core.xlen(), Xlen::Rv64);
    assert_eq!(csr.reads(), 2);
}

// ─── Extension presence ─────────────────────────────────────────────────────

#[test]
fn present_a_when_bit_zero_set() {
    let csr = CountingMisa::new(0x1);
    let core = CoreId::new(&csr);
    assert!(core.is_extension_present('A'));
    assert_eq!(csr.reads(), 1);
}

#[test]
fn absent_e_when_only_a_set() {
    let csr = CountingMisa::new(0x1);
    assert!(!CoreId::new(&csr).is_extension_present('E'));
    assert_eq!(csr.reads(), 1);
}

#[test]
fn present_z_uses_bit_25() {
    let csr = CountingMisa::new(1 << 25);
    let core = CoreId::new(&csr);
    assert!(core.is_extension_present('Z'));
    assert!(!core.is_extension_present('Y'));
    assert_eq!(csr.reads(), 2);
}

#[rstest]
#[case::lowercase_a('a')]
#[case::lowercase_e('e')]
#[case::lowercase_z('z')]
#[case::after_z('[')]
#[case::after_lowercase_z('{')]
#[case::before_a('@')]
#[case::digit('0')]
#[case::punctuation('-')]
#[case::space(' ')]
#[case::nul('\0')]
#[case::non_ascii('É')]
fn invalid_letters_never_touch_hardware(#[case] letter: char) {
    let csr = CountingMisa::new(0xFFFF_FFFF);
    let core = CoreId::new(&csr);
    assert!(!core.is_extension_present(letter));
    assert_eq!(extension_name(letter), None);
    assert_eq!(core.extension_name(letter), None);
    assert_eq!(csr.reads(), 0);
}

#[test]
fn invalid_letter_with_mock_expects_no_read() {
    let mut csr = MockMisaCsr::new();
    let _ = csr.expect_read_misa().times(0);
    assert!(!CoreId::new(csr).is_extension_present('a'));
}

// ─── Extension names ────────────────────────────────────────────────────────

#[test]
fn name_of_a_is_atomic() {
    assert_eq!(extension_name('A').as_deref(), Some("A - Atomic extension"));
}

#[test]
fn name_of_t_is_reserved() {
    assert_eq!(extension_name('T').as_deref(), Some("T - (reserved)"));
}

#[test]
fn name_lookup_does_not_read_register() {
    let csr = CountingMisa::new(0);
    let core = CoreId::new(&csr);
    for letter in 'A'..='Z' {
        assert_eq!(core.extension_name(letter), extension_name(letter));
        assert!(core.extension_name(letter).is_some());
    }
    assert_eq!(core.reader().reads(), 0);
}

#[test]
fn earlier_name_is_not_overwritten_by_later_call() {
    let first = extension_name('A');
    let second = extension_name('T');

    assert_eq!(first.as_deref(), Some("A - Atomic extension"));
    assert_eq!(second.as_deref(), Some("T - (reserved)"));

    // Each call owns its storage.
    let first = first.unwrap_or_default();
    let second = second.unwrap_or_default();
    assert_ne!(first.as_ptr(), second.as_ptr());
}

// ─── Enumeration ────────────────────────────────────────────────────────────

#[test]
fn enumeration_reports_a_then_c_with_one_read() {
    let csr = CountingMisa::new(0x5);
    let core = CoreId::new(&csr);

    let mut seen = Vec::new();
    core.for_each_present_extension(Some(|letter: char| seen.push(letter)));

    assert_eq!(seen, vec!['A', 'C']);
    assert_eq!(csr.reads(), 1);
}

#[test]
fn enumeration_single_c() {
    let csr = CountingMisa::new(0x1 << 2);
    let mut seen = Vec::new();
    CoreId::new(&csr).for_each_present_extension(Some(|letter: char| seen.push(letter)));
    assert_eq!(seen, vec!['C']);
}

#[test]
fn enumeration_without_callback_is_a_no_op() {
    let csr = CountingMisa::new(0x03FF_FFFF);
    CoreId::new(&csr).for_each_present_extension(None::<fn(char)>);
    assert_eq!(csr.reads(), 0);
}

#[test]
fn enumeration_of_empty_register_reads_once() {
    let csr = CountingMisa::default();
    let mut calls = 0;
    CoreId::new(&csr).for_each_present_extension(Some(|_: char| calls += 1));
    assert_eq!(calls, 0);
    assert_eq!(csr.reads(), 1);
}

#[test]
fn enumeration_of_full_register_reads_once() {
    let csr = CountingMisa::new(0xFFFF_FFFF);
    let mut seen = String::new();
    CoreId::new(&csr).for_each_present_extension(Some(|letter: char| seen.push(letter)));
    assert_eq!(seen, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(csr.reads(), 1);
}

#[test]
fn enumeration_with_mock_reads_exactly_once() {
    let mut csr = MockMisaCsr::new();
    let _ = csr.expect_read_misa().times(1).return_const(0x4010_1105u32);
    let mut seen = String::new();
    CoreId::new(csr).for_each_present_extension(Some(|letter: char| seen.push(letter)));
    assert_eq!(seen, "ACIMU");
}

#[test]
fn present_extensions_replays_without_rereading() {
    let csr = CountingMisa::new(0x4010_1105);
    let set = CoreId::new(&csr).present_extensions();

    let first: String = set.letters().collect();
    csr.set(0);
    let second: String = set.letters().collect();

    assert_eq!(first, "ACIMU");
    assert_eq!(first, second);
    assert_eq!(csr.reads(), 1);
}

// ─── Snapshot, configuration, and tracing ───────────────────────────────────

#[test]
fn read_returns_one_snapshot() {
    let csr = CountingMisa::new(0x4000_1105);
    let misa = CoreId::new(&csr).read();
    assert_eq!(misa.raw(), 0x4000_1105);
    assert_eq!(misa.xlen(), Xlen::Rv32);
    assert_eq!(csr.reads(), 1);
}

#[test]
fn traced_reads_keep_results_and_counts() {
    init_tracing();
    let csr = CountingMisa::new(0);
    let core = CoreId::new(&csr).with_trace_reads(true);
    assert_eq!(core.xlen(), Xlen::Unknown);
    assert!(!core.is_extension_present('I'));
    assert_eq!(csr.reads(), 2);
}

#[test]
fn config_override_drives_identification() {
    init_tracing();
    let config =
        Config::from_json(r#"{ "misa_override": "RV32IMAC", "trace_reads": true }"#).unwrap();
    let reader = config.override_reader().unwrap().unwrap();
    let core = CoreId::with_config(reader, &config);

    assert_eq!(core.xlen(), Xlen::Rv32);
    assert!(core.is_extension_present('M'));
    assert!(!core.is_extension_present('F'));
    assert_eq!(core.into_inner().0, 0x4000_1105);
}

// ─── Properties ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_invalid_letters_are_rejected_without_reads(
        letter in any::<char>().prop_filter("not an extension letter", |c| !c.is_ascii_uppercase()),
        raw in any::<u32>(),
    ) {
        let csr = CountingMisa::new(raw);
        let core = CoreId::new(&csr);
        prop_assert!(!core.is_extension_present(letter));
        prop_assert_eq!(extension_name(letter), None);
        prop_assert_eq!(csr.reads(), 0);
    }

    #[test]
    fn prop_presence_is_a_bit_test(raw in any::<u32>(), offset in 0u8..26) {
        let letter = char::from(b'A' + offset);
        let csr = CountingMisa::new(raw);
        prop_assert_eq!(CoreId::new(&csr).is_extension_present(letter), raw & (1 << offset) != 0);
        prop_assert_eq!(csr.reads(), 1);
    }

    #[test]
    fn prop_enumeration_is_ascending_and_complete(raw in any::<u32>()) {
        let csr = CountingMisa::new(raw);
        let mut seen = Vec::new();
        CoreId::new(&csr).for_each_present_extension(Some(|letter: char| seen.push(letter)));

        prop_assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(seen.len() as u32, (raw & 0x03FF_FFFF).count_ones());
        for letter in &seen {
            let bit = u32::from(*letter) - u32::from('A');
            prop_assert!(raw & (1 << bit) != 0);
        }
        prop_assert_eq!(csr.reads(), 1);
    }
}
