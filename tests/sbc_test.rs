//! Tests for SBC: carry-as-no-borrow semantics and flag behavior.

use mos6502::{Cpu, FlatRam};

fn setup_cpu(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0x0400, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset(0x0400);
    cpu
}

#[test]
fn sbc_basic_subtraction_with_carry_set() {
    // With C=1 (no borrow pending): 0x50 - 0x20 = 0x30.
    let mut cpu = setup_cpu(&[0xE9, 0x20]); // SBC #$20
    cpu.set_a(0x50);
    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x30);
    assert!(cpu.flag_c()); // no borrow
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn sbc_with_carry_clear_subtracts_one_more() {
    let mut cpu = setup_cpu(&[0xE9, 0x20]);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x2F);
}

#[test]
fn sbc_clears_carry_on_borrow() {
    // 0x10 - 0x20 borrows: C=0 and the result wraps.
    let mut cpu = setup_cpu(&[0xE9, 0x20]);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn sbc_equal_operands_give_zero() {
    let mut cpu = setup_cpu(&[0xE9, 0x42]);
    cpu.set_a(0x42);
    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn sbc_signed_overflow() {
    // 0x50 - 0xB0: 80 - (-80) = 160, out of signed range.
    let mut cpu = setup_cpu(&[0xE9, 0xB0]);
    cpu.set_a(0x50);
    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
}

#[test]
fn sbc_zero_page() {
    let mut cpu = setup_cpu(&[0xE5, 0x10]); // SBC $10
    cpu.bus_mut().load(0x0010, &[0x01]);
    cpu.set_a(0x03);
    cpu.set_flag_c(true);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x02);
}

#[test]
fn sbc_matches_adc_of_complement() {
    // SBC m must equal ADC !m bit for bit, flags included.
    for (a, m, carry) in [
        (0x00u8, 0x00u8, false),
        (0x10, 0x20, true),
        (0x80, 0x7F, false),
        (0xFF, 0x01, true),
        (0x42, 0x42, true),
    ] {
        let mut sbc_cpu = setup_cpu(&[0xE9, m]);
        sbc_cpu.set_a(a);
        sbc_cpu.set_flag_c(carry);
        sbc_cpu.step().unwrap();

        let mut adc_cpu = setup_cpu(&[0x69, !m]);
        adc_cpu.set_a(a);
        adc_cpu.set_flag_c(carry);
        adc_cpu.step().unwrap();

        assert_eq!(sbc_cpu.a(), adc_cpu.a(), "a={a:02X} m={m:02X} c={carry}");
        assert_eq!(sbc_cpu.sr(), adc_cpu.sr(), "a={a:02X} m={m:02X} c={carry}");
    }
}
