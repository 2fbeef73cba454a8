//! Tests for the flag set/clear instructions.

use mos6502::{Cpu, FlatRam};

fn setup_cpu(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0x0400, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset(0x0400);
    cpu
}

#[test]
fn sec_then_clc() {
    let mut cpu = setup_cpu(&[0x38, 0x18]); // SEC; CLC

    cpu.step().unwrap();
    assert!(cpu.flag_c());

    cpu.step().unwrap();
    assert!(!cpu.flag_c());
}

#[test]
fn sed_then_cld() {
    let mut cpu = setup_cpu(&[0xF8, 0xD8]); // SED; CLD

    cpu.step().unwrap();
    assert!(cpu.flag_d());

    cpu.step().unwrap();
    assert!(!cpu.flag_d());
}

#[test]
fn sei_then_cli() {
    let mut cpu = setup_cpu(&[0x78, 0x58]); // SEI; CLI

    cpu.step().unwrap();
    assert!(cpu.flag_i());

    cpu.step().unwrap();
    assert!(!cpu.flag_i());
}

#[test]
fn clv_clears_overflow() {
    // There is no SEV; get V set through arithmetic first.
    let mut cpu = setup_cpu(&[0x69, 0x50, 0xB8]); // ADC #$50; CLV
    cpu.set_a(0x50);

    cpu.step().unwrap();
    assert!(cpu.flag_v());

    cpu.step().unwrap();
    assert!(!cpu.flag_v());
}

#[test]
fn flag_instructions_touch_only_their_flag() {
    let mut cpu = setup_cpu(&[0x38]); // SEC
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);
    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
}
