//! Tests for BIT: N and V mirror the operand's top bits, Z reflects the
//! masked accumulator, and nothing else moves.

use mos6502::{Cpu, FlatRam};

fn setup_cpu(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0x0400, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset(0x0400);
    cpu
}

#[test]
fn bit_copies_operand_bits_7_and_6() {
    let mut cpu = setup_cpu(&[0x24, 0x10]); // BIT $10
    cpu.bus_mut().load(0x0010, &[0xC0]);
    cpu.set_a(0xFF);
    cpu.step().unwrap();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_z());
}

#[test]
fn bit_clears_n_and_v_from_a_low_operand() {
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.bus_mut().load(0x0010, &[0x3F]);
    cpu.set_a(0x01);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.step().unwrap();

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_v());
}

#[test]
fn bit_sets_z_when_mask_misses() {
    let mut cpu = setup_cpu(&[0x24, 0x10]);
    cpu.bus_mut().load(0x0010, &[0x0F]);
    cpu.set_a(0xF0);
    cpu.step().unwrap();

    assert!(cpu.flag_z());
}

#[test]
fn bit_leaves_accumulator_unchanged() {
    let mut cpu = setup_cpu(&[0x2C, 0x00, 0x20]); // BIT $2000
    cpu.bus_mut().load(0x2000, &[0x80]);
    cpu.set_a(0x55);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0403);
}
