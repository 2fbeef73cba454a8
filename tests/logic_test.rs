//! Tests for the bitwise accumulator operations AND, ORA, EOR.

use mos6502::{Cpu, FlatRam};

fn setup_cpu(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0x0400, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset(0x0400);
    cpu
}

#[test]
fn and_masks_the_accumulator() {
    let mut cpu = setup_cpu(&[0x29, 0x0F]); // AND #$0F
    cpu.set_a(0x5A);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0A);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn and_to_zero_sets_z() {
    let mut cpu = setup_cpu(&[0x29, 0x00]);
    cpu.set_a(0xFF);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn ora_merges_bits() {
    let mut cpu = setup_cpu(&[0x09, 0x80]); // ORA #$80
    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_n());
}

#[test]
fn eor_toggles_bits() {
    let mut cpu = setup_cpu(&[0x49, 0xFF]); // EOR #$FF
    cpu.set_a(0x0F);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn eor_with_self_clears_a() {
    let mut cpu = setup_cpu(&[0x49, 0x42]);
    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn and_zero_page_x() {
    let mut cpu = setup_cpu(&[0x35, 0x20]); // AND $20,X
    cpu.bus_mut().load(0x0025, &[0xF0]);
    cpu.set_a(0xFF);
    cpu.set_x(0x05);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
}

#[test]
fn ora_indirect_y() {
    let mut cpu = setup_cpu(&[0x11, 0x40]); // ORA ($40),Y
    cpu.bus_mut().load(0x0040, &[0x00, 0x20]);
    cpu.bus_mut().load(0x2001, &[0x22]);
    cpu.set_a(0x11);
    cpu.set_y(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
}
