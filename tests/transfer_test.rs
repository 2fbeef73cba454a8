//! Tests for the register transfers.

use mos6502::{Cpu, FlatRam};

fn setup_cpu(program: &[u8]) -> Cpu<FlatRam> {
    let mut ram = FlatRam::new();
    ram.load(0x0400, program);
    let mut cpu = Cpu::new(ram);
    cpu.reset(0x0400);
    cpu
}

#[test]
fn tax_copies_a_and_updates_nz() {
    let mut cpu = setup_cpu(&[0xAA]); // TAX
    cpu.set_a(0x80);
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x0401);
}

#[test]
fn tay_copies_a() {
    let mut cpu = setup_cpu(&[0xA8]); // TAY
    cpu.set_a(0x00);
    cpu.set_flag_n(true);
    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn txa_and_tya_copy_into_a() {
    let mut cpu = setup_cpu(&[0x8A]); // TXA
    cpu.set_x(0x42);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x42);

    let mut cpu = setup_cpu(&[0x98]); // TYA
    cpu.set_y(0x99);
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x99);
    assert!(cpu.flag_n());
}

#[test]
fn tsx_copies_the_stack_pointer() {
    let mut cpu = setup_cpu(&[0xBA]); // TSX
    cpu.step().unwrap();

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn txs_copies_x_without_touching_flags() {
    // TXS is the one transfer with no flag update.
    let mut cpu = setup_cpu(&[0x9A]); // TXS
    cpu.set_x(0x00);
    let sr_before = cpu.sr();
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.sr(), sr_before); // Z not set despite the zero value
}
