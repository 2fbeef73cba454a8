//! Shifts and rotates: ASL, LSR, ROL, ROR.
//!
//! Each resolves one [`Operand`](crate::Operand) and writes the result back
//! through it, so the accumulator and memory encodings share a single
//! implementation per mnemonic.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::cpu::{status, Cpu};

/// ASL — shift left one bit; bit 7 falls into C, bit 0 becomes 0.
pub(crate) fn asl<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = operand.load(cpu);

    let result = value << 1;
    cpu.set_flag(status::CARRY, value & 0x80 != 0);
    cpu.update_nz(result);
    operand.store(cpu, result);
}

/// LSR — shift right one bit; bit 0 falls into C, bit 7 becomes 0.
pub(crate) fn lsr<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = operand.load(cpu);

    let result = value >> 1;
    cpu.set_flag(status::CARRY, value & 0x01 != 0);
    cpu.update_nz(result);
    operand.store(cpu, result);
}

/// ROL — rotate left through carry: old C enters bit 0, bit 7 exits into C.
pub(crate) fn rol<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = operand.load(cpu);
    let carry_in = cpu.flag(status::CARRY) as u8;

    let result = value << 1 | carry_in;
    cpu.set_flag(status::CARRY, value & 0x80 != 0);
    cpu.update_nz(result);
    operand.store(cpu, result);
}

/// ROR — rotate right through carry: old C enters bit 7, bit 0 exits into C.
pub(crate) fn ror<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = operand.load(cpu);
    let carry_in = cpu.flag(status::CARRY) as u8;

    let result = value >> 1 | carry_in << 7;
    cpu.set_flag(status::CARRY, value & 0x01 != 0);
    cpu.update_nz(result);
    operand.store(cpu, result);
}
