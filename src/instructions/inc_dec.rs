//! Increment and decrement: INC, DEC on memory; INX, INY, DEX, DEY on the
//! index registers. All wrap mod 256 and update N and Z.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::cpu::Cpu;

/// INC — read-modify-write increment of a memory cell.
pub(crate) fn inc<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let result = operand.load(cpu).wrapping_add(1);
    cpu.update_nz(result);
    operand.store(cpu, result);
}

/// DEC — read-modify-write decrement of a memory cell.
pub(crate) fn dec<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let result = operand.load(cpu).wrapping_sub(1);
    cpu.update_nz(result);
    operand.store(cpu, result);
}

/// INX — increment index X.
pub(crate) fn inx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_nz(cpu.x);
}

/// INY — increment index Y.
pub(crate) fn iny<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_nz(cpu.y);
}

/// DEX — decrement index X.
pub(crate) fn dex<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_nz(cpu.x);
}

/// DEY — decrement index Y.
pub(crate) fn dey<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_nz(cpu.y);
}
