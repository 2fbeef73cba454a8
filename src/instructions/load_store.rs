//! Loads and stores: LDA, LDX, LDY, STA, STX, STY.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::cpu::Cpu;

/// LDA — load the accumulator from memory.
pub(crate) fn lda<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand(mode).load(cpu);
    cpu.a = value;
    cpu.update_nz(value);
}

/// LDX — load index X from memory.
pub(crate) fn ldx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand(mode).load(cpu);
    cpu.x = value;
    cpu.update_nz(value);
}

/// LDY — load index Y from memory.
pub(crate) fn ldy<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let value = cpu.operand(mode).load(cpu);
    cpu.y = value;
    cpu.update_nz(value);
}

/// STA — store the accumulator. Stores update no flags.
pub(crate) fn sta<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = cpu.a;
    operand.store(cpu, value);
}

/// STX — store index X.
pub(crate) fn stx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = cpu.x;
    operand.store(cpu, value);
}

/// STY — store index Y.
pub(crate) fn sty<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let operand = cpu.operand(mode);
    let value = cpu.y;
    operand.store(cpu, value);
}
