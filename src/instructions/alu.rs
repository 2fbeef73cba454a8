//! Arithmetic and logic: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::cpu::{status, Cpu};

/// ADC — add memory to accumulator with carry.
///
/// `A ← A + M + C`. C is the carry out of bit 7; V is set when the operands
/// share a sign and the result does not (`(A^r) & (M^r) & 0x80`).
pub(crate) fn adc<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    add_with_carry(cpu, m);
}

/// SBC — subtract memory from accumulator with borrow.
///
/// Identical to ADC of the one's complement: `A - M - (1-C)` is
/// `A + !M + C` bit for bit, including all four flags. C set means no
/// borrow occurred.
pub(crate) fn sbc<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    add_with_carry(cpu, !m);
}

fn add_with_carry<B: Bus>(cpu: &mut Cpu<B>, m: u8) {
    let a = cpu.a;
    let carry = cpu.flag(status::CARRY) as u16;

    // Widen to 16 bits so the carry out is observable.
    let sum = a as u16 + m as u16 + carry;
    let result = sum as u8;

    cpu.set_flag(status::CARRY, sum > 0xFF);
    cpu.set_flag(status::OVERFLOW, (a ^ result) & (m ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.update_nz(result);
}

/// AND — bitwise AND memory into the accumulator.
pub(crate) fn and<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    cpu.a &= m;
    cpu.update_nz(cpu.a);
}

/// ORA — bitwise OR memory into the accumulator.
pub(crate) fn ora<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    cpu.a |= m;
    cpu.update_nz(cpu.a);
}

/// EOR — bitwise exclusive-OR memory into the accumulator.
pub(crate) fn eor<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    cpu.a ^= m;
    cpu.update_nz(cpu.a);
}

/// CMP — compare memory with the accumulator.
pub(crate) fn cmp<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let reg = cpu.a;
    compare(cpu, reg, mode);
}

/// CPX — compare memory with index X.
pub(crate) fn cpx<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let reg = cpu.x;
    compare(cpu, reg, mode);
}

/// CPY — compare memory with index Y.
pub(crate) fn cpy<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let reg = cpu.y;
    compare(cpu, reg, mode);
}

// N and Z come from the wrapped difference; C is the unsigned reg >= m.
// The register is not modified.
fn compare<B: Bus>(cpu: &mut Cpu<B>, reg: u8, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    cpu.set_flag(status::CARRY, reg >= m);
    cpu.update_nz(reg.wrapping_sub(m));
}

/// BIT — test memory bits against the accumulator.
///
/// N and V come straight from bits 7 and 6 of the operand; Z reflects
/// `A & M`. The accumulator is untouched.
pub(crate) fn bit<B: Bus>(cpu: &mut Cpu<B>, mode: AddressingMode) {
    let m = cpu.operand(mode).load(cpu);
    cpu.set_flag(status::NEGATIVE, m & 0x80 != 0);
    cpu.set_flag(status::OVERFLOW, m & 0x40 != 0);
    cpu.set_flag(status::ZERO, cpu.a & m == 0);
}
