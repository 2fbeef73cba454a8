//! Conditional branches: BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ.
//!
//! Every branch fetches its signed 8-bit offset whether or not it is taken,
//! so PC has advanced past the operand before the decision applies. The
//! target is that post-operand PC plus the sign-extended offset.

use crate::addressing::AddressingMode;
use crate::bus::Bus;
use crate::cpu::{status, Cpu};

/// BPL — branch when N is clear.
pub(crate) fn bpl<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = !cpu.flag(status::NEGATIVE);
    branch(cpu, taken);
}

/// BMI — branch when N is set.
pub(crate) fn bmi<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = cpu.flag(status::NEGATIVE);
    branch(cpu, taken);
}

/// BVC — branch when V is clear.
pub(crate) fn bvc<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = !cpu.flag(status::OVERFLOW);
    branch(cpu, taken);
}

/// BVS — branch when V is set.
pub(crate) fn bvs<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = cpu.flag(status::OVERFLOW);
    branch(cpu, taken);
}

/// BCC — branch when C is clear.
pub(crate) fn bcc<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = !cpu.flag(status::CARRY);
    branch(cpu, taken);
}

/// BCS — branch when C is set.
pub(crate) fn bcs<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = cpu.flag(status::CARRY);
    branch(cpu, taken);
}

/// BNE — branch when Z is clear.
pub(crate) fn bne<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = !cpu.flag(status::ZERO);
    branch(cpu, taken);
}

/// BEQ — branch when Z is set.
pub(crate) fn beq<B: Bus>(cpu: &mut Cpu<B>) {
    let taken = cpu.flag(status::ZERO);
    branch(cpu, taken);
}

fn branch<B: Bus>(cpu: &mut Cpu<B>, taken: bool) {
    let target = cpu.operand(AddressingMode::Relative).address();
    if taken {
        cpu.pc = target;
    }
}
