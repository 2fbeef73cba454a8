//! Stack operations: PHA, PLA, PHP, PLP.

use crate::bus::Bus;
use crate::cpu::{status, Cpu};

/// PHA — push the accumulator.
pub(crate) fn pha<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.a;
    cpu.push(value);
}

/// PLA — pull into the accumulator; N and Z track the pulled value.
pub(crate) fn pla<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.update_nz(value);
}

/// PHP — push the status register with B set in the pushed copy only.
pub(crate) fn php<B: Bus>(cpu: &mut Cpu<B>) {
    let pushed_sr = cpu.sr() | status::BREAK;
    cpu.push(pushed_sr);
}

/// PLP — pull the status register; bit 5 is forced high.
pub(crate) fn plp<B: Bus>(cpu: &mut Cpu<B>) {
    let value = cpu.pull();
    cpu.sr = value | status::UNUSED;
}
