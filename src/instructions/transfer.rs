//! Register transfers: TAX, TAY, TXA, TYA, TSX, TXS.
//!
//! All update N and Z from the copied value except TXS, which is the one
//! transfer on the 6502 that touches no flags.

use crate::bus::Bus;
use crate::cpu::Cpu;

/// TAX — copy A to X.
pub(crate) fn tax<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.a;
    cpu.update_nz(cpu.x);
}

/// TAY — copy A to Y.
pub(crate) fn tay<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.y = cpu.a;
    cpu.update_nz(cpu.y);
}

/// TXA — copy X to A.
pub(crate) fn txa<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.x;
    cpu.update_nz(cpu.a);
}

/// TYA — copy Y to A.
pub(crate) fn tya<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.a = cpu.y;
    cpu.update_nz(cpu.a);
}

/// TSX — copy SP to X.
pub(crate) fn tsx<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.x = cpu.sp;
    cpu.update_nz(cpu.x);
}

/// TXS — copy X to SP. No flag update.
pub(crate) fn txs<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.sp = cpu.x;
}
