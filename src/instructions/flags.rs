//! Flag manipulation: CLC, SEC, CLD, SED, CLI, SEI, CLV.
//!
//! Direct set/clear of single status bits. There is no SEV on the 6502;
//! V is only ever cleared explicitly.

use crate::bus::Bus;
use crate::cpu::{status, Cpu};

/// CLC — clear carry.
pub(crate) fn clc<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::CARRY, false);
}

/// SEC — set carry.
pub(crate) fn sec<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::CARRY, true);
}

/// CLD — clear decimal mode.
pub(crate) fn cld<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::DECIMAL, false);
}

/// SED — set decimal mode. The flag is stored but arithmetic ignores it.
pub(crate) fn sed<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::DECIMAL, true);
}

/// CLI — clear interrupt disable.
pub(crate) fn cli<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::INTERRUPT, false);
}

/// SEI — set interrupt disable.
pub(crate) fn sei<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::INTERRUPT, true);
}

/// CLV — clear overflow.
pub(crate) fn clv<B: Bus>(cpu: &mut Cpu<B>) {
    cpu.set_flag(status::OVERFLOW, false);
}
