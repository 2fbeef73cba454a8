//! # 6502 CPU Core
//!
//! An instruction-stepped emulator core for the NMOS 6502, built to be
//! embedded: the CPU talks to the outside world only through a pair of
//! host-supplied byte callbacks over the 16-bit address bus (the [`Bus`]
//! trait). One call to [`Cpu::step`] fetches, decodes, and executes exactly
//! one instruction.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{Cpu, FlatRam};
//!
//! // 64KB flat memory with a two-instruction program at 0x0400.
//! let mut ram = FlatRam::new();
//! ram.load(0x0400, &[0xA9, 0x42, 0x8D, 0x00, 0x02]); // LDA #$42; STA $0200
//!
//! let mut cpu = Cpu::new(ram);
//! cpu.reset(0x0400);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.a(), 0x42);
//!
//! cpu.step().unwrap();
//! assert_eq!(cpu.bus().peek(0x0200), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Register file**: PC, A, X, Y, SP, and the packed NV-BDIZC status
//!   register live in [`Cpu`]; multiple independent CPUs can coexist, each
//!   owning its own bus.
//! - **Bus interface**: every byte of traffic — opcode fetch, operand fetch,
//!   pointer reads, effective-address reads/writes, stack accesses — goes
//!   through [`Bus::read`] / [`Bus::write`] in a per-instruction order that
//!   is part of the observable contract.
//! - **Table-driven decode**: a 256-entry [`OPCODE_TABLE`] maps each opcode
//!   byte to its mnemonic and addressing mode; undefined encodings are
//!   `None` and surface as [`StepError::IllegalOpcode`].
//! - **Addressing resolver**: advances PC over the operand bytes and yields
//!   an [`Operand`] the instruction primitives load from and store to.
//!
//! ## What is not modeled
//!
//! Cycle timing (the core is instruction-stepped), decimal-mode arithmetic
//! (D is a storable flag with no effect on ADC/SBC), the hardware IRQ/NMI
//! lines (`BRK` is the only path to the 0xFFFE/F vector), and the
//! `JMP (indirect)` page-wrap bug.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset, and the fetch-decode-execute step
//! - `bus` - the host bus trait and a flat 64KB test memory
//! - `opcodes` - the 256-entry decode table
//! - `addressing` - addressing modes and resolved operands

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod opcodes;

// Instruction primitives, grouped by family. Internal: everything reachable
// from the outside goes through `Cpu::step`.
mod instructions;

pub use addressing::{AddressingMode, Operand};
pub use bus::{Bus, FlatRam};
pub use cpu::{status, Cpu, IRQ_VECTOR, STACK_BASE};
pub use opcodes::{Instruction, Mnemonic, OPCODE_TABLE};

use thiserror::Error;

/// Errors surfaced by [`Cpu::step`].
///
/// The bus callbacks are total, so the only failure the core itself can
/// produce is an undefined opcode. The error is fatal: PC is left pointing
/// at the faulting byte and stepping again returns the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The dispatcher fetched a byte that is not an NMOS 6502 instruction.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode {
        /// The undefined opcode byte.
        opcode: u8,
        /// The address it was fetched from.
        pc: u16,
    },
}
