//! # Addressing Modes and Operands
//!
//! The 6502 encodes where an instruction's data lives in one of thirteen
//! addressing modes. The resolver in [`Cpu`](crate::Cpu) turns a mode into
//! an [`Operand`] — either the accumulator, an immediate byte already
//! consumed from the instruction stream, or an effective address on the bus.

use crate::bus::Bus;
use crate::cpu::Cpu;

/// How an instruction interprets the bytes that follow its opcode.
///
/// Operand sizes:
///
/// - **0 bytes**: `Implied`, `Accumulator`
/// - **1 byte**: `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`,
///   `Relative`, `IndirectX`, `IndirectY`
/// - **2 bytes**: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the opcode (CLC, RTS, NOP).
    Implied,

    /// Operates directly on the accumulator (ASL A, ROR A).
    Accumulator,

    /// 8-bit constant embedded in the instruction (LDA #$10).
    Immediate,

    /// 8-bit address into page zero (LDA $80).
    ZeroPage,

    /// Zero-page address plus X, wrapping within page zero (LDA $80,X).
    ZeroPageX,

    /// Zero-page address plus Y, wrapping within page zero (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit offset from the address after the branch instruction
    /// (BEQ label).
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address plus X, wrapping mod 65536 (LDA $1234,X).
    AbsoluteX,

    /// 16-bit address plus Y, wrapping mod 65536 (LDA $1234,Y).
    AbsoluteY,

    /// Jump through a 16-bit pointer; only JMP uses it (JMP ($FFFC)).
    Indirect,

    /// Indexed indirect: the zero-page operand plus X names a zero-page
    /// pointer, which is dereferenced (LDA ($40,X)).
    IndirectX,

    /// Indirect indexed: the zero-page operand names a pointer, and Y is
    /// added to the pointed-to address (LDA ($40),Y).
    IndirectY,
}

/// A resolved operand: where an instruction reads its value from and writes
/// its result to.
///
/// Read-modify-write instructions (`ASL`, `LSR`, `ROL`, `ROR`, `INC`,
/// `DEC`) hold on to one `Operand` for both halves, so the same
/// destination — accumulator or memory cell — receives the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The accumulator register.
    Accumulator,

    /// An immediate byte, already fetched while the resolver advanced PC.
    Immediate(u8),

    /// An effective address on the bus.
    Memory(u16),
}

impl Operand {
    /// Reads the operand value, issuing a bus read for `Memory`.
    pub(crate) fn load<B: Bus>(self, cpu: &mut Cpu<B>) -> u8 {
        match self {
            Operand::Accumulator => cpu.a,
            Operand::Immediate(value) => value,
            Operand::Memory(addr) => cpu.bus.read(addr),
        }
    }

    /// Writes a result back to the operand's destination.
    pub(crate) fn store<B: Bus>(self, cpu: &mut Cpu<B>, value: u8) {
        match self {
            Operand::Accumulator => cpu.a = value,
            Operand::Immediate(_) => unreachable!("store to an immediate operand"),
            Operand::Memory(addr) => cpu.bus.write(addr, value),
        }
    }

    /// The effective address, for control transfers (JMP, JSR, branches).
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Memory(addr) => addr,
            _ => unreachable!("operand has no effective address"),
        }
    }
}
