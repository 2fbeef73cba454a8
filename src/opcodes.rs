//! # Opcode Decode Table
//!
//! The single source of truth mapping each of the 256 opcode byte values to
//! its instruction. The 151 documented NMOS 6502 encodings carry a
//! [`Mnemonic`] and an [`AddressingMode`]; the remaining 105 slots are
//! `None` and surface as [`StepError::IllegalOpcode`](crate::StepError)
//! when fetched.
//!
//! The encoding follows the masswerk.at 6502 instruction-set reference.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

/// One decoded instruction: what to do and where its data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub mnemonic: Mnemonic,
    /// How the operand bytes after the opcode are interpreted.
    pub mode: AddressingMode,
}

/// 256-entry decode table indexed by opcode byte; `None` marks the
/// undefined encodings.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Instruction>; 256] = build_table();

const fn op(mnemonic: Mnemonic, mode: AddressingMode) -> Option<Instruction> {
    Some(Instruction { mnemonic, mode })
}

#[rustfmt::skip]
const fn build_table() -> [Option<Instruction>; 256] {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<Instruction>; 256] = [None; 256];

    // Load / store
    t[0xA9] = op(Lda, Immediate);
    t[0xA5] = op(Lda, ZeroPage);
    t[0xB5] = op(Lda, ZeroPageX);
    t[0xAD] = op(Lda, Absolute);
    t[0xBD] = op(Lda, AbsoluteX);
    t[0xB9] = op(Lda, AbsoluteY);
    t[0xA1] = op(Lda, IndirectX);
    t[0xB1] = op(Lda, IndirectY);
    t[0xA2] = op(Ldx, Immediate);
    t[0xA6] = op(Ldx, ZeroPage);
    t[0xB6] = op(Ldx, ZeroPageY);
    t[0xAE] = op(Ldx, Absolute);
    t[0xBE] = op(Ldx, AbsoluteY);
    t[0xA0] = op(Ldy, Immediate);
    t[0xA4] = op(Ldy, ZeroPage);
    t[0xB4] = op(Ldy, ZeroPageX);
    t[0xAC] = op(Ldy, Absolute);
    t[0xBC] = op(Ldy, AbsoluteX);
    t[0x85] = op(Sta, ZeroPage);
    t[0x95] = op(Sta, ZeroPageX);
    t[0x8D] = op(Sta, Absolute);
    t[0x9D] = op(Sta, AbsoluteX);
    t[0x99] = op(Sta, AbsoluteY);
    t[0x81] = op(Sta, IndirectX);
    t[0x91] = op(Sta, IndirectY);
    t[0x86] = op(Stx, ZeroPage);
    t[0x96] = op(Stx, ZeroPageY);
    t[0x8E] = op(Stx, Absolute);
    t[0x84] = op(Sty, ZeroPage);
    t[0x94] = op(Sty, ZeroPageX);
    t[0x8C] = op(Sty, Absolute);

    // Register transfers
    t[0xAA] = op(Tax, Implied);
    t[0xA8] = op(Tay, Implied);
    t[0xBA] = op(Tsx, Implied);
    t[0x8A] = op(Txa, Implied);
    t[0x9A] = op(Txs, Implied);
    t[0x98] = op(Tya, Implied);

    // Arithmetic
    t[0x69] = op(Adc, Immediate);
    t[0x65] = op(Adc, ZeroPage);
    t[0x75] = op(Adc, ZeroPageX);
    t[0x6D] = op(Adc, Absolute);
    t[0x7D] = op(Adc, AbsoluteX);
    t[0x79] = op(Adc, AbsoluteY);
    t[0x61] = op(Adc, IndirectX);
    t[0x71] = op(Adc, IndirectY);
    t[0xE9] = op(Sbc, Immediate);
    t[0xE5] = op(Sbc, ZeroPage);
    t[0xF5] = op(Sbc, ZeroPageX);
    t[0xED] = op(Sbc, Absolute);
    t[0xFD] = op(Sbc, AbsoluteX);
    t[0xF9] = op(Sbc, AbsoluteY);
    t[0xE1] = op(Sbc, IndirectX);
    t[0xF1] = op(Sbc, IndirectY);
    t[0xC9] = op(Cmp, Immediate);
    t[0xC5] = op(Cmp, ZeroPage);
    t[0xD5] = op(Cmp, ZeroPageX);
    t[0xCD] = op(Cmp, Absolute);
    t[0xDD] = op(Cmp, AbsoluteX);
    t[0xD9] = op(Cmp, AbsoluteY);
    t[0xC1] = op(Cmp, IndirectX);
    t[0xD1] = op(Cmp, IndirectY);
    t[0xE0] = op(Cpx, Immediate);
    t[0xE4] = op(Cpx, ZeroPage);
    t[0xEC] = op(Cpx, Absolute);
    t[0xC0] = op(Cpy, Immediate);
    t[0xC4] = op(Cpy, ZeroPage);
    t[0xCC] = op(Cpy, Absolute);

    // Increment / decrement
    t[0xE6] = op(Inc, ZeroPage);
    t[0xF6] = op(Inc, ZeroPageX);
    t[0xEE] = op(Inc, Absolute);
    t[0xFE] = op(Inc, AbsoluteX);
    t[0xE8] = op(Inx, Implied);
    t[0xC8] = op(Iny, Implied);
    t[0xC6] = op(Dec, ZeroPage);
    t[0xD6] = op(Dec, ZeroPageX);
    t[0xCE] = op(Dec, Absolute);
    t[0xDE] = op(Dec, AbsoluteX);
    t[0xCA] = op(Dex, Implied);
    t[0x88] = op(Dey, Implied);

    // Logical
    t[0x29] = op(And, Immediate);
    t[0x25] = op(And, ZeroPage);
    t[0x35] = op(And, ZeroPageX);
    t[0x2D] = op(And, Absolute);
    t[0x3D] = op(And, AbsoluteX);
    t[0x39] = op(And, AbsoluteY);
    t[0x21] = op(And, IndirectX);
    t[0x31] = op(And, IndirectY);
    t[0x09] = op(Ora, Immediate);
    t[0x05] = op(Ora, ZeroPage);
    t[0x15] = op(Ora, ZeroPageX);
    t[0x0D] = op(Ora, Absolute);
    t[0x1D] = op(Ora, AbsoluteX);
    t[0x19] = op(Ora, AbsoluteY);
    t[0x01] = op(Ora, IndirectX);
    t[0x11] = op(Ora, IndirectY);
    t[0x49] = op(Eor, Immediate);
    t[0x45] = op(Eor, ZeroPage);
    t[0x55] = op(Eor, ZeroPageX);
    t[0x4D] = op(Eor, Absolute);
    t[0x5D] = op(Eor, AbsoluteX);
    t[0x59] = op(Eor, AbsoluteY);
    t[0x41] = op(Eor, IndirectX);
    t[0x51] = op(Eor, IndirectY);
    t[0x24] = op(Bit, ZeroPage);
    t[0x2C] = op(Bit, Absolute);

    // Shifts and rotates
    t[0x0A] = op(Asl, Accumulator);
    t[0x06] = op(Asl, ZeroPage);
    t[0x16] = op(Asl, ZeroPageX);
    t[0x0E] = op(Asl, Absolute);
    t[0x1E] = op(Asl, AbsoluteX);
    t[0x4A] = op(Lsr, Accumulator);
    t[0x46] = op(Lsr, ZeroPage);
    t[0x56] = op(Lsr, ZeroPageX);
    t[0x4E] = op(Lsr, Absolute);
    t[0x5E] = op(Lsr, AbsoluteX);
    t[0x2A] = op(Rol, Accumulator);
    t[0x26] = op(Rol, ZeroPage);
    t[0x36] = op(Rol, ZeroPageX);
    t[0x2E] = op(Rol, Absolute);
    t[0x3E] = op(Rol, AbsoluteX);
    t[0x6A] = op(Ror, Accumulator);
    t[0x66] = op(Ror, ZeroPage);
    t[0x76] = op(Ror, ZeroPageX);
    t[0x6E] = op(Ror, Absolute);
    t[0x7E] = op(Ror, AbsoluteX);

    // Branches
    t[0x10] = op(Bpl, Relative);
    t[0x30] = op(Bmi, Relative);
    t[0x50] = op(Bvc, Relative);
    t[0x70] = op(Bvs, Relative);
    t[0x90] = op(Bcc, Relative);
    t[0xB0] = op(Bcs, Relative);
    t[0xD0] = op(Bne, Relative);
    t[0xF0] = op(Beq, Relative);

    // Jumps and subroutines
    t[0x4C] = op(Jmp, Absolute);
    t[0x6C] = op(Jmp, Indirect);
    t[0x20] = op(Jsr, Absolute);
    t[0x60] = op(Rts, Implied);
    t[0x00] = op(Brk, Implied);
    t[0x40] = op(Rti, Implied);

    // Stack
    t[0x48] = op(Pha, Implied);
    t[0x68] = op(Pla, Implied);
    t[0x08] = op(Php, Implied);
    t[0x28] = op(Plp, Implied);

    // Flag manipulation
    t[0x18] = op(Clc, Implied);
    t[0x38] = op(Sec, Implied);
    t[0xD8] = op(Cld, Implied);
    t[0xF8] = op(Sed, Implied);
    t[0x58] = op(Cli, Implied);
    t[0x78] = op(Sei, Implied);
    t[0xB8] = op(Clv, Implied);

    // Miscellaneous
    t[0xEA] = op(Nop, Implied);

    t
}
