//! # CPU State and Execution
//!
//! [`Cpu`] bundles the architected state of one 6502 — program counter,
//! accumulator, index registers, stack pointer, and the packed NV-BDIZC
//! status register — together with the host bus it drives. The host creates
//! the CPU, points it at a program with [`Cpu::reset`], and advances it one
//! instruction at a time with [`Cpu::step`].
//!
//! Within one `step` the flow is: fetch the opcode at PC, look it up in
//! [`OPCODE_TABLE`], resolve the addressing mode (advancing PC over the
//! operand bytes), and execute the primitive. Between steps the CPU is
//! always at "PC points to the next opcode"; there is no other persistent
//! machine state.

use log::trace;

use crate::addressing::{AddressingMode, Operand};
use crate::bus::Bus;
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::StepError;

/// Status register bit masks, NV-BDIZC.
pub mod status {
    /// N — set when bit 7 of a result is 1.
    pub const NEGATIVE: u8 = 1 << 7;
    /// V — set on signed overflow.
    pub const OVERFLOW: u8 = 1 << 6;
    /// Bit 5 is wired high on the silicon and always reads as 1.
    pub const UNUSED: u8 = 1 << 5;
    /// B — distinguishes BRK/PHP pushes from hardware interrupt pushes.
    pub const BREAK: u8 = 1 << 4;
    /// D — decimal mode. Storable, but has no arithmetic effect in this core.
    pub const DECIMAL: u8 = 1 << 3;
    /// I — interrupt disable.
    pub const INTERRUPT: u8 = 1 << 2;
    /// Z — set when a result is zero.
    pub const ZERO: u8 = 1 << 1;
    /// C — carry out of an addition, or "no borrow" in subtraction.
    pub const CARRY: u8 = 1 << 0;
}

/// The stack lives in page 1: pushes and pulls target `0x0100 + SP`.
pub const STACK_BASE: u16 = 0x0100;

/// BRK loads PC from the little-endian word at `0xFFFE`/`0xFFFF`.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// One 6502 core and the bus it owns.
///
/// All state is per-instance, so any number of CPUs can run side by side in
/// one process, each over its own memory.
///
/// # Examples
///
/// ```
/// use mos6502::{Cpu, FlatRam};
///
/// let mut ram = FlatRam::new();
/// ram.load(0x0400, &[0xE8, 0xE8]); // INX; INX
///
/// let mut cpu = Cpu::new(ram);
/// cpu.reset(0x0400);
/// cpu.step().unwrap();
/// cpu.step().unwrap();
/// assert_eq!(cpu.x(), 2);
/// assert_eq!(cpu.pc(), 0x0402);
/// ```
pub struct Cpu<B: Bus> {
    /// Program counter: address of the next byte to fetch.
    pub(crate) pc: u16,

    /// Accumulator.
    pub(crate) a: u8,

    /// Index X.
    pub(crate) x: u8,

    /// Index Y.
    pub(crate) y: u8,

    /// Stack pointer into page 1.
    pub(crate) sp: u8,

    /// Packed status register, NV-BDIZC.
    pub(crate) sr: u8,

    /// The host bus.
    pub(crate) bus: B,
}

impl<B: Bus> Cpu<B> {
    /// Creates a CPU over the given bus, in the post-reset register state.
    ///
    /// No bus traffic happens here: unlike conforming hardware, the core
    /// does not fetch a reset vector. The host chooses the entry point and
    /// passes it to [`reset`](Cpu::reset).
    pub fn new(bus: B) -> Self {
        Self {
            pc: 0x0000,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            sr: status::UNUSED,
            bus,
        }
    }

    /// Resets the architected state and points PC at `entry_pc`.
    ///
    /// After reset: A = X = Y = 0, SP = 0xFD, and SR = 0x20 (only the
    /// wired-high bit). The I flag is deliberately left clear to match the
    /// reference implementation this core is validated against; conforming
    /// silicon would set it. Use [`reset_strict`](Cpu::reset_strict) for
    /// the hardware behavior.
    pub fn reset(&mut self, entry_pc: u16) {
        self.pc = entry_pc;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.sr = status::UNUSED;
        trace!("reset: pc=0x{:04X} sr=0x{:02X}", self.pc, self.sr);
    }

    /// Like [`reset`](Cpu::reset), but also sets the I flag the way the
    /// silicon does at power-on.
    pub fn reset_strict(&mut self, entry_pc: u16) {
        self.reset(entry_pc);
        self.sr |= status::INTERRUPT;
    }

    /// Fetches, decodes, and executes exactly one instruction.
    ///
    /// Issues every bus access the instruction architecturally performs, in
    /// order, and returns with PC on the next opcode. On an undefined
    /// opcode the step fails with [`StepError::IllegalOpcode`] and leaves
    /// all state — PC included — exactly as it was, so the faulting
    /// instruction can be inspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{Cpu, FlatRam, StepError};
    ///
    /// let mut ram = FlatRam::new();
    /// ram.load(0x0400, &[0x02]); // undefined encoding
    ///
    /// let mut cpu = Cpu::new(ram);
    /// cpu.reset(0x0400);
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(StepError::IllegalOpcode { opcode: 0x02, pc: 0x0400 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0400);
    /// ```
    pub fn step(&mut self) -> Result<(), StepError> {
        let opcode = self.bus.read(self.pc);
        let Some(instruction) = OPCODE_TABLE[opcode as usize] else {
            trace!("illegal opcode 0x{:02X} at 0x{:04X}", opcode, self.pc);
            return Err(StepError::IllegalOpcode {
                opcode,
                pc: self.pc,
            });
        };
        self.pc = self.pc.wrapping_add(1);

        let mode = instruction.mode;
        match instruction.mnemonic {
            Mnemonic::Adc => alu::adc(self, mode),
            Mnemonic::And => alu::and(self, mode),
            Mnemonic::Asl => shifts::asl(self, mode),
            Mnemonic::Bcc => branches::bcc(self),
            Mnemonic::Bcs => branches::bcs(self),
            Mnemonic::Beq => branches::beq(self),
            Mnemonic::Bit => alu::bit(self, mode),
            Mnemonic::Bmi => branches::bmi(self),
            Mnemonic::Bne => branches::bne(self),
            Mnemonic::Bpl => branches::bpl(self),
            Mnemonic::Brk => control::brk(self),
            Mnemonic::Bvc => branches::bvc(self),
            Mnemonic::Bvs => branches::bvs(self),
            Mnemonic::Clc => flags::clc(self),
            Mnemonic::Cld => flags::cld(self),
            Mnemonic::Cli => flags::cli(self),
            Mnemonic::Clv => flags::clv(self),
            Mnemonic::Cmp => alu::cmp(self, mode),
            Mnemonic::Cpx => alu::cpx(self, mode),
            Mnemonic::Cpy => alu::cpy(self, mode),
            Mnemonic::Dec => inc_dec::dec(self, mode),
            Mnemonic::Dex => inc_dec::dex(self),
            Mnemonic::Dey => inc_dec::dey(self),
            Mnemonic::Eor => alu::eor(self, mode),
            Mnemonic::Inc => inc_dec::inc(self, mode),
            Mnemonic::Inx => inc_dec::inx(self),
            Mnemonic::Iny => inc_dec::iny(self),
            Mnemonic::Jmp => control::jmp(self, mode),
            Mnemonic::Jsr => control::jsr(self, mode),
            Mnemonic::Lda => load_store::lda(self, mode),
            Mnemonic::Ldx => load_store::ldx(self, mode),
            Mnemonic::Ldy => load_store::ldy(self, mode),
            Mnemonic::Lsr => shifts::lsr(self, mode),
            Mnemonic::Nop => {}
            Mnemonic::Ora => alu::ora(self, mode),
            Mnemonic::Pha => stack::pha(self),
            Mnemonic::Php => stack::php(self),
            Mnemonic::Pla => stack::pla(self),
            Mnemonic::Plp => stack::plp(self),
            Mnemonic::Rol => shifts::rol(self, mode),
            Mnemonic::Ror => shifts::ror(self, mode),
            Mnemonic::Rti => control::rti(self),
            Mnemonic::Rts => control::rts(self),
            Mnemonic::Sbc => alu::sbc(self, mode),
            Mnemonic::Sec => flags::sec(self),
            Mnemonic::Sed => flags::sed(self),
            Mnemonic::Sei => flags::sei(self),
            Mnemonic::Sta => load_store::sta(self, mode),
            Mnemonic::Stx => load_store::stx(self, mode),
            Mnemonic::Sty => load_store::sty(self, mode),
            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Tsx => transfer::tsx(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Txs => transfer::txs(self),
            Mnemonic::Tya => transfer::tya(self),
        }

        Ok(())
    }

    // ========== Fetch and addressing resolution ==========

    /// Reads the byte at PC and advances PC past it.
    pub(crate) fn fetch(&mut self) -> u8 {
        let byte = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word from the instruction stream.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch() as u16;
        let hi = self.fetch() as u16;
        hi << 8 | lo
    }

    /// Reads a little-endian word at `addr`, the high byte from `addr + 1`
    /// with 16-bit wrap.
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.bus.read(addr) as u16;
        let hi = self.bus.read(addr.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    /// Resolves an addressing mode into an [`Operand`], advancing PC over
    /// the operand bytes and issuing any pointer reads the mode requires.
    ///
    /// Zero-page indexing wraps within page zero; absolute indexing wraps
    /// mod 65536. The indirect modes fetch their pointer high byte from
    /// `(P + 1) mod 256` within page zero, while `Indirect` (JMP only)
    /// reads the straight 16-bit `P + 1` — the silicon's page-wrap quirk is
    /// deliberately not reproduced.
    pub(crate) fn operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch()),
            AddressingMode::ZeroPage => Operand::Memory(self.fetch() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch();
                Operand::Memory(base.wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch();
                Operand::Memory(base.wrapping_add(self.y) as u16)
            }
            AddressingMode::Relative => {
                // Offset is signed and applies to the PC after the operand.
                let offset = self.fetch() as i8;
                Operand::Memory(self.pc.wrapping_add_signed(offset as i16))
            }
            AddressingMode::Absolute => Operand::Memory(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::Memory(base.wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::Memory(base.wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();
                Operand::Memory(self.read_word(ptr))
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch().wrapping_add(self.x);
                let lo = self.bus.read(ptr as u16) as u16;
                let hi = self.bus.read(ptr.wrapping_add(1) as u16) as u16;
                Operand::Memory(hi << 8 | lo)
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch();
                let lo = self.bus.read(ptr as u16) as u16;
                let hi = self.bus.read(ptr.wrapping_add(1) as u16) as u16;
                Operand::Memory((hi << 8 | lo).wrapping_add(self.y as u16))
            }
            AddressingMode::Implied => unreachable!("implied instructions take no operand"),
        }
    }

    // ========== Stack discipline ==========

    /// Pushes a byte: write to `0x0100 + SP`, then decrement SP (mod 256).
    pub(crate) fn push(&mut self, value: u8) {
        self.bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increment SP (mod 256), then read from `0x0100 + SP`.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.bus.read(STACK_BASE | self.sp as u16)
    }

    // ========== Flag helpers ==========

    /// True when the SR bit in `mask` is set.
    pub(crate) fn flag(&self, mask: u8) -> bool {
        self.sr & mask != 0
    }

    /// Sets or clears the SR bits in `mask`.
    pub(crate) fn set_flag(&mut self, mask: u8, set: bool) {
        if set {
            self.sr |= mask;
        } else {
            self.sr &= !mask;
        }
    }

    /// Derives N and Z from a result byte.
    pub(crate) fn update_nz(&mut self, value: u8) {
        self.set_flag(status::NEGATIVE, value & 0x80 != 0);
        self.set_flag(status::ZERO, value == 0);
    }

    // ========== Register accessors ==========

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Index X.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Index Y.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer. The full stack address is `0x0100 + SP`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// The packed status register, NV-BDIZC. Bit 5 reads as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{status, Cpu, FlatRam};
    ///
    /// let mut cpu = Cpu::new(FlatRam::new());
    /// cpu.reset(0x0400);
    /// assert_eq!(cpu.sr(), status::UNUSED); // 0x20: reset leaves I clear
    /// ```
    pub fn sr(&self) -> u8 {
        self.sr | status::UNUSED
    }

    // ========== Status flag accessors ==========

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.flag(status::NEGATIVE)
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.flag(status::OVERFLOW)
    }

    /// Break flag.
    pub fn flag_b(&self) -> bool {
        self.flag(status::BREAK)
    }

    /// Decimal flag. Storable only; arithmetic ignores it.
    pub fn flag_d(&self) -> bool {
        self.flag(status::DECIMAL)
    }

    /// Interrupt-disable flag.
    pub fn flag_i(&self) -> bool {
        self.flag(status::INTERRUPT)
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.flag(status::ZERO)
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.flag(status::CARRY)
    }

    // ========== Register setters (harness use) ==========

    /// Sets the program counter, e.g. to start a loaded functional test.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets index X.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets index Y.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the packed status register. Bit 5 is forced high.
    pub fn set_sr(&mut self, value: u8) {
        self.sr = value | status::UNUSED;
    }

    /// Sets the carry flag.
    pub fn set_flag_c(&mut self, set: bool) {
        self.set_flag(status::CARRY, set);
    }

    /// Sets the zero flag.
    pub fn set_flag_z(&mut self, set: bool) {
        self.set_flag(status::ZERO, set);
    }

    /// Sets the interrupt-disable flag.
    pub fn set_flag_i(&mut self, set: bool) {
        self.set_flag(status::INTERRUPT, set);
    }

    /// Sets the decimal flag.
    pub fn set_flag_d(&mut self, set: bool) {
        self.set_flag(status::DECIMAL, set);
    }

    /// Sets the break flag.
    pub fn set_flag_b(&mut self, set: bool) {
        self.set_flag(status::BREAK, set);
    }

    /// Sets the overflow flag.
    pub fn set_flag_v(&mut self, set: bool) {
        self.set_flag(status::OVERFLOW, set);
    }

    /// Sets the negative flag.
    pub fn set_flag_n(&mut self, set: bool) {
        self.set_flag(status::NEGATIVE, set);
    }

    // ========== Bus access ==========

    /// Shared access to the host bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the host bus, e.g. for a test to seed memory.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU and hands the bus back to the host.
    pub fn into_bus(self) -> B {
        self.bus
    }
}
