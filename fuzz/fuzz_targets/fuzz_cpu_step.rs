//! Fuzz target: step the CPU over arbitrary state and memory.
//!
//! Any instruction sequence, legal or not, must leave the core panic-free
//! with its architectural invariants intact.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{status, Cpu, FlatRam};

/// Arbitrary register file to start from.
#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    sr: u8,
    entry_pc: u16,
}

/// Arbitrary memory regions covering the areas instructions can reach.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    instruction_bytes: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    vector: [u8; 2],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut ram = FlatRam::new();
    ram.load(0x0000, &input.memory.zero_page);
    ram.load(0x0100, &input.memory.stack_page);
    ram.load(0x8000, &input.memory.instruction_bytes);
    ram.load(0xFFFE, &input.memory.vector);

    let mut cpu = Cpu::new(ram);
    cpu.reset(0x8000);
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_sr(input.registers.sr);

    for _ in 0..8 {
        // An illegal opcode is a valid outcome; it just ends the run.
        if cpu.step().is_err() {
            break;
        }
        assert_eq!(cpu.sr() & status::UNUSED, status::UNUSED);
    }

    // One more reset from wherever the fuzz case landed must be clean.
    cpu.reset(input.registers.entry_pc);
    assert_eq!(cpu.pc(), input.registers.entry_pc);
    assert_eq!(cpu.sr(), status::UNUSED);
});
