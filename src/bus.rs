//! # Host Bus Interface
//!
//! The CPU core holds no memory of its own. Every byte it moves — opcode
//! fetches, operand bytes, indirect pointers, stack traffic, effective
//! address reads and writes — is a call into the host through the [`Bus`]
//! trait. This keeps the core embeddable: the host decides what lives where
//! (RAM, ROM, memory-mapped I/O, banking) and the core never needs to know.
//!
//! [`FlatRam`] is the bundled 64KB flat implementation used by the test
//! suite and by simple hosts that just want to run a binary image.

/// The two host callbacks the core drives all memory traffic through.
///
/// Both operations are total: the 6502 has no bus-error mechanism, so reads
/// from unmapped regions return whatever the host chooses and writes to
/// read-only regions may be ignored. `read` takes `&mut self` because reads
/// can have side effects in the host (memory-mapped I/O registers that
/// clear on read, for example); the core never assumes purity and never
/// reads an address it is not architecturally required to read.
///
/// # Examples
///
/// A 32KB RAM / 32KB ROM split:
///
/// ```
/// use mos6502::Bus;
///
/// struct RomRam {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl Bus for RomRam {
///     fn read(&mut self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored.
///     }
/// }
/// ```
pub trait Bus {
    /// Reads one byte from the 16-bit address bus.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes one byte to the 16-bit address bus.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory.
///
/// All 65536 addresses map to one contiguous, writable array initialized to
/// zero. Useful for tests and for hosts that load a raw binary image and
/// drive the CPU over it.
///
/// # Examples
///
/// ```
/// use mos6502::{Bus, FlatRam};
///
/// let mut ram = FlatRam::new();
/// ram.load(0x0400, &[0xEA, 0xEA]); // two NOPs
/// assert_eq!(ram.peek(0x0400), 0xEA);
/// ```
pub struct FlatRam {
    data: Box<[u8; 0x10000]>,
}

impl FlatRam {
    /// Creates a flat memory with every byte zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies a program image into memory starting at `base`.
    ///
    /// # Panics
    ///
    /// Panics if the image runs past the top of the address space.
    pub fn load(&mut self, base: u16, image: &[u8]) {
        let base = base as usize;
        assert!(
            base + image.len() <= self.data.len(),
            "image of {} bytes does not fit at 0x{:04X}",
            image.len(),
            base
        );
        self.data[base..base + image.len()].copy_from_slice(image);
    }

    /// Reads a byte without going through the bus callback.
    ///
    /// Handy for inspecting memory from tests while the CPU owns the bus.
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl Default for FlatRam {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FlatRam {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
