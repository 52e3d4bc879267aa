//! # Memory Model
//!
//! The LS-8 address space is a flat, byte-addressable array of 256 cells.
//! Unlike larger machines there is no bus abstraction or memory mapping:
//! program, data, and stack all live in the same 256 bytes. The stack grows
//! downward from just below the top of memory (see [`crate::registers`]),
//! leaving low addresses for the loaded program.
//!
//! Every access is bounds checked. The address space is small enough that an
//! out-of-range address is always a program bug (for example the program
//! counter walking off the end of a program with no HLT), so it is reported
//! as a hard [`ExecutionError::OutOfBounds`] rather than wrapped.

use crate::ExecutionError;

/// Size of the LS-8 address space in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Flat 256-byte memory.
///
/// Created zero-filled, populated by the loader, and mutated during execution
/// only by stack operations (PUSH/POP, CALL/RET). Never resized.
///
/// # Examples
///
/// ```
/// use ls8::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x10, 0x42).unwrap();
/// assert_eq!(mem.read(0x10).unwrap(), 0x42);
///
/// // Addresses outside [0, 256) are rejected.
/// assert!(mem.read(0x100).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Creates a new zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// Fails with [`ExecutionError::OutOfBounds`] if `addr` is outside the
    /// 256-byte address space.
    pub fn read(&self, addr: usize) -> Result<u8, ExecutionError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(ExecutionError::OutOfBounds { addr })
    }

    /// Writes `value` to the byte at `addr`.
    ///
    /// Same bounds contract as [`read`](Self::read).
    pub fn write(&mut self, addr: usize, value: u8) -> Result<(), ExecutionError> {
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecutionError::OutOfBounds { addr }),
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// Fails with [`ExecutionError::OutOfBounds`] if the program is longer
    /// than the address space.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        if program.len() > MEMORY_SIZE {
            return Err(ExecutionError::OutOfBounds {
                addr: program.len() - 1,
            });
        }
        self.cells[..program.len()].copy_from_slice(program);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
