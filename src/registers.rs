//! # Register File
//!
//! Eight general-purpose 8-bit registers, R0 through R7. R7 doubles as the
//! stack pointer by convention; it has no special type, only a reserved index
//! and a documented reset value. The register file is the single authoritative
//! home of the stack pointer -- the CPU never caches it elsewhere, so it
//! cannot diverge from what a program observes through R7.

use crate::ExecutionError;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP: usize = 7;

/// Reset value of the stack pointer.
///
/// The stack grows downward from `0xF4`, near the top of the 256-byte address
/// space, leaving low memory for the loaded program.
pub const SP_INIT: u8 = 0xF4;

/// The LS-8 register file.
///
/// All registers are zeroed at reset except R7, which holds [`SP_INIT`].
///
/// # Examples
///
/// ```
/// use ls8::{RegisterFile, SP, SP_INIT};
///
/// let mut regs = RegisterFile::new();
/// assert_eq!(regs.get(SP).unwrap(), SP_INIT);
///
/// regs.set(0, 42).unwrap();
/// assert_eq!(regs.get(0).unwrap(), 42);
///
/// // Register indices outside [0, 8) are rejected.
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file in the reset state.
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = SP_INIT;
        Self { regs }
    }

    /// Returns the value of register `index`.
    ///
    /// Fails with [`ExecutionError::InvalidRegister`] if `index` is not in
    /// `[0, 8)`.
    pub fn get(&self, index: usize) -> Result<u8, ExecutionError> {
        self.regs
            .get(index)
            .copied()
            .ok_or(ExecutionError::InvalidRegister { index })
    }

    /// Sets register `index` to `value`.
    ///
    /// Same index contract as [`get`](Self::get).
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), ExecutionError> {
        match self.regs.get_mut(index) {
            Some(reg) => {
                *reg = value;
                Ok(())
            }
            None => Err(ExecutionError::InvalidRegister { index }),
        }
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (R7).
    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP] = value;
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
