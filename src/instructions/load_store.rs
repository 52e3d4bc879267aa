//! # Load Instructions
//!
//! LDI is the only way to get an immediate value into the machine: a
//! three-byte instruction carrying a register index and a literal byte.

use std::io::Write;

use crate::cpu::Cpu;
use crate::ExecutionError;

/// Executes LDI (Load Immediate).
///
/// `reg[operand1] = operand2`.
///
/// Operands: register index, immediate value (3 bytes total).
/// Fails with [`ExecutionError::InvalidRegister`] if the register index is
/// out of range.
pub(crate) fn execute_ldi<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let index = cpu.operand(1)? as usize;
    let value = cpu.operand(2)?;
    cpu.regs.set(index, value)
}
