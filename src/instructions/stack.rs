//! # Stack Operations
//!
//! The LS-8 stack lives in main memory and grows downward from the stack
//! pointer's reset value (`0xF4`), below any loaded program. R7 is the stack
//! pointer: PUSH decrements it and writes, POP reads and increments it. Both
//! directions are guarded -- growing past address 0 is a stack overflow, and
//! popping with the pointer back at its reset mark is an underflow.

use std::io::Write;

use crate::cpu::Cpu;
use crate::ExecutionError;

/// Executes PUSH.
///
/// `sp -= 1; memory[sp] = reg[operand1]`.
///
/// Operands: register index (2 bytes total).
/// Fails with [`ExecutionError::StackOverflow`] if the stack is full.
pub(crate) fn execute_push<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let index = cpu.operand(1)? as usize;
    let value = cpu.regs.get(index)?;
    cpu.push_byte(value)
}

/// Executes POP.
///
/// `reg[operand1] = memory[sp]; sp += 1`.
///
/// Operands: register index (2 bytes total).
/// Fails with [`ExecutionError::StackUnderflow`] if the stack is empty.
pub(crate) fn execute_pop<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let index = cpu.operand(1)? as usize;
    let value = cpu.pop_byte()?;
    cpu.regs.set(index, value)
}
