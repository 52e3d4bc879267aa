//! # Output Instructions
//!
//! PRN emits register values to the CPU's output sink, one decimal value per
//! line, in execution order. The sink is injected (see
//! [`Cpu::with_output`](crate::Cpu::with_output)), so the library never
//! writes to stdout on its own.

use std::io::Write;

use crate::cpu::Cpu;
use crate::ExecutionError;

/// Executes PRN (Print Register).
///
/// Writes `reg[operand1]` in decimal, followed by a newline, to the output
/// sink.
///
/// Operands: register index (2 bytes total).
/// Fails with [`ExecutionError::Output`] if the sink rejects the write.
pub(crate) fn execute_prn<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let index = cpu.operand(1)? as usize;
    let value = cpu.regs.get(index)?;
    writeln!(cpu.output, "{value}")?;
    Ok(())
}
