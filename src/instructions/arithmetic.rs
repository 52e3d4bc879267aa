//! # Arithmetic Instructions
//!
//! ADD, SUB, MUL, and DIV share one shape: read two register indices from the
//! operand bytes, feed both register *values* through the ALU, and write the
//! result back into the first register. The ALU itself is pure
//! (see [`crate::alu`]); this handler owns all register mutation.

use std::io::Write;

use crate::alu::{self, AluError, AluOp};
use crate::cpu::Cpu;
use crate::ExecutionError;

/// Executes an ALU instruction (ADD, SUB, MUL, DIV).
///
/// `reg[operand1] = alu(op, reg[operand1], reg[operand2])`.
///
/// Operands: destination register index, source register index (3 bytes
/// total). A [`ExecutionError::DivisionByZero`] fault leaves every register
/// unchanged: the write-back only happens once the ALU has produced a result.
pub(crate) fn execute_alu<W: Write>(cpu: &mut Cpu<W>, op: AluOp) -> Result<(), ExecutionError> {
    let reg_a = cpu.operand(1)? as usize;
    let reg_b = cpu.operand(2)? as usize;

    let a = cpu.regs.get(reg_a)?;
    let b = cpu.regs.get(reg_b)?;

    let result = alu::apply(op, a, b).map_err(|err| match err {
        AluError::DivisionByZero => ExecutionError::DivisionByZero { pc: cpu.pc },
    })?;

    cpu.regs.set(reg_a, result)
}
