//! # Arithmetic Logic Unit
//!
//! Pure binary operations on register *values*. The ALU never touches the
//! register file: the caller reads both operands, applies the operation, and
//! writes the result back into the first operand's register. This keeps the
//! ALU trivially testable and keeps register mutation in one place (the
//! instruction handlers).
//!
//! ## Register width
//!
//! Registers are 8 bits wide, and ADD/SUB/MUL wrap modulo 256
//! (`wrapping_add` and friends). DIV is integer division and fails with
//! [`AluError::DivisionByZero`] rather than faulting; the caller must leave
//! the destination register untouched in that case.

use thiserror::Error;

/// Faults the ALU can raise on its own.
///
/// The ALU has no notion of a program counter; the CPU attaches the faulting
/// address when it converts this into an [`crate::ExecutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AluError {
    /// The divisor operand was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Binary operations the ALU supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Integer division; fails on a zero divisor.
    Div,
}

/// Applies `op` to the operand values `a` and `b` and returns the result.
///
/// # Examples
///
/// ```
/// use ls8::alu::{apply, AluError, AluOp};
///
/// assert_eq!(apply(AluOp::Add, 8, 9).unwrap(), 17);
/// assert_eq!(apply(AluOp::Mul, 16, 16).unwrap(), 0); // wraps modulo 256
/// assert_eq!(apply(AluOp::Div, 200, 0), Err(AluError::DivisionByZero));
/// ```
pub fn apply(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => {
            if b == 0 {
                Err(AluError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}
