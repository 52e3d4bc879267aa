//! # Control Flow Instructions
//!
//! CALL and RET are the only opcodes with the pc-control bit set: their
//! handlers position the program counter themselves and the engine performs
//! no auto-advance after them. HLT terminates through the CPU state machine
//! instead -- it is a sentinel transition, not a process exit, so a halted
//! machine can still be inspected.

use std::io::Write;

use crate::cpu::Cpu;
use crate::cpu::CpuState;
use crate::ExecutionError;

/// Executes HLT (Halt).
///
/// Moves the state machine to [`CpuState::Halted`]; the engine fetches
/// nothing further. The auto-advance that follows is harmless.
pub(crate) fn execute_hlt<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    cpu.state = CpuState::Halted;
    Ok(())
}

/// Executes CALL (Call Subroutine).
///
/// Pushes the return address -- the instruction immediately after the CALL,
/// at `pc + 2` -- onto the stack, then jumps to the address held in
/// `reg[operand1]`.
///
/// Operands: register index (2 bytes total). Sets pc directly.
pub(crate) fn execute_call<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let index = cpu.operand(1)? as usize;
    let target = cpu.regs.get(index)?;

    // A return address must fit in the byte-wide address space; a CALL close
    // enough to the top of memory for pc + 2 to escape it is a fault, not a
    // wrap.
    let return_addr = cpu.pc + 2;
    let return_addr =
        u8::try_from(return_addr).map_err(|_| ExecutionError::OutOfBounds { addr: return_addr })?;

    cpu.push_byte(return_addr)?;
    cpu.pc = target as usize;
    Ok(())
}

/// Executes RET (Return from Subroutine).
///
/// Pops the return address off the stack into the program counter.
///
/// No operands. Sets pc directly.
pub(crate) fn execute_ret<W: Write>(cpu: &mut Cpu<W>) -> Result<(), ExecutionError> {
    let return_addr = cpu.pop_byte()?;
    cpu.pc = return_addr as usize;
    Ok(())
}
