//! # LS-8 CPU Emulator Core
//!
//! An emulator for the LS-8, an instructional 8-bit machine: 8 general-purpose
//! registers, a 256-byte address space, and a small fixed instruction
//! catalogue (immediate load, print, arithmetic, stack push/pop, subroutine
//! call/return, halt).
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{opcodes, Cpu, CpuState};
//!
//! // LDI R0,8 / LDI R1,9 / ADD R0,R1 / PRN R0 / HLT
//! let program = [
//!     opcodes::LDI, 0, 8,
//!     opcodes::LDI, 1, 9,
//!     opcodes::ADD, 0, 1,
//!     opcodes::PRN, 0,
//!     opcodes::HLT,
//! ];
//!
//! let mut cpu = Cpu::with_output(Vec::new());
//! cpu.load(&program).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.state(), CpuState::Halted);
//! assert_eq!(cpu.output(), b"17\n");
//! ```
//!
//! ## Architecture
//!
//! - **Self-describing opcodes**: each opcode byte encodes its own operand
//!   count and program-counter behavior, so the engine loop holds no
//!   per-instruction length knowledge (see [`opcodes`]).
//! - **State-machine halting**: HLT transitions the CPU to
//!   [`CpuState::Halted`] rather than exiting the process, so complete runs
//!   are testable in-process.
//! - **Injected output**: PRN writes through an `io::Write` sink chosen at
//!   construction; the `ls8` binary wires up stdout, tests wire up a buffer.
//!
//! ## Modules
//!
//! - [`cpu`] - CPU state and the fetch-decode-execute engine
//! - [`memory`] - the 256-byte address space
//! - [`registers`] - the 8-slot register file and stack pointer
//! - [`alu`] - pure arithmetic on register values
//! - [`opcodes`] - opcode encoding, decoding, and the instruction catalogue
//! - [`loader`] - text program parsing (the file-format boundary)

pub mod alu;
pub mod cpu;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction handlers (not part of the public API).
mod instructions;

pub use alu::{AluError, AluOp};
pub use cpu::{Cpu, CpuState};
pub use loader::LoaderError;
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::Instruction;
pub use registers::{RegisterFile, NUM_REGISTERS, SP, SP_INIT};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// All are terminal: the run stops at the first fault, and each variant
/// carries the context needed to report the failing instruction's address.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A memory access outside the 256-byte address space.
    #[error("memory address {addr:#05x} is out of bounds")]
    OutOfBounds {
        /// The offending address.
        addr: usize,
    },

    /// A register index outside `[0, 8)`.
    #[error("register index {index} is out of range")]
    InvalidRegister {
        /// The offending index.
        index: usize,
    },

    /// An ALU-group opcode with no corresponding ALU operation (strict mode).
    #[error("unsupported ALU operation {opcode:#010b} at pc={pc:#04x}")]
    UnsupportedOperation {
        /// Address of the instruction.
        pc: usize,
        /// The opcode byte.
        opcode: u8,
    },

    /// A DIV whose divisor register held zero.
    #[error("division by zero at pc={pc:#04x}")]
    DivisionByZero {
        /// Address of the instruction.
        pc: usize,
    },

    /// An opcode with no registered handler (strict mode only).
    #[error("unknown opcode {opcode:#010b} at pc={pc:#04x}")]
    UnknownOpcode {
        /// Address of the instruction.
        pc: usize,
        /// The opcode byte.
        opcode: u8,
    },

    /// A push would have grown the stack below address 0.
    #[error("stack overflow at pc={pc:#04x}")]
    StackOverflow {
        /// Address of the instruction.
        pc: usize,
    },

    /// A pop ran with the stack already empty.
    #[error("stack underflow at pc={pc:#04x}")]
    StackUnderflow {
        /// Address of the instruction.
        pc: usize,
    },

    /// The cycle budget given to [`Cpu::run_with_budget`] was exhausted.
    #[error("execution exceeded the cycle budget of {max_cycles}")]
    MaxCyclesReached {
        /// The budget that was exceeded.
        max_cycles: u64,
    },

    /// The PRN output sink rejected a write.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
