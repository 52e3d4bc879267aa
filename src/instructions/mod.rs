//! # Instruction Handlers
//!
//! One function per instruction, organized by category. Each handler takes a
//! mutable reference to the CPU, reads its operand bytes from
//! `memory[pc + 1..]`, and mutates registers, memory, or the program counter
//! as its contract requires.
//!
//! Handlers never advance the program counter past their own instruction:
//! the engine does that from the opcode's operand-count bits, except for the
//! opcodes whose pc-control bit is set (CALL, RET), whose handlers position
//! `pc` themselves. Operands are always read before any register mutation.
//!
//! ## Categories
//!
//! - **load_store**: immediate loads (LDI)
//! - **print**: output to the PRN sink (PRN)
//! - **arithmetic**: ALU register-register operations (ADD, SUB, MUL, DIV)
//! - **stack**: stack manipulation (PUSH, POP)
//! - **control**: control flow and halting (CALL, RET, HLT)

pub(crate) mod arithmetic;
pub(crate) mod control;
pub(crate) mod load_store;
pub(crate) mod print;
pub(crate) mod stack;
