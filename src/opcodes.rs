//! # Opcode Encoding and Decoding
//!
//! Every LS-8 opcode is a single byte whose bit pattern describes the
//! instruction to the execution engine (most significant bit first):
//!
//! ```text
//! bits 7-6: number of operand bytes following the opcode (0-2)
//! bit    5: reserved
//! bit    4: 1 if the handler sets the program counter itself
//!           (the engine must not auto-advance); 0 otherwise
//! bits 3-0: operation identifier
//! ```
//!
//! The control bits are the single source of truth for instruction length and
//! program-counter advancement: [`operand_count`] and [`sets_pc`] are computed
//! from the byte, never looked up in a side table. Handler *selection* is the
//! opposite -- [`Instruction::decode`] matches the exact opcode byte, so two
//! opcodes that happen to share low bits can never alias. Adding a new
//! instruction that follows the encoding convention therefore requires no
//! change to the engine loop.

use crate::alu::AluOp;

/// LDI: load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;
/// PRN: print a register's value in decimal.
pub const PRN: u8 = 0b0100_0111;
/// HLT: halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// ADD: `reg[a] += reg[b]`, wrapping.
pub const ADD: u8 = 0b1010_0000;
/// SUB: `reg[a] -= reg[b]`, wrapping.
pub const SUB: u8 = 0b1010_0001;
/// MUL: `reg[a] *= reg[b]`, wrapping.
pub const MUL: u8 = 0b1010_0010;
/// DIV: `reg[a] /= reg[b]`, integer division.
pub const DIV: u8 = 0b1010_0011;
/// PUSH: push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// POP: pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// CALL: push the return address and jump to the address in a register.
pub const CALL: u8 = 0b0101_0000;
/// RET: pop the return address into the program counter.
pub const RET: u8 = 0b0001_0001;

/// All opcodes in the instruction catalogue, in datasheet order.
pub const CATALOG: [u8; 11] = [LDI, PRN, HLT, ADD, SUB, MUL, DIV, PUSH, POP, CALL, RET];

/// Number of operand bytes encoded in `opcode` (top two bits).
///
/// # Examples
///
/// ```
/// use ls8::opcodes;
///
/// assert_eq!(opcodes::operand_count(opcodes::LDI), 2);
/// assert_eq!(opcodes::operand_count(opcodes::PRN), 1);
/// assert_eq!(opcodes::operand_count(opcodes::HLT), 0);
/// ```
pub fn operand_count(opcode: u8) -> u8 {
    opcode >> 6
}

/// True if the handler for `opcode` sets the program counter itself (bit 4).
///
/// When this is set the engine performs no auto-advance after the handler
/// returns; CALL and RET rely on it to transfer control.
///
/// # Examples
///
/// ```
/// use ls8::opcodes;
///
/// assert!(opcodes::sets_pc(opcodes::CALL));
/// assert!(opcodes::sets_pc(opcodes::RET));
/// assert!(!opcodes::sets_pc(opcodes::ADD));
/// ```
pub fn sets_pc(opcode: u8) -> bool {
    (opcode >> 4) & 1 == 1
}

/// True if `opcode` belongs to the ALU operation group (`0b1010_xxxx`).
///
/// Used only to classify *unrecognized* opcodes: an unmapped byte in this
/// group is reported as an unsupported ALU operation rather than a generally
/// unknown opcode.
pub fn is_alu_group(opcode: u8) -> bool {
    opcode & 0b1111_0000 == 0b1010_0000
}

/// Returns the mnemonic for `opcode`, or `"???"` if it is not in the
/// catalogue.
///
/// A convenience for tests, disassembly-style tooling, and error messages;
/// nothing in the engine itself depends on it. [`Cpu::trace`](crate::Cpu::trace)
/// deliberately prints raw hex, matching the machine's original trace format.
pub fn mnemonic(opcode: u8) -> &'static str {
    match opcode {
        LDI => "LDI",
        PRN => "PRN",
        HLT => "HLT",
        ADD => "ADD",
        SUB => "SUB",
        MUL => "MUL",
        DIV => "DIV",
        PUSH => "PUSH",
        POP => "POP",
        CALL => "CALL",
        RET => "RET",
        _ => "???",
    }
}

/// A decoded instruction, keyed by exact opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load an immediate operand into a register.
    Ldi,
    /// Print a register's value.
    Prn,
    /// Halt execution.
    Hlt,
    /// Apply an ALU operation to two registers.
    Alu(AluOp),
    /// Push a register onto the stack.
    Push,
    /// Pop the stack into a register.
    Pop,
    /// Call a subroutine whose address is in a register.
    Call,
    /// Return from a subroutine.
    Ret,
}

impl Instruction {
    /// Looks up the instruction for an exact opcode byte.
    ///
    /// Returns `None` for bytes outside the catalogue; how that is handled
    /// (permissive no-op or strict error) is the engine's policy, not the
    /// decoder's.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::opcodes::{self, Instruction};
    ///
    /// assert_eq!(Instruction::decode(opcodes::LDI), Some(Instruction::Ldi));
    /// assert_eq!(Instruction::decode(0), None);
    /// ```
    pub fn decode(opcode: u8) -> Option<Self> {
        match opcode {
            LDI => Some(Self::Ldi),
            PRN => Some(Self::Prn),
            HLT => Some(Self::Hlt),
            ADD => Some(Self::Alu(AluOp::Add)),
            SUB => Some(Self::Alu(AluOp::Sub)),
            MUL => Some(Self::Alu(AluOp::Mul)),
            DIV => Some(Self::Alu(AluOp::Div)),
            PUSH => Some(Self::Push),
            POP => Some(Self::Pop),
            CALL => Some(Self::Call),
            RET => Some(Self::Ret),
            _ => None,
        }
    }
}
