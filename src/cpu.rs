//! # CPU State and Execution
//!
//! The `Cpu` owns the whole machine: 256 bytes of memory, the eight-register
//! file, the program counter, and the run state. Execution is the classic
//! fetch-decode-execute cycle:
//!
//! 1. Fetch the opcode byte at `pc`.
//! 2. Decode it: handler via [`Instruction::decode`] (exact byte), operand
//!    count and pc-control via the opcode's own bits.
//! 3. Invoke the handler, which may read and write registers, memory, and
//!    `pc`.
//! 4. Auto-advance `pc` by `operand_count + 1` unless the opcode's pc-control
//!    bit is set, in which case the handler has already positioned `pc`.
//! 5. Repeat until the HLT handler moves the state machine to
//!    [`CpuState::Halted`].
//!
//! Halting is a state transition rather than a process exit so that programs
//! can be run to completion inside a test and the final machine state
//! inspected.
//!
//! ## Unknown opcodes
//!
//! A byte with no registered handler is, by default, a no-op cycle: nothing
//! changes except whatever the auto-advance rule dictates. This matches the
//! original machine's permissive behavior. [`Cpu::set_strict`] turns such
//! bytes into [`ExecutionError::UnknownOpcode`] (or
//! [`ExecutionError::UnsupportedOperation`] for unmapped bytes in the ALU
//! group). Note that a permissive run over zero-filled memory never halts on
//! its own; use [`Cpu::run_with_budget`] where that matters.

use std::io::{self, Write};

use crate::instructions;
use crate::memory::Memory;
use crate::opcodes::{self, Instruction};
use crate::registers::{RegisterFile, NUM_REGISTERS, SP_INIT};
use crate::ExecutionError;

/// Run state of the CPU state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /// The engine is fetching and executing instructions.
    Running,
    /// The HLT handler has executed; the engine will fetch nothing further.
    Halted,
}

/// The LS-8 CPU.
///
/// Generic over the output sink that PRN writes to, so tests can capture
/// printed values in a buffer while the binary wires up stdout.
///
/// # Examples
///
/// ```
/// use ls8::{opcodes, Cpu, CpuState};
///
/// // LDI R0, 8 then HLT
/// let program = [opcodes::LDI, 0, 8, opcodes::HLT];
///
/// let mut cpu = Cpu::new();
/// cpu.load(&program).unwrap();
/// cpu.run().unwrap();
///
/// assert_eq!(cpu.state(), CpuState::Halted);
/// assert_eq!(cpu.reg(0).unwrap(), 8);
/// ```
pub struct Cpu<W: Write = io::Stdout> {
    /// 256-byte memory.
    pub(crate) memory: Memory,

    /// General-purpose registers; R7 is the stack pointer.
    pub(crate) regs: RegisterFile,

    /// Address of the next opcode to fetch.
    pub(crate) pc: usize,

    /// Run state; only the HLT handler moves this to `Halted`.
    pub(crate) state: CpuState,

    /// Completed fetch-decode-execute cycles.
    pub(crate) cycles: u64,

    /// Fail on unmapped opcodes instead of treating them as no-ops.
    strict: bool,

    /// Sink for PRN output.
    pub(crate) output: W,
}

impl Cpu<io::Stdout> {
    /// Creates a CPU with zeroed memory, reset registers, and PRN wired to
    /// stdout.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Cpu<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a CPU that writes PRN output to `output`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{opcodes, Cpu};
    ///
    /// // LDI R0, 17 then PRN R0 then HLT
    /// let program = [opcodes::LDI, 0, 17, opcodes::PRN, 0, opcodes::HLT];
    ///
    /// let mut cpu = Cpu::with_output(Vec::new());
    /// cpu.load(&program).unwrap();
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(cpu.output(), b"17\n");
    /// ```
    pub fn with_output(output: W) -> Self {
        Self {
            memory: Memory::new(),
            regs: RegisterFile::new(),
            pc: 0,
            state: CpuState::Running,
            cycles: 0,
            strict: false,
            output,
        }
    }

    /// Enables or disables strict unknown-opcode handling.
    ///
    /// Permissive (the default) treats unmapped opcodes as no-op cycles;
    /// strict fails the run with [`ExecutionError::UnknownOpcode`].
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Copies a program into memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.memory.load(program)
    }

    /// Executes one fetch-decode-execute cycle and returns the state
    /// afterwards.
    ///
    /// Stepping a halted CPU is a no-op that reports [`CpuState::Halted`].
    pub fn step(&mut self) -> Result<CpuState, ExecutionError> {
        if self.state == CpuState::Halted {
            return Ok(CpuState::Halted);
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc)?;

        match Instruction::decode(opcode) {
            Some(instruction) => self.execute(instruction)?,
            None if self.strict => {
                return Err(if opcodes::is_alu_group(opcode) {
                    ExecutionError::UnsupportedOperation { pc, opcode }
                } else {
                    ExecutionError::UnknownOpcode { pc, opcode }
                });
            }
            // Permissive mode: unmapped opcodes are a no-op cycle.
            None => {}
        }

        if !opcodes::sets_pc(opcode) {
            self.pc = pc + opcodes::operand_count(opcode) as usize + 1;
        }
        self.cycles += 1;

        Ok(self.state)
    }

    /// Runs until the CPU halts or an instruction faults.
    ///
    /// There is no implicit cycle limit: a permissive run over memory with no
    /// reachable HLT ends only when the program counter walks out of the
    /// address space ([`ExecutionError::OutOfBounds`]). Use
    /// [`run_with_budget`](Self::run_with_budget) to bound execution instead.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.step()? == CpuState::Running {}
        Ok(())
    }

    /// Runs until the CPU halts, an instruction faults, or `max_cycles`
    /// cycles have executed ([`ExecutionError::MaxCyclesReached`]).
    ///
    /// The budget is a safeguard against programs that never halt, such as
    /// zero-filled memory under the permissive unknown-opcode policy.
    pub fn run_with_budget(&mut self, max_cycles: u64) -> Result<(), ExecutionError> {
        while self.state == CpuState::Running {
            if self.cycles >= max_cycles {
                return Err(ExecutionError::MaxCyclesReached { max_cycles });
            }
            self.step()?;
        }
        Ok(())
    }

    // ========== Handler plumbing ==========

    fn execute(&mut self, instruction: Instruction) -> Result<(), ExecutionError> {
        match instruction {
            Instruction::Ldi => instructions::load_store::execute_ldi(self),
            Instruction::Prn => instructions::print::execute_prn(self),
            Instruction::Hlt => instructions::control::execute_hlt(self),
            Instruction::Alu(op) => instructions::arithmetic::execute_alu(self, op),
            Instruction::Push => instructions::stack::execute_push(self),
            Instruction::Pop => instructions::stack::execute_pop(self),
            Instruction::Call => instructions::control::execute_call(self),
            Instruction::Ret => instructions::control::execute_ret(self),
        }
    }

    /// Reads the operand byte at `pc + offset`.
    pub(crate) fn operand(&self, offset: usize) -> Result<u8, ExecutionError> {
        self.memory.read(self.pc + offset)
    }

    /// Pushes a byte: decrement SP, then write to the new SP address.
    ///
    /// Fails with [`ExecutionError::StackOverflow`] if the stack has grown
    /// all the way down to address 0.
    pub(crate) fn push_byte(&mut self, value: u8) -> Result<(), ExecutionError> {
        let sp = self.regs.sp();
        if sp == 0 {
            return Err(ExecutionError::StackOverflow { pc: self.pc });
        }
        let sp = sp - 1;
        self.regs.set_sp(sp);
        self.memory.write(sp as usize, value)
    }

    /// Pops a byte: read from SP, then increment SP.
    ///
    /// Fails with [`ExecutionError::StackUnderflow`] if SP is at or above its
    /// reset mark, i.e. the stack is empty.
    pub(crate) fn pop_byte(&mut self) -> Result<u8, ExecutionError> {
        let sp = self.regs.sp();
        if sp >= SP_INIT {
            return Err(ExecutionError::StackUnderflow { pc: self.pc });
        }
        let value = self.memory.read(sp as usize)?;
        self.regs.set_sp(sp + 1);
        Ok(value)
    }

    // ========== Inspection ==========

    /// Returns the current run state.
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Returns the program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Returns the stack pointer (register R7).
    pub fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Returns the number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the value of register `index`.
    pub fn reg(&self, index: usize) -> Result<u8, ExecutionError> {
        self.regs.get(index)
    }

    /// Sets register `index` to `value`.
    pub fn set_reg(&mut self, index: usize, value: u8) -> Result<(), ExecutionError> {
        self.regs.set(index, value)
    }

    /// Returns a shared reference to memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Returns a mutable reference to memory.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Returns a shared reference to the PRN output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Formats a one-line snapshot of the machine state for debugging:
    /// the program counter, the three bytes at and after it, and all eight
    /// registers, in hex.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{opcodes, Cpu};
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.load(&[opcodes::LDI, 0, 8]).unwrap();
    ///
    /// assert_eq!(
    ///     cpu.trace(),
    ///     "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4",
    /// );
    /// ```
    pub fn trace(&self) -> String {
        // Reads past the end of memory render as 00.
        let peek = |offset: usize| self.memory.read(self.pc + offset).unwrap_or(0);

        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            peek(0),
            peek(1),
            peek(2),
        );
        for index in 0..NUM_REGISTERS {
            line.push_str(&format!(" {:02X}", self.regs.get(index).unwrap_or(0)));
        }
        line
    }
}
