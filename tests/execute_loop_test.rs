//! Execution loop tests.
//!
//! Verifies the fetch-decode-execute cycle as a whole: auto-advance driven by
//! the opcode bits, unknown-opcode policy in both modes, the cycle-budget
//! safeguard, and walking off the end of memory.

use ls8::{opcodes, Cpu, CpuState, ExecutionError, MEMORY_SIZE};

fn setup(program: &[u8]) -> Cpu<Vec<u8>> {
    let mut cpu = Cpu::with_output(Vec::new());
    cpu.load(program).unwrap();
    cpu
}

#[test]
fn test_auto_advance_uses_operand_count_bits() {
    let mut cpu = setup(&[
        opcodes::LDI, 0, 1, // 3 bytes
        opcodes::PRN, 0,    // 2 bytes
        opcodes::RET,       // never reached in this test
    ]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 3);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 5);
}

#[test]
fn test_cycles_count_all_executed_instructions() {
    let mut cpu = setup(&[
        opcodes::LDI, 0, 1,
        opcodes::LDI, 1, 2,
        opcodes::ADD, 0, 1,
        opcodes::HLT,
    ]);
    cpu.run().unwrap();
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_permissive_unknown_opcode_is_noop_cycle() {
    // 0x00 is not in the catalogue: operand count 0, no pc-control bit, so
    // the cycle only advances pc by 1.
    let mut cpu = setup(&[0x00, 0x00, opcodes::LDI, 0, 5, opcodes::HLT]);
    cpu.run().unwrap();

    assert_eq!(cpu.state(), CpuState::Halted);
    assert_eq!(cpu.reg(0).unwrap(), 5);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_permissive_unknown_opcode_honors_its_own_length_bits() {
    // 0b1000_0000 is unmapped but encodes 2 operands; the no-op cycle must
    // skip the operand bytes, not execute them.
    let mut cpu = setup(&[0b1000_0000, opcodes::HLT, opcodes::HLT, opcodes::LDI, 0, 9, opcodes::HLT]);
    cpu.run().unwrap();

    assert_eq!(cpu.reg(0).unwrap(), 9);
}

#[test]
fn test_strict_mode_rejects_unknown_opcode() {
    let mut cpu = setup(&[0b0000_0000]);
    cpu.set_strict(true);

    assert!(matches!(
        cpu.run(),
        Err(ExecutionError::UnknownOpcode { pc: 0, opcode: 0 })
    ));
}

#[test]
fn test_zero_filled_memory_terminates_via_cycle_budget() {
    // All-zero memory never halts under the permissive policy; the budget
    // stops it after exactly the allotted cycles.
    let mut cpu = Cpu::with_output(Vec::new());

    assert!(matches!(
        cpu.run_with_budget(64),
        Err(ExecutionError::MaxCyclesReached { max_cycles: 64 })
    ));
    assert_eq!(cpu.cycles(), 64);
    assert_eq!(cpu.pc(), 64); // one byte per no-op cycle
}

#[test]
fn test_budget_does_not_cut_short_a_halting_program() {
    let mut cpu = setup(&[opcodes::LDI, 0, 8, opcodes::HLT]);
    cpu.run_with_budget(1000).unwrap();
    assert_eq!(cpu.state(), CpuState::Halted);
}

#[test]
fn test_running_off_the_end_of_memory_faults() {
    // No HLT anywhere: the pc walks every address and the next fetch is out
    // of bounds. A fault, not a panic or a wrap.
    let mut cpu = Cpu::with_output(Vec::new());

    assert!(matches!(
        cpu.run(),
        Err(ExecutionError::OutOfBounds { addr }) if addr == MEMORY_SIZE
    ));
}

#[test]
fn test_error_reports_failing_instruction_address_and_opcode() {
    let mut cpu = setup(&[opcodes::LDI, 0, 1, 0b0000_0011]);
    cpu.set_strict(true);

    match cpu.run() {
        Err(err @ ExecutionError::UnknownOpcode { pc: 3, opcode: 0b0000_0011 }) => {
            let message = err.to_string();
            assert!(message.contains("0b00000011"), "message: {message}");
            assert!(message.contains("0x03"), "message: {message}");
        }
        other => panic!("expected UnknownOpcode at pc=3, got {other:?}"),
    }
}
