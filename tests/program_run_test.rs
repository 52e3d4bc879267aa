//! End-to-end program tests: complete machine-code programs run from load to
//! halt, with output asserted byte for byte.

use ls8::{loader, opcodes, Cpu, CpuState};

fn run(program: &[u8]) -> Cpu<Vec<u8>> {
    let mut cpu = Cpu::with_output(Vec::new());
    cpu.load(program).unwrap();
    cpu.run().unwrap();
    cpu
}

#[test]
fn test_add_and_print_prints_17() {
    // LDI R0,8 / LDI R1,9 / ADD R0,R1 / PRN R0 / HLT
    let cpu = run(&[
        0b10000010, 0b00000000, 0b00001000,
        0b10000010, 0b00000001, 0b00001001,
        0b10100000, 0b00000000, 0b00000001,
        0b01000111, 0b00000000,
        0b00000001,
    ]);

    assert_eq!(cpu.output(), b"17\n");
    assert_eq!(cpu.state(), CpuState::Halted);
}

#[test]
fn test_mult_program_prints_72() {
    // The classic mult.ls8: 8 * 9 = 72.
    let source = "\
10000010 # LDI R0,8
00000000
00001000
10000010 # LDI R1,9
00000001
00001001
10100010 # MUL R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";
    let mut cpu = Cpu::with_output(Vec::new());
    cpu.load(&loader::parse_program(source)).unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.output(), b"72\n");
}

#[test]
fn test_subroutine_program() {
    // Calls a print subroutine twice with different register values.
    // 0:  LDI R1, 14   (subroutine address)
    // 3:  LDI R0, 5
    // 6:  CALL R1      -> prints 5
    // 8:  LDI R0, 9
    // 11: CALL R1      -> prints 9
    // 13: HLT
    // 14: PRN R0 / RET (subroutine)
    let program = [
        opcodes::LDI, 1, 14,
        opcodes::LDI, 0, 5,
        opcodes::CALL, 1,
        opcodes::LDI, 0, 9,
        opcodes::CALL, 1,
        opcodes::HLT,
        opcodes::PRN, 0,
        opcodes::RET,
    ];

    let cpu = run(&program);
    assert_eq!(cpu.output(), b"5\n9\n");
    assert_eq!(cpu.state(), CpuState::Halted);
}

#[test]
fn test_stack_preserves_value_across_clobber() {
    // Save R0, overwrite it, restore it, print.
    let cpu = run(&[
        opcodes::LDI, 0, 111,
        opcodes::PUSH, 0,
        opcodes::LDI, 0, 222,
        opcodes::POP, 0,
        opcodes::PRN, 0,
        opcodes::HLT,
    ]);

    assert_eq!(cpu.output(), b"111\n");
}

#[test]
fn test_chained_arithmetic() {
    // (20 + 30 - 8) / 2 = 21
    let cpu = run(&[
        opcodes::LDI, 0, 20,
        opcodes::LDI, 1, 30,
        opcodes::ADD, 0, 1,
        opcodes::LDI, 1, 8,
        opcodes::SUB, 0, 1,
        opcodes::LDI, 1, 2,
        opcodes::DIV, 0, 1,
        opcodes::PRN, 0,
        opcodes::HLT,
    ]);

    assert_eq!(cpu.output(), b"21\n");
}
