//! Tests for the SUB instruction.

use ls8::{opcodes, Cpu};

fn setup(program: &[u8]) -> Cpu<Vec<u8>> {
    let mut cpu = Cpu::with_output(Vec::new());
    cpu.load(program).unwrap();
    cpu
}

#[test]
fn test_sub_basic_operation() {
    let mut cpu = setup(&[
        opcodes::LDI, 0, 9,
        opcodes::LDI, 1, 5,
        opcodes::SUB, 0, 1,
        opcodes::HLT,
    ]);
    cpu.run().unwrap();

    assert_eq!(cpu.reg(0).unwrap(), 4);
    assert_eq!(cpu.reg(1).unwrap(), 5);
}

#[test]
fn test_sub_wraps_on_underflow() {
    let mut cpu = setup(&[
        opcodes::LDI, 0, 0,
        opcodes::LDI, 1, 1,
        opcodes::SUB, 0, 1,
        opcodes::HLT,
    ]);
    cpu.run().unwrap();
    assert_eq!(cpu.reg(0).unwrap(), 255); // -1 mod 256
}

#[test]
fn test_sub_register_from_itself_zeroes() {
    let mut cpu = setup(&[
        opcodes::LDI, 4, 77,
        opcodes::SUB, 4, 4,
        opcodes::HLT,
    ]);
    cpu.run().unwrap();
    assert_eq!(cpu.reg(4).unwrap(), 0);
}
