//! Thin command-line wrapper: read a program file, load it, run to HLT.
//!
//! Usage: `ls8 <program.ls8>`
//!
//! Any fault prints its message to stderr and exits with a non-zero status.

use std::env;
use std::error::Error;
use std::process;

use ls8::loader::{self, LoaderError};
use ls8::Cpu;

fn main() {
    if let Err(err) = run() {
        eprintln!("ls8: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1).ok_or(LoaderError::ProgramNotProvided)?;
    let program = loader::load_file(&path)?;

    let mut cpu = Cpu::new();
    cpu.load(&program)?;
    cpu.run()?;

    Ok(())
}
