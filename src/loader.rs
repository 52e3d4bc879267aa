//! # Program Loader
//!
//! LS-8 programs are plain text: one 8-bit binary literal per line, with
//! optional `#` comments. Blank lines, comment-only lines, and lines that do
//! not parse as binary are skipped; the surviving bytes are assigned to
//! consecutive memory addresses starting at 0, in file order.
//!
//! ```text
//! # print8.ls8: print the number 8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors at the program-loading boundary.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// No program source was supplied.
    #[error("no input program specified")]
    ProgramNotProvided,

    /// The program file could not be read.
    #[error("failed to read program: {0}")]
    Io(#[from] io::Error),
}

/// Parses program text into machine-code bytes.
///
/// Each line is truncated at the first `#`, trimmed, and parsed as a base-2
/// byte; lines that yield nothing are skipped. Parsing itself never fails --
/// malformed lines are treated as commentary, matching the original loader.
///
/// # Examples
///
/// ```
/// use ls8::loader::parse_program;
///
/// let source = "\
/// # print8.ls8
/// 10000010 # LDI R0,8
/// 00000000
/// 00001000
/// 00000001 # HLT
/// ";
///
/// assert_eq!(parse_program(source), vec![0b10000010, 0, 8, 0b00000001]);
/// ```
pub fn parse_program(source: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for line in source.lines() {
        let code = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if let Ok(byte) = u8::from_str_radix(code, 2) {
            bytes.push(byte);
        }
    }
    bytes
}

/// Reads and parses a program file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoaderError> {
    let source = fs::read_to_string(path)?;
    Ok(parse_program(&source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_binary_literals_in_order() {
        let source = "10000010\n00000000\n00001000\n";
        assert_eq!(parse_program(source), vec![0b1000_0010, 0, 8]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let source = "\n# header comment\n\n10000010\n   \n00000001\n";
        assert_eq!(parse_program(source), vec![0b1000_0010, 0b0000_0001]);
    }

    #[test]
    fn test_strips_trailing_comments() {
        let source = "10000010 # LDI R0,8\n00000001# HLT\n";
        assert_eq!(parse_program(source), vec![0b1000_0010, 0b0000_0001]);
    }

    #[test]
    fn test_skips_unparsable_lines() {
        let source = "LDI R0,8\n2\n10000010\n111111111\n";
        // "2" is not binary, "111111111" is nine bits; both are skipped.
        assert_eq!(parse_program(source), vec![0b1000_0010]);
    }

    #[test]
    fn test_empty_source_yields_empty_program() {
        assert!(parse_program("").is_empty());
        assert!(parse_program("# nothing here\n").is_empty());
    }
}
