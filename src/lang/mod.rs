//! # Language Module
//!
//! Types shared by the language pipeline, and the error type for language operations.
//! Dialect specific operations such as tokenization are in the submodules.

pub mod m100;

use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Invalid Line Number")]
    LineNumber,
    #[error("Address overflow")]
    AddressOverflow,
    #[error("Invalid keyword table")]
    Keyword,
    #[error("Invalid settings")]
    Settings
}

/// One numbered line of program source, after blank and malformed lines are dropped.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct LogicalLine {
    pub line_number: u16,
    /// everything after the line number and the whitespace following it
    pub source_text: String
}

/// Token bytes of one line.
/// The record header and the terminator are not included, the encoder adds them.
#[derive(Clone,Debug,PartialEq,Eq)]
pub struct TokenizedLine {
    pub line_number: u16,
    pub bytes: Vec<u8>
}

impl LogicalLine {
    pub fn new(line_number: u16,source_text: &str) -> Self {
        Self {
            line_number,
            source_text: source_text.to_string()
        }
    }
}

impl TokenizedLine {
    /// Size of the encoded record: link address, line number, tokens, terminator
    pub fn record_len(&self) -> usize {
        4 + self.bytes.len() + 1
    }
}
