//! # `m100tok` main library
//!
//! This library converts plain text TRS-80 Model 100 BASIC listings into the tokenized
//! program image the Model 100 BASIC interpreter keeps in memory (the `.BA` file format).
//!
//! ## Architecture
//!
//! The conversion is a pipeline of pure functions:
//! * `lang::m100::listing` splits the text into numbered `lang::LogicalLine` values
//! * `lang::m100::tokenizer` substitutes keyword codes, producing `lang::TokenizedLine` values
//! * `lang::m100::encoder` chains the lines into records with absolute next-line addresses
//!
//! The keyword table is an immutable `lang::m100::KeywordTable` that is built once and lent
//! to the tokenizer, so alternate tables can be used for testing.
//!
//! ## Command Line
//!
//! The `m100tok` binary wraps the library, see `commands` for the subcommands.

pub mod lang;
pub mod commands;

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(),Box<dyn std::error::Error>>;

pub use lang::m100::listing::{parse_listing,parse_listing_with};
pub use lang::m100::encoder::{encode,encode_with};

/// Tokenize a whole listing with the default keyword table and settings.
/// This is `parse_listing` followed by per-line tokenization and `encode`.
pub fn tokenize_listing(program: &str) -> Result<Vec<u8>,DYNERR> {
    let table = lang::m100::KeywordTable::new();
    let settings = lang::m100::settings::Settings::new();
    let tokenizer = lang::m100::tokenizer::Tokenizer::new(&table);
    tokenizer.tokenize(program,&settings)
}

/// Display binary to stdout in columns of hex, ascii, and high-bit-stripped ascii.
/// Rows are labelled with absolute addresses starting from `start_addr`.
pub fn display_block(start_addr: u16,block: &[u8]) {
    let mut slice_start = 0;
    if block.len()==0 {
        return;
    }
    loop {
        let row_label = start_addr as usize + slice_start;
        let mut slice_end = slice_start + 16;
        if slice_end > block.len() {
            slice_end = block.len();
        }
        let slice = block[slice_start..slice_end].to_vec();
        let txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x<32 => '.' as u8,
            x if x<127 => x,
            _ => '.' as u8
        }).collect();
        let neg_txt: Vec<u8> = slice.iter().map(|c| match *c {
            x if x>=160 && x<255 => x - 128,
            _ => 46
        }).collect();
        print!("{:04X} : ",row_label & 0xffff);
        for byte in slice {
            print!("{:02X} ",byte);
        }
        for _blank in slice_end..slice_start+16 {
            print!("   ");
        }
        print!("|+| {} ",String::from_utf8_lossy(&txt));
        for _blank in slice_end..slice_start+16 {
            print!(" ");
        }
        println!("|-| {}",String::from_utf8_lossy(&neg_txt));
        slice_start += 16;
        if slice_end==block.len() {
            break;
        }
    }
}

/// Parse an address given as decimal, `0x` hex, or `$` hex.
/// Values that do not fit in 16 bits are an error rather than being wrapped.
pub fn parse_address(s: &str) -> Result<u16,commands::CommandError> {
    let trimmed = s.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix("0x").or(trimmed.strip_prefix("0X")) {
        u32::from_str_radix(hex,16)
    } else if let Some(hex) = trimmed.strip_prefix("$") {
        u32::from_str_radix(hex,16)
    } else {
        u32::from_str_radix(trimmed,10)
    };
    match parsed {
        Ok(val) if val <= u16::MAX as u32 => Ok(val as u16),
        Ok(val) => {
            log::error!("address {} is beyond the 16 bit address space",val);
            Err(commands::CommandError::OutOfRange)
        },
        Err(_) => {
            log::error!("address `{}` could not be parsed",s);
            Err(commands::CommandError::InvalidCommand)
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn address_formats() {
        assert_eq!(super::parse_address("32769").unwrap(),0x8001);
        assert_eq!(super::parse_address("0x8001").unwrap(),0x8001);
        assert_eq!(super::parse_address("$8001").unwrap(),0x8001);
        assert_eq!(super::parse_address("65535").unwrap(),0xffff);
    }
    #[test]
    fn address_out_of_range() {
        assert!(matches!(super::parse_address("65536"),Err(crate::commands::CommandError::OutOfRange)));
        assert!(matches!(super::parse_address("0x10000"),Err(crate::commands::CommandError::OutOfRange)));
        assert!(matches!(super::parse_address("-1"),Err(crate::commands::CommandError::InvalidCommand)));
        assert!(matches!(super::parse_address("PRINT"),Err(crate::commands::CommandError::InvalidCommand)));
    }
    #[test]
    fn whole_listing() {
        let bytes = super::tokenize_listing("10 PRINT\"HI\"\n").expect("tokenizer failed");
        assert_eq!(bytes,vec![0x0b,0x80,0x0a,0x00,0xa3,0x22,0x48,0x49,0x22,0x00]);
    }
}
