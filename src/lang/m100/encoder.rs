//! Module containing the address assembler
//!
//! Each record is a link to the next record, the line number, the tokens, and a zero terminator.
//! The 16-bit fields are little-endian.  Records keep the order of the listing, they are not
//! sorted by line number.

use log::{warn,error};
use crate::lang::{Error,TokenizedLine};
use super::settings::{Settings,EndMarker,Overflow};

/// Start address of every record, plus the address just past the last record.
/// The sum is carried in 32 bits so that overflow can be detected.
fn record_addresses(lines: &[TokenizedLine],base_address: u16) -> (Vec<u32>,u32) {
    let mut starts = Vec::with_capacity(lines.len());
    let end = lines.iter().fold(base_address as u32,|addr,line| {
        starts.push(addr);
        addr + line.record_len() as u32
    });
    (starts,end)
}

/// Encode the lines at `base_address` using the reference policies:
/// no end marker, and addresses wrap at 64K.
pub fn encode(lines: &[TokenizedLine],base_address: u16) -> Vec<u8> {
    let mut settings = Settings::new();
    settings.base_address = base_address;
    match encode_with(lines,&settings) {
        Ok(ans) => ans,
        Err(_) => panic!("wrapping encoder should not fail")
    }
}

/// Encode the lines using the base address and policies in `settings`
pub fn encode_with(lines: &[TokenizedLine],settings: &Settings) -> Result<Vec<u8>,Error> {
    let (starts,end) = record_addresses(lines,settings.base_address);
    if end > u16::MAX as u32 {
        match settings.overflow {
            Overflow::Wrap => warn!("program ends at {:X}, addresses wrap past FFFF",end),
            Overflow::Strict => {
                error!("program ends at {:X}, beyond the 16 bit address space",end);
                return Err(Error::AddressOverflow);
            }
        }
    }
    let mut ans: Vec<u8> = Vec::with_capacity((end - settings.base_address as u32) as usize + 2);
    for (i,line) in lines.iter().enumerate() {
        let next_addr = match starts.get(i+1) {
            Some(addr) => *addr,
            None => end
        };
        ans.extend_from_slice(&u16::to_le_bytes(next_addr as u16));
        ans.extend_from_slice(&u16::to_le_bytes(line.line_number));
        ans.extend_from_slice(&line.bytes);
        ans.push(0);
    }
    if settings.end_marker==EndMarker::Zero {
        ans.push(0);
        ans.push(0);
    }
    Ok(ans)
}
