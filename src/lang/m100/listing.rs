//! Module containing the listing parser
//!
//! Splits program text into numbered logical lines.
//! Lines that are blank, or that do not start with a decimal line number, are dropped silently.

use regex::Regex;
use log::{debug,warn,error};
use crate::lang::{Error,LogicalLine};
use super::settings::Overflow;

/// The remainder excludes line terminators, so a line containing a lone carriage return does not match
const LINE_PATTERN: &str = r"^([0-9]+)\s*([^\r\n\x{2028}\x{2029}]*)$";
const BOM: char = '\u{feff}';

/// Parse a listing, keeping the low 16 bits of oversized line numbers
pub fn parse_listing(text: &str) -> Vec<LogicalLine> {
    match parse_listing_with(text,Overflow::Wrap) {
        Ok(ans) => ans,
        Err(_) => panic!("wrapping parser should not fail")
    }
}

/// Parse a listing with the given line number overflow policy
pub fn parse_listing_with(text: &str,overflow: Overflow) -> Result<Vec<LogicalLine>,Error> {
    let patt = Regex::new(LINE_PATTERN).expect("regex parsing error");
    let mut ans = Vec::new();
    for (idx,line) in text.lines().enumerate() {
        let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c==BOM);
        if trimmed.len()==0 {
            continue;
        }
        let caps = match patt.captures(trimmed) {
            Some(caps) => caps,
            None => {
                debug!("dropping line {} without a line number",idx+1);
                continue;
            }
        };
        let digits = caps.get(1).map_or("",|m| m.as_str());
        let source_text = caps.get(2).map_or("",|m| m.as_str());
        let line_number = match u16::from_str_radix(digits,10) {
            Ok(num) => num,
            Err(_) => match overflow {
                Overflow::Wrap => {
                    let num = wrapped_line_number(digits);
                    warn!("line number {} does not fit in 16 bits, stored as {}",digits,num);
                    num
                },
                Overflow::Strict => {
                    error!("line number {} does not fit in 16 bits",digits);
                    return Err(Error::LineNumber);
                }
            }
        };
        ans.push(LogicalLine::new(line_number,source_text));
    }
    Ok(ans)
}

/// Decimal digits modulo 65536, any length
fn wrapped_line_number(digits: &str) -> u16 {
    digits.bytes().fold(0u16,|acc,d| acc.wrapping_mul(10).wrapping_add((d - b'0') as u16))
}
