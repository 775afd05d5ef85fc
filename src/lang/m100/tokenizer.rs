//! Module containing the Model 100 BASIC tokenizer

use log::{debug,trace};
use crate::lang::{LogicalLine,TokenizedLine};
use crate::DYNERR;
use super::{KeywordTable,SEPARATOR,REM_TOK,TICK_TOK,MAX_KEYWORD_LEN};
use super::settings::Settings;
use super::listing;
use super::encoder;

const QUOTE: char = '"';
const BACKSLASH: char = '\\';
const TICK: char = '\'';

/// Scanner state
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
enum Scan {
	Normal,
	InString
}

impl Scan {
	/// A quote toggles the state unless the source character before it is a backslash.
	/// The backslash is not consumed, both characters are emitted.
	fn on_quote(self,prev: Option<char>) -> Option<Scan> {
		if prev==Some(BACKSLASH) {
			return None;
		}
		match self {
			Scan::Normal => Some(Scan::InString),
			Scan::InString => Some(Scan::Normal)
		}
	}
}

/// Handles tokenization of Model 100 BASIC.
/// The keyword table is borrowed, so many tokenizers can share one table.
pub struct Tokenizer<'a>
{
	tok_map: &'a KeywordTable
}

impl<'a> Tokenizer<'a>
{
	/// Create a new `Tokenizer` structure
	pub fn new(tok_map: &'a KeywordTable) -> Self {
		Self {
			tok_map
		}
	}
	/// Raw code of a character, non-ASCII keeps only the low byte
	fn raw(c: char) -> u8 {
		if !c.is_ascii() {
			debug!("non-ASCII character U+{:04X} truncated to {:02X}",c as u32,c as u32 & 0xff);
		}
		(c as u32 & 0xff) as u8
	}
	/// Longest keyword starting at `chars[0]`, returns (code,keyword,length in chars)
	fn match_keyword(&self,chars: &[char]) -> Option<(u8,String,usize)> {
		let max_len = usize::min(MAX_KEYWORD_LEN,chars.len());
		for len in (1..=max_len).rev() {
			let candidate: String = chars[0..len].iter().collect::<String>().to_uppercase();
			if let Some(tok) = self.tok_map.get(&candidate) {
				return Some((tok,candidate,len));
			}
		}
		None
	}
	/// Tokenize the text of one line, i.e., everything after the line number.
	/// The record header and terminator are not included.
	pub fn tokenize_line(&self,source_text: &str) -> Vec<u8> {
		let chars: Vec<char> = source_text.chars().collect();
		let mut ans: Vec<u8> = Vec::new();
		let mut state = Scan::Normal;
		let mut i = 0;
		while i < chars.len() {
			let c = chars[i];
			let prev = match i { 0 => None, _ => Some(chars[i-1]) };
			if c==QUOTE {
				if let Some(next_state) = state.on_quote(prev) {
					state = next_state;
					ans.push(Self::raw(c));
					i += 1;
					continue;
				}
			}
			if c==TICK && state==Scan::Normal {
				ans.extend_from_slice(&[SEPARATOR,REM_TOK,TICK_TOK]);
				break;
			}
			if state==Scan::InString {
				ans.push(Self::raw(c));
				i += 1;
				continue;
			}
			match self.match_keyword(&chars[i..]) {
				Some((tok,keyword,len)) => {
					trace!("keyword {} -> {:02X}",keyword,tok);
					ans.push(tok);
					i += len;
					match keyword.as_str() {
						"REM" | "DATA" => {
							// rest of line is opaque
							ans.extend(chars[i..].iter().map(|c| Self::raw(*c)));
							break;
						},
						"ELSE" => {
							// ELSE has to begin a statement
							let n = ans.len();
							if n > 1 && ans[n-2]!=SEPARATOR {
								ans.insert(n-1,SEPARATOR);
							}
						},
						_ => {}
					}
				},
				None => {
					ans.push(Self::raw(c));
					i += 1;
				}
			}
		}
		ans
	}
	/// Tokenize parsed lines, preserving order
	pub fn tokenize_lines(&self,lines: &[LogicalLine]) -> Vec<TokenizedLine> {
		lines.iter().map(|line| {
			let bytes = self.tokenize_line(&line.source_text);
			debug!("line {}: {} token bytes",line.line_number,bytes.len());
			TokenizedLine {
				line_number: line.line_number,
				bytes
			}
		}).collect()
	}
	/// Tokenize a program contained in a UTF8 string, result is an array of bytes
	/// ready to be loaded at `settings.base_address`.
	pub fn tokenize(&self,program: &str,settings: &Settings) -> Result<Vec<u8>,DYNERR> {
		let lines = listing::parse_listing_with(program,settings.overflow)?;
		let tokenized = self.tokenize_lines(&lines);
		Ok(encoder::encode_with(&tokenized,settings)?)
	}
}
