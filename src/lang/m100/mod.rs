//! # Model 100 BASIC transformations
//!
//! This module is used by the CLI and by library clients.
//! The listing parser, tokenizer, and encoder are separate so they can be driven line by line.
//! There is no syntax tree, tokenization is lexical substitution with special handling
//! of strings, comments, `DATA`, and `ELSE`.

mod token_maps;
#[cfg(test)]
mod listing_test;
pub mod listing;
pub mod tokenizer;
pub mod encoder;
pub mod settings;

use std::collections::HashMap;
use log::error;
use super::Error;

/// Statement separator, always inserted as a raw colon
pub const SEPARATOR: u8 = 0x3a;
pub const REM_TOK: u8 = 0x8e;
pub const TICK_TOK: u8 = 0xff;
pub const DEFAULT_ADDRESS: u16 = 0x8001;
/// longest key that may appear in a keyword table
pub const MAX_KEYWORD_LEN: usize = 10;

/// Immutable map from upper case keyword text to token code.
/// Build it once and lend it to any number of tokenizers.
#[derive(Clone,Debug)]
pub struct KeywordTable {
    tok_map: HashMap<&'static str,u8>
}

impl KeywordTable {
    /// The Model 100 keyword table
    pub fn new() -> Self {
        Self {
            tok_map: HashMap::from(token_maps::TOK_MAP)
        }
    }
    /// Build an alternate table, e.g. for another dialect or for testing.
    /// Keys must be unique upper case text of 1 to 10 characters, codes must have the high bit set.
    pub fn from_pairs(pairs: &[(&'static str,u8)]) -> Result<Self,Error> {
        let mut tok_map = HashMap::new();
        for (key,code) in pairs {
            let len = key.chars().count();
            if len==0 || len > MAX_KEYWORD_LEN {
                error!("keyword `{}` has length {}, must be 1 to {}",key,len,MAX_KEYWORD_LEN);
                return Err(Error::Keyword);
            }
            if *code < 0x80 {
                error!("keyword `{}` has code {:02X}, must be 80 or higher",key,code);
                return Err(Error::Keyword);
            }
            if key.to_uppercase() != *key {
                error!("keyword `{}` must be upper case",key);
                return Err(Error::Keyword);
            }
            if tok_map.insert(*key,*code).is_some() {
                error!("keyword `{}` appears more than once",key);
                return Err(Error::Keyword);
            }
        }
        Ok(Self { tok_map })
    }
    /// Look up an upper case candidate
    pub fn get(&self,key: &str) -> Option<u8> {
        self.tok_map.get(key).copied()
    }
    pub fn len(&self) -> usize {
        self.tok_map.len()
    }
    /// (code,keyword) pairs sorted by code
    pub fn sorted(&self) -> Vec<(u8,&'static str)> {
        let mut ans: Vec<(u8,&'static str)> = self.tok_map.iter().map(|(k,v)| (*v,*k)).collect();
        ans.sort();
        ans
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::KeywordTable;
    #[test]
    fn model100_table() {
        let table = KeywordTable::new();
        assert_eq!(table.len(),128);
        assert_eq!(table.get("PRINT"),Some(0xa3));
        assert_eq!(table.get("MID$"),Some(0xfe));
        assert_eq!(table.get("TAB("),Some(0xc0));
        assert_eq!(table.get("print"),None);
        let sorted = table.sorted();
        assert_eq!(sorted[0],(0x80,"END"));
        assert_eq!(sorted[127],(0xff,"'"));
    }
    #[test]
    fn codes_are_unique() {
        let sorted = KeywordTable::new().sorted();
        for i in 1..sorted.len() {
            assert_eq!(sorted[i].0 as usize,sorted[i-1].0 as usize + 1);
        }
    }
    #[test]
    fn bad_tables() {
        assert!(KeywordTable::from_pairs(&[("PRINT",0xa3),("PRINT",0xa4)]).is_err());
        assert!(KeywordTable::from_pairs(&[("",0xa3)]).is_err());
        assert!(KeywordTable::from_pairs(&[("ABCDEFGHIJK",0xa3)]).is_err());
        assert!(KeywordTable::from_pairs(&[("A",0x41)]).is_err());
        assert!(KeywordTable::from_pairs(&[("goto",0x88)]).is_err());
        assert!(KeywordTable::from_pairs(&[("GOTO",0x88),("ABCDEFGHIJ",0x89)]).is_ok());
    }
}
