//! ## Language Transformations

use std::str::FromStr;
use std::io::{Read,Write};
use colored::Colorize;
use super::CommandError;
use crate::lang::m100::{KeywordTable,settings};
use crate::lang::m100::settings::{Settings,EndMarker,Overflow};
use crate::lang::m100::tokenizer::Tokenizer;
use crate::lang::m100::{listing,encoder};
use crate::{STDRESULT,DYNERR};

/// Get the listing from `--file` or from stdin
fn read_program(cmd: &clap::ArgMatches) -> Result<String,DYNERR> {
    let mut program = String::new();
    if let Some(path) = cmd.get_one::<String>("file") {
        program = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
                log::error!("{} was not found",path);
                return Err(Box::new(CommandError::FileNotFound));
            },
            Err(e) => {
                log::error!("{} could not be interpreted as a string",path);
                return Err(Box::new(e));
            }
        };
    } else {
        if atty::is(atty::Stream::Stdin) {
            log::error!("line entry is not supported for `tokenize`, please pipe something in or use `--file`");
            return Err(Box::new(CommandError::InvalidCommand));
        }
        match std::io::stdin().read_to_string(&mut program) {
            Ok(_) => {},
            Err(e) => {
                log::error!("the file to tokenize could not be interpreted as a string");
                return Err(Box::new(e));
            }
        }
    }
    if program.len()==0 {
        log::error!("tokenize did not receive any data");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    Ok(program)
}

/// Settings from `--config`, then overridden by explicit options
fn gather_settings(cmd: &clap::ArgMatches) -> Result<Settings,DYNERR> {
    let mut ans = match cmd.get_one::<String>("config") {
        Some(json) => settings::parse(json)?,
        None => Settings::new()
    };
    if let Some(addr) = cmd.get_one::<String>("addr") {
        ans.base_address = crate::parse_address(addr)?;
    }
    if let Some(marker) = cmd.get_one::<String>("end-marker") {
        ans.end_marker = EndMarker::from_str(marker)?;
    }
    if cmd.get_flag("strict") {
        ans.overflow = Overflow::Strict;
    }
    Ok(ans)
}

pub fn tokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let program = read_program(cmd)?;
    let settings = gather_settings(cmd)?;
    let table = KeywordTable::new();
    let tokenizer = Tokenizer::new(&table);
    let lines = listing::parse_listing_with(&program,settings.overflow)?;
    if lines.len()==0 {
        log::warn!("no numbered lines were found");
    }
    let tokenized = tokenizer.tokenize_lines(&lines);
    let object = encoder::encode_with(&tokenized,&settings)?;
    if let Some(path) = cmd.get_one::<String>("out") {
        std::fs::write(path,&object)?;
        eprintln!("\u{2713} {} {} lines, {} bytes, at {:04X}","Tokenized".green(),lines.len(),object.len(),settings.base_address);
        return Ok(());
    }
    if atty::is(atty::Stream::Stdout) || cmd.get_flag("console") {
        crate::display_block(settings.base_address,&object);
    } else {
        std::io::stdout().write_all(&object)?;
    }
    Ok(())
}

pub fn keywords() -> STDRESULT {
    let table = KeywordTable::new();
    let mut out = std::io::stdout();
    for (code,keyword) in table.sorted() {
        writeln!(out,"{:02X} {}",code,keyword)?;
    }
    Ok(())
}
