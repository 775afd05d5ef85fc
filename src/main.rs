//! # Command Line Interface
//!
//! The command definitions are in `cli.rs`, the subcommands are in the `commands` module.

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use m100tok::commands;
use m100tok::commands::CommandError;

mod cli;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    // Tokenize BASIC

    if let Some(cmd) = matches.subcommand_matches("tokenize") {
        return commands::langx::tokenize(cmd);
    }

    // Keyword table

    if matches.subcommand_matches("keywords").is_some() {
        return commands::langx::keywords();
    }

    // Shell completions

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `m100tok --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
