use clap::{crate_version, Arg, ArgAction, Command, ValueHint};

const ADDR_LONG_HELP: &str = "address where the first line will be loaded,
decimal, or hex with a `0x` or `$` prefix, must fit in 16 bits";
const CONFIG_LONG_HELP: &str = "JSON settings, e.g.
`{\"encoder\": {\"baseAddress\": 32769, \"endMarker\": \"zero\", \"overflow\": \"strict\"}}`
options given on the command line take precedence";
const MARKER_LONG_HELP: &str = "`none` leaves the last link pointing just past the last line,
`zero` appends the two zero bytes that conventionally end a program";

fn file_arg(help: &'static str) -> Arg {
    Arg::new("file").short('f').long("file").value_name("PATH").help(help)
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("format for console unconditionally")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("even if the output context is a file or pipe, format it for the console")
}

pub fn build_cli() -> Command {
    let long_help = "m100tok is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
tokenize to file:      `m100tok tokenize -f prog.do -o PROG.BA`
tokenize a pipe:       `cat prog.do | m100tok tok > PROG.BA`
inspect the result:    `m100tok tokenize -f prog.do --console`
other load address:    `m100tok tokenize -a 0x8001 --end-marker zero -f prog.do -o PROG.BA`";

    let mut main_cmd = Command::new("m100tok")
        .about("Tokenizes TRS-80 Model 100 BASIC listings.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("tokenize")
            .arg(file_arg("path of the listing, omit to read stdin"))
            .arg(
                Arg::new("out").short('o').long("out").help("path of the tokenized file, omit to write stdout").value_name("PATH")
                    .value_hint(ValueHint::FilePath)
                    .required(false),
            )
            .arg(
                Arg::new("addr").short('a').long("addr").help("base address of tokenized code").value_name("ADDRESS")
                    .long_help(ADDR_LONG_HELP)
                    .required(false),
            )
            .arg(
                Arg::new("end-marker").long("end-marker").help("what follows the last line").value_name("MARKER")
                    .long_help(MARKER_LONG_HELP)
                    .value_parser(["none","zero"])
                    .required(false),
            )
            .arg(
                Arg::new("strict").long("strict").help("fail if a line number or address exceeds 16 bits")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("config").long("config").help("settings as a JSON string").value_name("JSON")
                    .long_help(CONFIG_LONG_HELP)
                    .required(false),
            )
            .arg(console_arg())
            .visible_alias("tok")
            .about("read listing, tokenize, write binary"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("keywords")
            .about("write the keyword table to stdout")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
