//! POSIX sort command-line driver
//!
//! Sorts, merges, or order-checks lines from the given files or standard
//! input, under the collation rules of the current locale.

use clap::error::ErrorKind;
use clap::{Arg, Command};
use std::process;

// Import from the library modules
use posix_sort::{
    config::{SortConfig, SortConfigBuilder},
    error::{SortError, SortResult},
    EXIT_FAILURE, EXIT_SUCCESS,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => return handle_clap_error(e),
    };

    let config = parse_config_from_matches(&matches)?;
    posix_sort::run(&config)
}

/// Help and version requests succeed; anything else clap rejects is a
/// usage failure with the single failure status.
fn handle_clap_error(err: clap::Error) -> SortResult<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(EXIT_SUCCESS)
        }
        _ => {
            err.print()?;
            Ok(EXIT_FAILURE)
        }
    }
}

fn build_cli() -> Command {
    Command::new("sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("sort [OPTION]... [FILE]...")
        .about("Write sorted concatenation of all FILE(s) to standard output")
        .disable_help_flag(true) // --help only; -h is not an option
        .disable_version_flag(true)
        // Input files
        .arg(
            Arg::new("files")
                .help("Files to sort (use '-' or omit for stdin)")
                .num_args(0..)
                .value_name("FILE"),
        )
        // Operation modes
        .arg(
            Arg::new("merge")
                .short('m')
                .long("merge")
                .help("Merge already sorted files; do not sort")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .short('c')
                .long("check")
                .help("Check for sorted input; do not sort")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check-silent")
                .short('C')
                .help("Like -c, but do not report the first bad line")
                .action(clap::ArgAction::SetTrue),
        )
        // I/O options
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        // Field and key options
        .arg(
            Arg::new("field-separator")
                .short('t')
                .long("field-separator")
                .help("Use SEP instead of non-blank to blank transition")
                .value_name("SEP"),
        )
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .help("Sort via a key; KEYDEF gives location and type")
                .value_name("KEYDEF")
                .action(clap::ArgAction::Append),
        )
        // Ordering modifiers
        .arg(
            Arg::new("ignore-leading-blanks")
                .short('b')
                .long("ignore-leading-blanks")
                .help("Ignore leading blanks")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dictionary-order")
                .short('d')
                .long("dictionary-order")
                .help("Consider only blanks and alphanumeric characters")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-case")
                .short('f')
                .long("ignore-case")
                .help("Fold lower case to upper case characters")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-nonprinting")
                .short('i')
                .long("ignore-nonprinting")
                .help("Consider only printable characters")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("numeric-sort")
                .short('n')
                .long("numeric-sort")
                .help("Compare according to string numerical value")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Reverse the result of comparisons")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unique")
                .short('u')
                .long("unique")
                .help("Output only the first of an equal run")
                .action(clap::ArgAction::SetTrue),
        )
        // Explicit help and version, since the automatic ones are disabled
        .arg(
            Arg::new("help")
                .long("help")
                .help("Display this help and exit")
                .action(clap::ArgAction::Help),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Output version information and exit")
                .action(clap::ArgAction::Version),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    if matches.get_flag("check") {
        builder = builder.check();
    }
    if matches.get_flag("check-silent") {
        builder = builder.check_quiet();
    }
    if matches.get_flag("merge") {
        builder = builder.merge();
    }
    if matches.get_flag("ignore-leading-blanks") {
        builder = builder.ignore_leading_blanks();
    }
    if matches.get_flag("dictionary-order") {
        builder = builder.dictionary_order();
    }
    if matches.get_flag("ignore-case") {
        builder = builder.ignore_case();
    }
    if matches.get_flag("ignore-nonprinting") {
        builder = builder.ignore_nonprinting();
    }
    if matches.get_flag("numeric-sort") {
        builder = builder.numeric();
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("unique") {
        builder = builder.unique();
    }

    if let Some(sep_str) = matches.get_one::<String>("field-separator") {
        let mut chars = sep_str.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) => builder = builder.field_separator(sep),
            (None, _) => return Err(SortError::usage("empty tab")),
            _ => {
                return Err(SortError::usage(&format!(
                    "multi-character tab '{sep_str}'"
                )))
            }
        }
    }

    for keydef in matches.get_many::<String>("key").unwrap_or_default() {
        builder = builder.key(keydef.clone());
    }

    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output_file(output.clone());
    }

    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();
    builder = builder.input_files(files);

    builder.build()
}
