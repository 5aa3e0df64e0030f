use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use tracing::{debug, Level};

use renumber::formatting;
use renumber::language::{LineNumberOption, LineNumberOptions, Position, ReformatError};
use renumber::output;
use renumber::parsing;

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("renumber")
        .version(VERSION)
        .propagate_version(true)
        .about("Realign line number markers in generated source files.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being done to standard error."),
        )
        .subcommand(
            Command::new("reformat")
                .about("Rewrite the given file so its lines match the original source")
                .arg(
                    Arg::new("with-line-numbers")
                        .short('n')
                        .long("with-line-numbers")
                        .action(ArgAction::SetTrue)
                        .help("Prefix each line with a comment giving its original line number."),
                )
                .arg(
                    Arg::new("stretch-lines")
                        .short('s')
                        .long("stretch-lines")
                        .action(ArgAction::SetTrue)
                        .help("Insert or remove blank lines so that lines sit at their original line numbers."),
                )
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .action(ArgAction::SetTrue)
                        .help("Print the result to standard output rather than replacing the file."),
                )
                .arg(
                    Arg::new("positions")
                        .short('p')
                        .long("positions")
                        .required(true)
                        .help("JSON file containing the position records emitted alongside the source."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The generated source file you want to reformat."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate position records against the given file and report what reformatting would change")
                .arg(
                    Arg::new("positions")
                        .short('p')
                        .long("positions")
                        .required(true)
                        .help("JSON file containing the position records emitted alongside the source."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The generated source file to check."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match matches.subcommand() {
        Some(("reformat", submatches)) => {
            let (filename, positions_file, positions) = inputs(submatches);

            let mut options = LineNumberOptions::new();
            if submatches.get_flag("with-line-numbers") {
                options = options.with(LineNumberOption::LeadingComments);
            }
            if submatches.get_flag("stretch-lines") {
                options = options.with(LineNumberOption::Stretched);
            }
            debug!(?options);

            let result = if submatches.get_flag("stdout") {
                parsing::load(filename)
                    .map_err(ReformatError::from)
                    .and_then(|content| {
                        formatting::reformat_text(&content, &positions, options)
                            .map_err(ReformatError::from)
                    })
                    .map(|text| print!("{}", text))
            } else {
                output::reformat(filename, &positions, options)
            };

            if let Err(error) = result {
                eprintln!(
                    "{}",
                    problem::present_reformat_error(&error, filename, positions_file)
                );
                std::process::exit(1);
            }
        }
        Some(("check", submatches)) => {
            let (filename, positions_file, positions) = inputs(submatches);

            let result = parsing::load(filename)
                .map_err(ReformatError::from)
                .and_then(|content| {
                    formatting::survey(&content, &positions).map_err(ReformatError::from)
                });

            match result {
                Ok(survey) => {
                    println!(
                        "{}: {} lines, {} markers",
                        filename.display(),
                        survey.lines,
                        survey.markers
                    );
                    println!("  {} lines added by splitting", survey.splits);
                    println!("  {} markers away from their original line", survey.misaligned);
                    println!("  {} markers stretching cannot align", survey.unresolved);
                }
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::present_reformat_error(&error, filename, positions_file)
                    );
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: renumber [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Pull the filename and position records out of the arguments, exiting if
/// the positions file cannot be read.
fn inputs(submatches: &ArgMatches) -> (&Path, &Path, Vec<Position>) {
    let filename = submatches
        .get_one::<String>("filename")
        .map(Path::new)
        .unwrap();
    let positions_file = submatches
        .get_one::<String>("positions")
        .map(Path::new)
        .unwrap();

    match parsing::load_positions(positions_file) {
        Ok(positions) => (filename, positions_file, positions),
        Err(error) => {
            eprintln!("{}", problem::concise_file_error(&error));
            std::process::exit(1);
        }
    }
}
