//! `notac` — the command-line harness over the Nota compiler library.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde_json::json;

use notac::{compile, get_parenthesis, is_valid_formula, CompileError, SortMode};

#[derive(Debug, Parser)]
#[command(
    name = "notac",
    version,
    author = "Nota Team",
    about = "Compiler for the Nota prefix notation",
    long_about = "notac compiles and evaluates expressions in the Nota prefix notation:\n\
        S(a,b) sums its arguments, D(a,b) divides them, and arguments nest.\n\n\
        EXAMPLES:\n\
        \n  notac compile 'S(2,3)'                 Evaluate an expression\n\
        \n  notac compile --json 'D(9,S(2,9))'     Emit the result as JSON\n\
        \n  notac check 'x + (y - z)'              Validate an infix formula\n\
        \n  notac parens --sort-by opening '(a(b))' List matched parenthesis pairs"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile and evaluate a prefix-notation expression
    Compile {
        /// The expression, e.g. 'S(2,3)'
        expression: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a line is a valid infix formula
    Check {
        /// The formula, over operands x y z and operators + -
        formula: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the matched parenthesis pairs of a line
    Parens {
        /// The line to scan
        line: String,
        /// Ordering of the reported pairs
        #[arg(long, value_enum, default_value_t = SortArg::Discovery)]
        sort_by: SortArg,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// As the pairs close, innermost first
    Discovery,
    /// Ascending by opening index
    Opening,
    /// Ascending by closing index
    Closing,
}

impl From<SortArg> for SortMode {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Discovery => SortMode::Discovery,
            SortArg::Opening => SortMode::ByOpening,
            SortArg::Closing => SortMode::ByClosing,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Compile { expression, json } => {
            let value = compile(&expression).map_err(|err| match err {
                CompileError::Notation(err) => err.render_snippet(),
                other => format!("error: {other}"),
            })?;
            if json {
                println!("{}", json!({ "expression": expression, "value": value }));
            } else {
                println!("{value}");
            }
            Ok(())
        }
        Command::Check { formula, json } => {
            let valid = is_valid_formula(&formula);
            if json {
                println!("{}", json!({ "formula": formula, "valid": valid }));
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
            Ok(())
        }
        Command::Parens { line, sort_by, json } => {
            let pairs =
                get_parenthesis(&line, sort_by.into()).map_err(|err| format!("error: {err}"))?;
            if json {
                println!("{}", json!({ "line": line, "pairs": pairs }));
            } else {
                for pair in &pairs {
                    println!("{pair}");
                }
            }
            Ok(())
        }
    }
}
