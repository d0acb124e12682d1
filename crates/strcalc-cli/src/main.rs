//! strcalc CLI
//!
//! Command-line interface for the string calculator.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::io::Read;
use std::process;
use strcalc_ast::{CalcError, SourceMap};
use strcalc_evaluator::{Calculator, CalculatorConfig, DEFAULT_UPPER_BOUND};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("strcalc")
        .version("0.1.0")
        .about("Sum a delimited string of numbers")
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .value_name("STRING")
                .help("Numbers to sum, `\\n` is read as a newline")
                .num_args(1),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Take --expr literally, without expanding `\\n`")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .value_name("N")
                .help("Largest value counted towards the sum")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log pipeline steps to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("File holding the numbers (stdin when omitted)")
                .index(1),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let upper_bound = matches
        .get_one::<i32>("max")
        .copied()
        .unwrap_or(DEFAULT_UPPER_BOUND);
    let calculator = Calculator::new(CalculatorConfig::default().with_upper_bound(upper_bound));

    let input = matches.get_one::<String>("expr").map_or_else(
        || {
            matches.get_one::<String>("file").map_or_else(
                read_stdin,
                |file_path| read_file(file_path),
            )
        },
        |expr| {
            if matches.get_flag("raw") {
                Ok(expr.clone())
            } else {
                Ok(unescape(expr))
            }
        },
    );

    match input {
        Ok(input) => process::exit(execute_string(&input, &calculator)),
        Err(e) => {
            eprintln!("strcalc: {e:#}");
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Evaluate the input, print the outcome and return the exit code
fn execute_string(input: &str, calculator: &Calculator) -> i32 {
    match calculator.add(input) {
        Ok(sum) => {
            println!("{sum}");
            0
        }
        Err(err) => {
            eprintln!("{}", diagnostic(input, &err));
            1
        }
    }
}

/// Format a failure as `strcalc:<line>:<column>: <CODE>: <message>`
fn diagnostic(input: &str, err: &CalcError) -> String {
    let pos = SourceMap::new(input).position(err.span().start);
    format!(
        "strcalc:{}:{}: {}: {err}",
        pos.line,
        pos.column,
        err.kind().code()
    )
}

fn unescape(expr: &str) -> String {
    expr.replace("\\n", "\n")
}

fn strip_trailing_newline(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
    }
    content
}

fn read_file(file_path: &str) -> anyhow::Result<String> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {file_path}"))?;
    Ok(strip_trailing_newline(content))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    Ok(strip_trailing_newline(content))
}
