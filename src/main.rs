use std::{fs, path::Path, process};

use clap::Parser;
use proofscript::{EvalConfig, interpret_with, interpreter::evaluator::core::DEFAULT_MAX_ITERATIONS};

/// proofscript runs small imperative scripts: arithmetic, variables,
/// conditionals and bounded loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a `.proof` file instead of a script.
    /// Implied when CONTENTS ends in `.proof`.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of iterations any single loop may run.
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// The script to run, or with `-f` the path of a `.proof` file.
    contents: String,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let config = EvalConfig { max_iterations: args.max_iterations, };

    let script = load_script(args).unwrap_or_else(|message| {
                                      eprintln!("Error: {message}");
                                      process::exit(1);
                                  });

    match interpret_with(&script, config) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}

/// Returns the program text named by the arguments.
///
/// CONTENTS is read from disk with `-f` or when it ends in `.proof`; no
/// program can end that way, since `.` is not a token.
fn load_script(args: Args) -> Result<String, String> {
    if args.file || has_proof_extension(&args.contents) {
        read_script(&args.contents)
    } else {
        Ok(args.contents)
    }
}

/// Reads a script from disk. Only `.proof` files are accepted.
fn read_script(path: &str) -> Result<String, String> {
    if !has_proof_extension(path) {
        return Err(format!("Expected .proof file, got {path}"));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read the input file '{path}': {e}"))
}

fn has_proof_extension(path: &str) -> bool {
    Path::new(path).extension().is_some_and(|ext| ext == "proof")
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(argv: &[&str]) -> Result<String, String> {
        let args = Args::try_parse_from(std::iter::once("proofscript").chain(argv.iter().copied()))
                   .expect("arguments should parse");
        load_script(args)
    }

    #[test]
    fn positional_proof_path_is_read_as_a_file() {
        let from_flag = load(&["-f", "demos/collatz.proof"]).unwrap();
        let positional = load(&["demos/collatz.proof"]).unwrap();

        assert_eq!(positional, from_flag);
        assert!(positional.contains("steps"));
    }

    #[test]
    fn plain_contents_are_the_script() {
        assert_eq!(load(&["x = 1; x"]).unwrap(), "x = 1; x");
    }

    #[test]
    fn file_flag_requires_proof_extension() {
        assert_eq!(load(&["-f", "demos/collatz.txt"]).unwrap_err(),
                   "Expected .proof file, got demos/collatz.txt");
    }

    #[test]
    fn max_iterations_defaults_to_the_library_default() {
        let args = Args::try_parse_from(["proofscript", "1"]).unwrap();
        assert_eq!(args.max_iterations, DEFAULT_MAX_ITERATIONS);

        let args = Args::try_parse_from(["proofscript", "-m", "5", "1"]).unwrap();
        assert_eq!(args.max_iterations, 5);
    }
}
