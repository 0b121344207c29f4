use std::fs;

use clap::Parser;
use lumen::{Context, Options, run_with_context};

/// lumen runs programs written in the Lumen scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lumen source file to run.
    file: String,

    /// Shows general debug output: the token stream and the parsed AST.
    #[arg(short, long)]
    debug: bool,

    /// Reports each compilation phase on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if !args.file.ends_with(".lmn") {
        eprintln!("Warning: file '{}' doesn't have the .lmn extension", args.file);
    }

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file);
        std::process::exit(1);
    });

    let options = Options { debug:   args.debug,
                            verbose: args.verbose, };
    let mut context = Context::new();

    if let Err(e) = run_with_context(&source, &options, &mut context) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
