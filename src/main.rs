use std::{
    fs,
    io::{self, Cursor},
};

use clap::Parser;
use deskcalc::interpreter::session::Session;

/// deskcalc is an interactive desk calculator with a recursive-descent
/// expression grammar.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the statements in a file instead of starting the interactive
    /// session.
    #[arg(short, long)]
    file: Option<String>,

    /// Evaluate a single expression, print its value, and exit.
    #[arg(short, long)]
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(source) = args.expr {
        match deskcalc::evaluate(&source) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let result = if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        });
        Session::new(Cursor::new(script.into_bytes()), io::stdout(), io::stderr()).run()
    } else {
        let stdin = io::stdin();
        Session::new(stdin.lock(), io::stdout(), io::stderr()).run()
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(2);
    }
}
