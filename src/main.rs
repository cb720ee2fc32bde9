use std::{fs, io};

use clap::Parser;
use woclang::{interpret, interpreter::value::Value, repl};

/// WocLang is a small interpreted language with a DFA lexer, a Pratt
/// parser, and a tree-walking evaluator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path to a script file instead of inline
    /// source.
    #[arg(short, long)]
    file: bool,

    /// Source text to run; the interactive shell starts when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        if let Err(e) = repl::start(&mut input, &mut output) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    match interpret(&script) {
        Ok(value) => {
            if !matches!(*value, Value::Null) {
                println!("{value}");
            }
        },
        Err(e) => eprintln!("{e}"),
    }
}
