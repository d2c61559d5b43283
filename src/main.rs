use std::{error::Error, fs, process};

use clap::{Parser, ValueEnum};
use quill::{get_result, parse, tokenize, typecheck};

/// quill is a small expression-oriented language with static types.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the program once it has run.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Runs the program without type checking it first.
    #[arg(short, long)]
    unchecked: bool,

    /// Prints an intermediate stage instead of running the program.
    #[arg(long, value_enum)]
    emit: Option<Stage>,

    contents: String,
}

/// A pipeline stage whose output can be printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Stage {
    /// One token per line, with its kind and location.
    Tokens,
    /// The parsed expression tree.
    Ast,
    /// The program's static type.
    Type,
}

fn emit(source: &str, stage: Stage) -> Result<(), Box<dyn Error>> {
    let tokens = tokenize(source)?;
    if stage == Stage::Tokens {
        for token in &tokens {
            println!("{}: {} '{}'", token.location, token.kind, token.text);
        }
        return Ok(());
    }

    let program = parse(&tokens)?;
    match stage {
        Stage::Ast => println!("{program}"),
        _ => println!("{}", typecheck(&program)?),
    }
    Ok(())
}

fn run(source: &str, checked: bool, pipe_mode: bool) -> Result<(), Box<dyn Error>> {
    let value = get_result(source, checked)?;
    if pipe_mode {
        println!("{value}");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let outcome = match args.emit {
        Some(stage) => emit(&script, stage),
        None => run(&script, !args.unchecked, args.pipe_mode),
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        process::exit(1);
    }
}
