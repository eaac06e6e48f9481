use std::{
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;

use clap::{Parser, ValueEnum};
use tapeworks::{execute, generate_asm, parse_source, ExecutionError, ParseError};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Interpret the program
    Interpret,
    /// Generate x86 assembly for the program
    Compile,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Brainfuck source file
    input_file: PathBuf,

    /// Select program mode
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Mode>,

    /// Assembly output file (compile mode only)
    #[arg(short, long, value_name = "FILE", required_if_eq("mode", "compile"))]
    output: Option<PathBuf>,

    /// Tape size in cells
    #[arg(short = 's', long, default_value_t = 30000,
          value_parser = clap::value_parser!(u64).range(1..))]
    tape_size: u64,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let mut file = std::fs::File::open(args.input_file)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;

    let program = parse_source(buf.as_slice())?;
    let tape_size = args.tape_size as usize;

    match args.mode.unwrap_or(Mode::Interpret) {
        Mode::Interpret => {
            execute(
                &program,
                tape_size,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout().lock(),
            )?;
        }
        Mode::Compile => {
            // Presence is enforced by clap via required_if_eq.
            let Some(path) = args.output else {
                unreachable!()
            };
            std::fs::write(path, generate_asm(&program, tape_size))?;
        }
    }

    Ok(())
}
