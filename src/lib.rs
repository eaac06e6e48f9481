//! # tapeworks - A Brainfuck interpreter and x86 assembly compiler
//!
//! Source text is parsed once into a flat operation sequence (runs of
//! `+`/`-` and `>`/`<` folded, bracket jumps resolved by backpatching),
//! which then drives either direct interpretation against a fixed-size
//! circular tape or generation of 32-bit x86 assembly with equivalent
//! semantics.
//!
//! **NOTE! This is primarily a command line program. The library API is
//! not stable.**

// Re-export some symbols.
pub use codegen::generate_asm;
pub use interpreter::execute;
pub use interpreter::execute_steps;
pub use interpreter::ExecutionError;
pub use parser::parse_source;
pub use parser::ParseError;
pub use types::Cell;

mod codegen;
mod interpreter;
pub mod ops;
mod parser;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
