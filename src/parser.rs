use thiserror::Error;

use crate::ops::{Op, OpKind};

/// Tokens in source file
#[derive(Debug, PartialEq, Clone, Copy)]
enum Token {
    Left,
    Right,
    Add,
    Subtract,
    Input,
    Output,
    BeginLoop,
    EndLoop,
}

impl Token {
    /// Signed contribution of one character to a fused run.
    fn delta(self) -> i64 {
        match self {
            Token::Add | Token::Right => 1,
            Token::Subtract | Token::Left => -1,
            _ => 0,
        }
    }
}

/// Scans source code, producing a stream of tokens.
fn lexer(source_code: &'_ [u8]) -> impl Iterator<Item = (usize, Token)> + '_ {
    // Tokenise and discard unknown bytes
    source_code
        .iter()
        .enumerate() // For keeping track of source location
        .filter_map(|(pos, c)| match c {
            b'<' => Some((pos, Token::Left)),
            b'>' => Some((pos, Token::Right)),
            b'+' => Some((pos, Token::Add)),
            b'-' => Some((pos, Token::Subtract)),
            b'.' => Some((pos, Token::Output)),
            b',' => Some((pos, Token::Input)),
            b'[' => Some((pos, Token::BeginLoop)),
            b']' => Some((pos, Token::EndLoop)),
            _ => None,
        })
}

/// A `[` waiting for its `]`. The placeholder operation at `op_index` gets
/// patched when the close is found.
#[derive(Debug)]
struct PendingLoop {
    op_index: usize,
    source_pos: usize,
}

/// Errors during parsing
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A `]` with no matching `[`.
    #[error("Unexpected closing bracket (]) at byte {0}")]
    UnbalancedClose(usize),
    /// A `[` that was never closed.
    #[error("Unclosed opening bracket ([) at byte {0}")]
    UnbalancedOpen(usize),
}

/// Parse source code into an operation sequence.
///
/// Runs of source-adjacent `+`/`-` (and `>`/`<`) fold into a single
/// operation carrying the net signed delta. Bracket pairs are resolved in
/// the same pass: `[` appends a placeholder whose value is patched to the
/// index of its `]` once that close is reached, so both jumps end up
/// holding each other's sequence index.
pub fn parse_source(source_code: &[u8]) -> Result<Vec<Op>, ParseError> {
    let mut ops: Vec<Op> = vec![];
    let mut pending: Vec<PendingLoop> = vec![];
    let mut tokens = lexer(source_code).peekable();

    while let Some((pos, token)) = tokens.next() {
        match token {
            Token::Add | Token::Subtract | Token::Left | Token::Right => {
                let same_class = |t: Token| match token {
                    Token::Add | Token::Subtract => matches!(t, Token::Add | Token::Subtract),
                    _ => matches!(t, Token::Left | Token::Right),
                };
                let mut value = token.delta();
                let mut run_end = pos;
                // A run is broken by any intervening byte, even a skipped
                // one, matching a scanner that stops at the first
                // out-of-class character.
                while let Some(&(next_pos, next_token)) = tokens.peek() {
                    if next_pos != run_end + 1 || !same_class(next_token) {
                        break;
                    }
                    value += next_token.delta();
                    run_end = next_pos;
                    tokens.next();
                }
                let kind = match token {
                    Token::Add | Token::Subtract => OpKind::IncrementValue,
                    _ => OpKind::IncrementPtr,
                };
                ops.push(Op::new(kind, value));
            }
            Token::Input => ops.push(Op::new(OpKind::Read, 0)),
            Token::Output => ops.push(Op::new(OpKind::Write, 0)),
            Token::BeginLoop => {
                let op_index = ops.len();
                pending.push(PendingLoop {
                    op_index,
                    source_pos: pos,
                });
                // Placeholder value: its own index, patched on close.
                ops.push(Op::new(OpKind::JumpIfZero, op_index as i64));
            }
            Token::EndLoop => {
                let open = pending.pop().ok_or(ParseError::UnbalancedClose(pos))?;
                let close_index = ops.len();
                ops[open.op_index].value = close_index as i64;
                ops.push(Op::new(OpKind::JumpIfNotZero, open.op_index as i64));
            }
        }
    }

    if let Some(open) = pending.last() {
        return Err(ParseError::UnbalancedOpen(open.source_pos));
    }
    Ok(ops)
}
