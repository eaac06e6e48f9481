use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::ops::{Op, OpKind};
use crate::tape::Tape;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// The step bound of [`execute_steps`] was reached.
    #[error("Step limit reached before the program terminated")]
    StepLimit,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Run a program to completion against a fresh zero-filled tape of
/// `tape_size` cells.
///
/// The tape is owned by this call and dropped on return. A program that
/// loops forever makes this call loop forever; use [`execute_steps`] when a
/// bound is needed.
pub fn execute(
    program: &[Op],
    tape_size: usize,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), ExecutionError> {
    execute_steps(program, tape_size, input, output, u64::MAX)
}

/// Like [`execute`], but fails with [`ExecutionError::StepLimit`] after
/// `max_steps` executed operations. This is what the test and fuzz
/// harnesses run arbitrary programs through.
///
/// The program is expected to come from
/// [`parse_source`](crate::parse_source): jump targets are taken on trust,
/// as the backpatching invariant guarantees they are in range.
pub fn execute_steps(
    program: &[Op],
    tape_size: usize,
    input: &mut impl Read,
    output: &mut impl Write,
    max_steps: u64,
) -> Result<(), ExecutionError> {
    let mut tape = Tape::new(tape_size);
    let mut pos: usize = 0;
    let mut pc: usize = 0;
    let mut steps: u64 = 0;

    while let Some(op) = program.get(pc) {
        if steps >= max_steps {
            return Err(ExecutionError::StepLimit);
        }
        steps += 1;
        match op.kind {
            OpKind::IncrementValue => tape.modify(pos, op.value),
            OpKind::IncrementPtr => pos = tape.step(pos, op.value),
            OpKind::Read => {
                let mut tmp: [u8; 1] = [0; 1];
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                // One raw byte, no whitespace skipping. End of input
                // stores 0.
                let n_bytes = input.read(&mut tmp)?;
                if n_bytes == 0 {
                    tape.set(pos, 0.into());
                } else {
                    tape.set(pos, tmp[0].into());
                }
            }
            OpKind::Write => {
                let tmp: [u8; 1] = [tape.get(pos).into()];
                output.write_all(&tmp)?;
            }
            OpKind::JumpIfZero => {
                if tape.get(pos).is_zero() {
                    pc = op.value as usize;
                }
            }
            OpKind::JumpIfNotZero => {
                if !tape.get(pos).is_zero() {
                    pc = op.value as usize;
                }
            }
        }
        // Taken jumps land one past their partner: forward past the loop
        // body, backward back into it.
        pc += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::execute;
    use super::ExecutionError;
    use crate::parse_source;

    fn run(source: &[u8], tape_size: usize, input: &[u8]) -> Vec<u8> {
        let program = parse_source(source).unwrap();
        let mut input: VecDeque<u8> = input.iter().copied().collect();
        let mut output: Vec<u8> = Vec::new();
        execute(&program, tape_size, &mut input, &mut output).unwrap();
        output
    }

    #[test]
    fn test_value_wraps() {
        assert_eq!(run(b"-.", 1, b""), vec![255]);
        assert_eq!(run(b"--+.", 1, b""), vec![255]);
    }

    #[test]
    fn test_pointer_wraps() {
        // Left from position 0 lands on the last cell.
        assert_eq!(run(b"<+.", 2, b""), vec![1]);
        // A full revolution comes back to the start.
        assert_eq!(run(b"+>>.", 2, b""), vec![1]);
        // Size one: every move is a no-op.
        assert_eq!(run(b"+>+<.", 1, b""), vec![2]);
    }

    #[test]
    fn test_read_is_raw() {
        // Leading whitespace is data, not a separator.
        assert_eq!(run(b",.", 1, b" A"), vec![b' ']);
        assert_eq!(run(b",.,.", 1, b"\nx"), vec![b'\n', b'x']);
    }

    #[test]
    fn test_read_eof_stores_zero() {
        assert_eq!(run(b"+,.", 1, b""), vec![0]);
    }

    #[test]
    fn test_loops() {
        // Clear loop.
        assert_eq!(run(b"+++[-].", 1, b""), vec![0]);
        // A zero cell skips the body entirely.
        assert_eq!(run(b"[,].", 1, b""), vec![0]);
        // Multiply 8 by 8 via a counting loop.
        assert_eq!(run(b"++++++++[>++++++++<-]>.", 2, b""), vec![64]);
    }

    #[test]
    fn test_step_limit() {
        let program = parse_source(b"+[]").unwrap();
        let mut input: VecDeque<u8> = VecDeque::new();
        let mut output: Vec<u8> = Vec::new();
        let res = super::execute_steps(&program, 1, &mut input, &mut output, 100);
        assert_eq!(res, Err(ExecutionError::StepLimit));
    }
}
