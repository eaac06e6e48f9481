use std::collections::VecDeque;

use crate::interpreter::{execute_steps, ExecutionError};
use crate::ops::Op;

/// Step bound for harness runs. Generous for real test programs, small
/// enough that a fuzz-found infinite loop fails fast.
pub const STEP_LIMIT: u64 = 500_000;

/// Captured outcome of a harness run.
#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Result<(), ExecutionError>,
    pub output: Vec<u8>,
}

/// Run a program with in-memory stdin/stdout and a step bound.
pub fn test_execute(program: &[Op], tape_size: usize, input: &[u8]) -> ExecutionState {
    let mut input: VecDeque<u8> = input.iter().copied().collect();
    let mut output: Vec<u8> = Vec::new();
    let result = execute_steps(program, tape_size, &mut input, &mut output, STEP_LIMIT);
    ExecutionState { result, output }
}
