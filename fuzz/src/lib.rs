//! Fuzzing helper types

use std::collections::VecDeque;
use std::fmt::Debug;

/// Fuzzed source code plus the stdin bytes to feed it.
#[derive(arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: Vec<u8>,
    pub input: VecDeque<u8>,
}

impl Debug for FuzzInputSrc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInputSrc")
            .field("code", &String::from_utf8_lossy(&self.code))
            .field("input", &self.input)
            .finish()
    }
}
