#![no_main]

use libfuzzer_sys::fuzz_target;

use tapeworks::ops::jumps_are_paired;
use tapeworks::{parse_source, ParseError};

/// Independent bracket-balance oracle, tracking byte offsets the same way
/// the parser reports them.
fn check_loop_balance(data: &[u8]) -> Option<ParseError> {
    let mut opens: Vec<usize> = vec![];
    for (pos, b) in data.iter().enumerate() {
        match b {
            b'[' => opens.push(pos),
            b']' => {
                if opens.pop().is_none() {
                    return Some(ParseError::UnbalancedClose(pos));
                }
            }
            _ => (),
        }
    }
    opens.last().map(|&pos| ParseError::UnbalancedOpen(pos))
}

fuzz_target!(|data: &[u8]| {
    match parse_source(data) {
        Ok(ops) => {
            assert_eq!(check_loop_balance(data), None);
            assert!(jumps_are_paired(&ops));
        }
        Err(e) => {
            assert_eq!(check_loop_balance(data), Some(e));
        }
    }
});
