#![no_main]

use libfuzzer_sys::fuzz_target;

use tapeworks::execute_steps;
use tapeworks::parse_source;
use tapeworks::ExecutionError;
use tapeworks_fuzz::FuzzInputSrc;

fuzz_target!(|data: FuzzInputSrc| {
    let Ok(program) = parse_source(&data.code) else {
        return;
    };
    let mut input = data.input;
    let mut output: Vec<u8> = Vec::new();

    match execute_steps(&program, 256, &mut input, &mut output, 10_000) {
        Ok(_) => (),
        Err(ExecutionError::StepLimit) => (),
        Err(ExecutionError::IoError(_)) => (),
    }
});
