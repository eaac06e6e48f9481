#![no_main]

use libfuzzer_sys::fuzz_target;

use tapeworks::generate_asm;
use tapeworks::parse_source;

fuzz_target!(|data: &[u8]| {
    let Ok(program) = parse_source(data) else {
        return;
    };
    let asm = generate_asm(&program, 30000);
    // Same program, same text.
    assert_eq!(asm, generate_asm(&program, 30000));
});
