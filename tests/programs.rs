//! End-to-end tests running real programs through the full pipeline.

use tapeworks::{generate_asm, parse_source, test_utils::test_execute};

/// The classic hello world, with nested loops and a `[<]` scan.
const HELLO_WORLD: &[u8] = b"++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.\
>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn hello_world() {
    let program = parse_source(HELLO_WORLD).unwrap();
    let exec = test_execute(&program, 30000, b"");
    assert_eq!(exec.result, Ok(()));
    assert_eq!(exec.output, b"Hello World!\n");
}

#[test]
fn square_of_eight() {
    let program = parse_source(b"++++++++[>++++++++<-]>.").unwrap();
    let exec = test_execute(&program, 2, b"");
    assert_eq!(exec.result, Ok(()));
    assert_eq!(exec.output, vec![64]);
}

#[test]
fn echo_until_end_of_input() {
    // Copies input to output; stops on the 0 stored at end of input.
    let program = parse_source(b",[.,]").unwrap();
    let exec = test_execute(&program, 1, b"hi there");
    assert_eq!(exec.result, Ok(()));
    assert_eq!(exec.output, b"hi there");
}

#[test]
fn add_two_digits() {
    // Reads "12", adds the cells, prints '3'.
    let program = parse_source(b",>,[<+>-]<------------------------------------------------.").unwrap();
    let exec = test_execute(&program, 2, b"12");
    assert_eq!(exec.result, Ok(()));
    assert_eq!(exec.output, b"3");
}

#[test]
fn infinite_loop_hits_harness_limit() {
    let program = parse_source(b"+[]").unwrap();
    let exec = test_execute(&program, 1, b"");
    assert!(exec.result.is_err());
}

#[test]
fn compiled_output_mirrors_program_structure() {
    let program = parse_source(b"++++++++[>++++++++<-]>.").unwrap();
    let asm = generate_asm(&program, 30000);

    assert!(asm.starts_with("section .data\ntape: times 30000 db 0\n"));
    // One label pair for the single loop: ops 1 (open) and 6 (close).
    assert!(asm.contains("je op6\nop1:\n"));
    assert!(asm.contains("jne op1\nop6:\n"));
    assert!(asm.ends_with("mov ebx, 0\nmov eax, 1\nint 0x80\n"));
}
