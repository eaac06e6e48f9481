//! Code generation
//!
//! Emits 32-bit x86 assembly in NASM syntax, targeting Linux via `int 0x80`
//! syscalls. The output needs an external assembler and linker to become
//! runnable, e.g. `nasm -f elf32 out.asm && ld -m elf_i386 out.o`.

use crate::ops::{jumps_are_paired, Op, OpKind};

/// Label for the jump operation at a sequence index.
///
/// The mapping is injective, so sequence indices double as the label
/// namespace and paired jumps resolve each other without a symbol table.
fn jump_label(index: usize) -> String {
    format!("op{index}")
}

/// Generate assembly implementing the same semantics as the interpreter,
/// against a static zero-filled buffer of `tape_size` cells.
///
/// `ebx` holds the tape position. No pointer wraparound correction is
/// emitted; a program that runs off either end of the buffer is undefined
/// behavior in the generated code.
///
/// The output is deterministic byte-for-byte for a given program and tape
/// size.
pub fn generate_asm(program: &[Op], tape_size: usize) -> String {
    debug_assert!(
        jumps_are_paired(program),
        "jump operations must hold each other's sequence index"
    );

    let mut s: String = "section .data\n".into();
    s += format!("tape: times {tape_size} db 0\n").as_str();
    s += "section .text\n";
    s += "global _start\n";
    s += "_start:\n";
    s += "xor ebx, ebx\n";

    for (index, op) in program.iter().enumerate() {
        match op.kind {
            OpKind::IncrementValue => {
                s += "; adjust current cell\n";
                // Byte-sized immediate; the signed delta reduces mod 256.
                s += format!("add byte [tape+ebx], {}\n", op.value.rem_euclid(256)).as_str();
            }
            OpKind::IncrementPtr => {
                s += "; move tape position\n";
                s += format!("add ebx, {}\n", op.value).as_str();
            }
            OpKind::Read => {
                s += "; read one byte into current cell\n";
                s += "mov ecx, tape\n";
                s += "add ecx, ebx\n";
                s += "push ebx\n";
                s += "mov eax, 0x3\n";
                s += "mov ebx, 0x0\n";
                s += "mov edx, 0x1\n";
                s += "int 0x80\n";
                s += "pop ebx\n";
            }
            OpKind::Write => {
                s += "; write current cell as one byte\n";
                s += "mov ecx, tape\n";
                s += "add ecx, ebx\n";
                s += "push ebx\n";
                s += "mov eax, 0x4\n";
                s += "mov ebx, 0x1\n";
                s += "mov edx, 0x1\n";
                s += "int 0x80\n";
                s += "pop ebx\n";
            }
            OpKind::JumpIfZero => {
                s += "; skip loop if current cell is 0\n";
                s += "cmp byte [tape+ebx], 0\n";
                s += format!("je {}\n", jump_label(op.value as usize)).as_str();
                // Own label right after the jump, so the matching close
                // re-enters the body here.
                s += format!("{}:\n", jump_label(index)).as_str();
            }
            OpKind::JumpIfNotZero => {
                s += "; repeat loop if current cell is not 0\n";
                s += "cmp byte [tape+ebx], 0\n";
                s += format!("jne {}\n", jump_label(op.value as usize)).as_str();
                s += format!("{}:\n", jump_label(index)).as_str();
            }
        }
    }

    s += "; exit(0)\n";
    s += "mov ebx, 0\n";
    s += "mov eax, 1\n";
    s += "int 0x80\n";
    s
}
