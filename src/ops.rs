//! The flat operation sequence shared by the interpreter and the code
//! generator.
//!
//! Sequence indices are semantically significant: jump operations store the
//! index of their partner, and the code generator derives label names from
//! indices. [`jumps_are_paired`] checks that invariant.

/// Kind of a decoded operation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum OpKind {
    /// Fused `>`/`<` run, value is the signed position delta.
    IncrementPtr,
    /// Fused `+`/`-` run, value is the signed cell delta.
    IncrementValue,
    /// `,`: read one byte into the current cell.
    Read,
    /// `.`: write the current cell as one byte.
    Write,
    /// `[`: value is the index of the matching [`OpKind::JumpIfNotZero`].
    JumpIfZero,
    /// `]`: value is the index of the matching [`OpKind::JumpIfZero`].
    JumpIfNotZero,
}

/// One decoded operation. The meaning of `value` depends on `kind`; for
/// [`OpKind::Read`] and [`OpKind::Write`] it is always 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Op {
    pub kind: OpKind,
    pub value: i64,
}

impl Op {
    pub fn new(kind: OpKind, value: i64) -> Self {
        Self { kind, value }
    }

    pub fn is_jump(&self) -> bool {
        matches!(self.kind, OpKind::JumpIfZero | OpKind::JumpIfNotZero)
    }

    /// The jump target as a sequence index, if this is a jump with an
    /// in-range target.
    fn target(&self, len: usize) -> Option<usize> {
        usize::try_from(self.value).ok().filter(|&t| t < len)
    }
}

/// Recover the loop structure from an operation sequence: one
/// `(open_index, close_index)` pair per loop, ordered by open index.
pub fn jump_pairs(program: &[Op]) -> Vec<(usize, usize)> {
    program
        .iter()
        .enumerate()
        .filter_map(|(i, op)| match op.kind {
            OpKind::JumpIfZero => Some((i, op.value as usize)),
            _ => None,
        })
        .collect()
}

/// Check that every jump's target is in range and refers back to it.
///
/// Holds by construction for anything produced by
/// [`parse_source`](crate::parse_source); hand-built sequences may violate
/// it.
pub fn jumps_are_paired(program: &[Op]) -> bool {
    program.iter().enumerate().all(|(i, op)| {
        let partner = match op.kind {
            OpKind::JumpIfZero => OpKind::JumpIfNotZero,
            OpKind::JumpIfNotZero => OpKind::JumpIfZero,
            _ => return true,
        };
        match op.target(program.len()).map(|t| &program[t]) {
            Some(other) => other.kind == partner && other.value == i as i64,
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumps_are_paired() {
        let good = [
            Op::new(OpKind::JumpIfZero, 1),
            Op::new(OpKind::JumpIfNotZero, 0),
        ];
        assert!(jumps_are_paired(&good));
        assert_eq!(jump_pairs(&good), vec![(0, 1)]);

        // Target out of range.
        let oob = [Op::new(OpKind::JumpIfZero, 7)];
        assert!(!jumps_are_paired(&oob));

        // Partner does not point back.
        let bad = [
            Op::new(OpKind::JumpIfZero, 1),
            Op::new(OpKind::JumpIfNotZero, 1),
        ];
        assert!(!jumps_are_paired(&bad));
    }
}
