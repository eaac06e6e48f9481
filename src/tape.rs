//! The interpreter's working memory.

use crate::types::Cell;

/// A fixed-size circular tape of byte cells.
///
/// Allocated on the heap so the size is not limited by stack capacity. All
/// cells start at zero. Positions are plain `usize` indices kept in range
/// by [`Tape::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
}

impl Tape {
    /// Create a zero-filled tape. `size` must be at least one cell.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "tape needs at least one cell");
        Self {
            cells: vec![Cell::default(); size],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    pub fn set(&mut self, pos: usize, value: Cell) {
        self.cells[pos] = value;
    }

    /// Add a signed delta to the cell at `pos`, wrapping modulo 256.
    pub fn modify(&mut self, pos: usize, delta: i64) {
        self.cells[pos] += delta.into();
    }

    /// Move `pos` by `delta`, wrapping circularly into `[0, len)`.
    ///
    /// Uses Euclidean remainder, so deltas of any magnitude (and either
    /// sign) land in range.
    pub fn step(&self, pos: usize, delta: i64) -> usize {
        (pos as i64 + delta).rem_euclid(self.cells.len() as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Tape;

    #[test]
    fn test_tape() {
        let mut tape = Tape::new(5);
        assert_eq!(tape.len(), 5);
        tape.set(2, 5.into());
        assert_eq!(tape.get(2), 5.into());
        tape.modify(2, 255);
        assert_eq!(tape.get(2), 4.into());
        tape.modify(3, -1);
        assert_eq!(tape.get(3), 255.into());
    }

    #[test]
    fn test_step_wraps_both_ways() {
        let tape = Tape::new(5);
        assert_eq!(tape.step(4, 1), 0);
        assert_eq!(tape.step(0, -1), 4);
        assert_eq!(tape.step(2, 2), 4);
        // More than one full revolution still lands in range.
        assert_eq!(tape.step(0, -7), 3);
        assert_eq!(tape.step(3, 11), 4);
    }

    #[test]
    #[should_panic(expected = "at least one cell")]
    fn test_zero_size_rejected() {
        Tape::new(0);
    }
}
