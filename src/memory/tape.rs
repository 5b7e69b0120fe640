//! Bidirectionally growing tape
//!
//! The tape starts as a single zero cell with the cursor on it. Moving past
//! either end appends exactly one zero cell at that end; cells are never
//! removed. Growing on the left shifts every index by one, so the cursor
//! stays at 0 and now points at the new leftmost cell.

use super::Cell;
use std::collections::VecDeque;

/// Cells plus a cursor that always indexes a valid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: VecDeque<Cell>,
    cursor: usize,
}

impl Tape {
    pub fn new() -> Self {
        Tape {
            cells: VecDeque::from([0]),
            cursor: 0,
        }
    }

    pub fn increment(&mut self) {
        let cell = self.current_mut();
        *cell = cell.wrapping_add(1);
    }

    pub fn decrement(&mut self) {
        let cell = self.current_mut();
        *cell = cell.wrapping_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor += 1;
        if self.cursor == self.cells.len() {
            self.cells.push_back(0);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            self.cells.push_front(0);
        } else {
            self.cursor -= 1;
        }
    }

    /// Value under the cursor.
    pub fn read(&self) -> Cell {
        self.cells[self.cursor]
    }

    /// Overwrite the value under the cursor.
    pub fn write(&mut self, value: Cell) {
        *self.current_mut() = value;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a tape holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells from leftmost to rightmost.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn current_mut(&mut self) -> &mut Cell {
        &mut self.cells[self.cursor]
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_tape() {
        let tape = Tape::new();
        assert_eq!(tape.cells().collect::<Vec<_>>(), vec![0]);
        assert_eq!(tape.cursor(), 0);
        assert!(!tape.is_empty());
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut tape = Tape::new();
        tape.increment();
        assert_eq!(tape.read(), 1);
        tape.decrement();
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn test_right_then_left_keeps_cells() {
        let mut tape = Tape::new();
        tape.move_right();
        assert_eq!(tape.cursor(), 1);
        assert_eq!(tape.len(), 2);
        tape.move_left();
        assert_eq!(tape.cursor(), 0);
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn test_left_from_origin_grows_left() {
        let mut tape = Tape::new();
        tape.increment();
        tape.move_left();
        assert_eq!(tape.len(), 2);
        assert_eq!(tape.cursor(), 0);
        assert_eq!(tape.cells().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_revisit_does_not_grow() {
        let mut tape = Tape::new();
        tape.move_right();
        tape.move_right();
        tape.move_left();
        tape.move_left();
        tape.move_right();
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.cursor(), 1);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let mut tape = Tape::new();
        tape.write(i64::MAX);
        tape.increment();
        assert_eq!(tape.read(), i64::MIN);
        tape.decrement();
        assert_eq!(tape.read(), i64::MAX);
    }
}
