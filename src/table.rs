//! The DP table: an N×N arena of optional palindrome lengths.
//!
//! Cell `(end, start)` with `start <= end` holds the length of the longest
//! palindromic subsequence within the substring spanning positions
//! `start..=end`. Cells above the diagonal (`start > end`) are never
//! written; reads there, like any out-of-range read, return `None` and act
//! as the algorithm's base case.

use std::fmt;

/// Fully indexed N×N table, row = end position, column = start position.
///
/// The table is append-only during construction (each cell written exactly
/// once) and read-only during backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable {
    n: usize,
    cells: Vec<Option<u32>>,
}

impl DpTable {
    /// Allocate an all-unset table for a sequence of length `n`.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    /// Side length N of the table.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Guarded cell read.
    ///
    /// Total over all index pairs: out-of-range coordinates and never-written
    /// cells (the region above the diagonal) read as `None`.
    #[inline]
    pub fn get(&self, end: usize, start: usize) -> Option<u32> {
        if end >= self.n || start >= self.n {
            return None;
        }
        self.cells[end * self.n + start]
    }

    /// Write a cell once.
    pub(crate) fn set(&mut self, end: usize, start: usize, len: u32) {
        debug_assert!(end < self.n && start <= end, "write outside lower triangle");
        let cell = &mut self.cells[end * self.n + start];
        debug_assert!(cell.is_none(), "cell ({end}, {start}) written twice");
        *cell = Some(len);
    }

    /// Length of the longest palindromic subsequence of the whole input:
    /// the bottom-left cell, spanning start 0 through end N-1.
    ///
    /// # Panics
    /// Panics if the table was not fully built; [`crate::TableBuilder::build`]
    /// always populates this cell.
    pub fn max_len(&self) -> u32 {
        self.get(self.n - 1, 0)
            .expect("bottom-left cell must be populated")
    }
}

/// Diagnostic rendering: one row per line, `-` for unset cells.
impl fmt::Display for DpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for end in 0..self.n {
            for start in 0..self.n {
                if start > 0 {
                    write!(f, " ")?;
                }
                match self.get(end, start) {
                    Some(len) => write!(f, "{len}")?,
                    None => write!(f, "-")?,
                }
            }
            if end + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DpTable;

    #[test]
    fn set_then_get_round_trips() {
        let mut t = DpTable::new(3);
        t.set(1, 0, 2);
        assert_eq!(t.get(1, 0), Some(2));
        assert_eq!(t.get(0, 0), None);
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let t = DpTable::new(2);
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 2), None);
        assert_eq!(t.get(usize::MAX, 0), None);
    }

    #[test]
    #[should_panic(expected = "written twice")]
    fn double_write_panics() {
        let mut t = DpTable::new(2);
        t.set(0, 0, 1);
        t.set(0, 0, 1);
    }

    #[test]
    fn display_marks_unset_cells() {
        let mut t = DpTable::new(2);
        t.set(0, 0, 1);
        t.set(1, 1, 1);
        t.set(1, 0, 2);
        assert_eq!(t.to_string(), "1 -\n2 1");
    }
}
