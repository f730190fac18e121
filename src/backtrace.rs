//! Backtrace: reconstructs one maximal palindrome from a completed table.
//!
//! The walk starts at the bottom-left cell (the whole sequence) and shrinks
//! the window one decision at a time. Whenever a neighbouring cell carries
//! the same value, the corresponding boundary symbol is redundant and the
//! window drops it; otherwise both boundary symbols belong to the palindrome
//! and are inserted symmetrically around the output's midpoint.

use crate::sequence::InputSequence;
use crate::table::DpTable;

/// Walks a completed [`DpTable`] and reconstructs the symbols of one
/// longest palindromic subsequence.
///
/// Ties between maximal palindromes are broken deterministically: the walk
/// prefers dropping the window's start symbol (step right in the row), then
/// its end symbol (step up the column), before committing a matched pair.
/// The returned sequence therefore is canonical for a given input.
pub struct Backtracer<'a> {
    table: &'a DpTable,
    input: &'a InputSequence,
}

impl<'a> Backtracer<'a> {
    /// Pair a completed table with the sequence it was built from.
    ///
    /// # Panics
    /// Panics if the table dimension does not match the sequence length;
    /// mixing artifacts from different inputs is a caller bug.
    pub fn new(table: &'a DpTable, input: &'a InputSequence) -> Self {
        assert_eq!(
            table.dim(),
            input.len(),
            "table dimension must match sequence length"
        );
        Self { table, input }
    }

    /// Reconstruct the palindrome recorded by the table.
    ///
    /// The result reads identically forward and backward, draws its symbols
    /// from strictly increasing input positions, and has length exactly
    /// [`DpTable::max_len`].
    pub fn run(&self) -> Vec<char> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("backtrace", n = self.input.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut i = self.table.dim() - 1;
        let mut j = 0;
        let mut out = Vec::new();

        if self.table.get(i, j) == Some(1) {
            out.push(self.input.symbol(0));
            return out;
        }

        loop {
            let current = self
                .table
                .get(i, j)
                .expect("backtrace must stay on populated cells");

            if self.table.get(i, j + 1) == Some(current) {
                // Best already achieved without the start symbol.
                j += 1;
            } else if self.cell_above(i, j) == Some(current) {
                // Best already achieved without the end symbol.
                i -= 1;
            } else {
                // Both window ends are part of the palindrome. New symbols
                // always land symmetrically around the output's centre.
                let mid = out.len() / 2;
                let inner = i.checked_sub(1).and_then(|up| self.table.get(up, j + 1));
                out.insert(mid, self.input.symbol(i));
                if inner.is_none() {
                    // Inner window collapsed: final pair, or the unpaired
                    // middle symbol when the window is a single position.
                    if i != j {
                        out.insert(mid + 1, self.input.symbol(j));
                    }
                    break;
                }
                out.insert(mid + 1, self.input.symbol(j));
                i -= 1;
                j += 1;
            }
        }

        out
    }

    /// Read `(i-1, j)` with row `-1` defined as unset.
    fn cell_above(&self, i: usize, j: usize) -> Option<u32> {
        i.checked_sub(1).and_then(|up| self.table.get(up, j))
    }
}
