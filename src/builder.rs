//! Table construction: fills the N×N DP table row by row.
//!
//! Row `i` is populated only after row `i-1` is complete, and within a row
//! columns run from high to low. Both orders are load-bearing: a cell reads
//! `table[i-1][j]`, `table[i-1][j+1]` and `table[i][j+1]`, all of which must
//! already exist.

use crate::sequence::InputSequence;
use crate::table::DpTable;

/// Builds a fully populated [`DpTable`] for one input sequence.
///
/// For every `0 <= j <= i < N`, the finished table satisfies the contract
/// that cell `(i, j)` equals the LPS length of the substring `j..=i`. The
/// build is total and deterministic: re-running it on the same input yields
/// an identical table.
pub struct TableBuilder<'a> {
    input: &'a InputSequence,
}

impl<'a> TableBuilder<'a> {
    pub fn new(input: &'a InputSequence) -> Self {
        Self { input }
    }

    /// Fill and return the table.
    pub fn build(&self) -> DpTable {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_table", n = self.input.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n = self.input.len();
        let mut table = DpTable::new(n);

        // A single symbol is trivially a palindrome of length 1.
        for i in 0..n {
            table.set(i, i, 1);
        }

        // i = 0 has no windows below the diagonal; its row stays sparse.
        for i in 1..n {
            for j in (0..i).rev() {
                let fresh = self.fresh_candidate(&table, i, j);
                let inherited = table
                    .get(i - 1, j)
                    .expect("row above must be complete before row i");
                // Extending the window by one trailing symbol never shortens
                // the best palindrome found with the same start.
                let best = if fresh > inherited { fresh } else { inherited };
                table.set(i, j, best);
            }
        }

        table
    }

    /// Best palindrome in the window `[j, i]` not already recorded for
    /// `[j, i-1]`.
    ///
    /// If the window's end symbols match, the pair wraps the best palindrome
    /// of the inner window `[j+1, i-1]`; a collapsed inner window reads as
    /// `None` and contributes zero. Otherwise position `j` cannot be the left
    /// end of any palindrome ending at `i`, and the answer for `[j+1, i]`
    /// carries over unchanged.
    fn fresh_candidate(&self, table: &DpTable, i: usize, j: usize) -> u32 {
        if self.input.symbol(i) == self.input.symbol(j) {
            2 + table.get(i - 1, j + 1).unwrap_or(0)
        } else {
            table
                .get(i, j + 1)
                .expect("columns right of j in row i are filled first")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(s: &str) -> DpTable {
        let input: InputSequence = s.parse().unwrap();
        TableBuilder::new(&input).build()
    }

    #[test]
    fn single_symbol_is_one_cell() {
        let t = build("a");
        assert_eq!(t.dim(), 1);
        assert_eq!(t.get(0, 0), Some(1));
        assert_eq!(t.max_len(), 1);
    }

    #[test]
    fn matched_pair_scores_two() {
        let t = build("aa");
        assert_eq!(t.get(1, 0), Some(2));
    }

    #[test]
    fn mismatched_pair_scores_one() {
        let t = build("ab");
        assert_eq!(t.get(1, 0), Some(1));
    }

    #[test]
    fn row_zero_has_only_the_diagonal() {
        let t = build("abc");
        assert_eq!(t.get(0, 0), Some(1));
        assert_eq!(t.get(0, 1), None);
        assert_eq!(t.get(0, 2), None);
    }

    #[test]
    fn window_cells_match_their_substrings() {
        // "abcba": every populated cell is the LPS length of its own window.
        let t = build("abcba");
        assert_eq!(t.get(4, 0), Some(5)); // abcba
        assert_eq!(t.get(3, 1), Some(3)); // bcb
        assert_eq!(t.get(2, 1), Some(1)); // bc
        assert_eq!(t.get(4, 2), Some(1)); // cba
        assert_eq!(t.max_len(), 5);
    }

    #[test]
    fn greedy_pairing_trap_is_scored_exactly() {
        // The rightmost 'd' must be skipped, not paired with the inner 'd'.
        let t = build("xaddadx");
        assert_eq!(t.max_len(), 6);
    }
}
