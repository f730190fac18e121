//! Longest palindromic subsequence via table-filling dynamic programming.
//!
//! This crate computes the length of the longest palindromic subsequence
//! (LPS) of a symbol sequence *and* reconstructs one such subsequence, not
//! just its length.
//!
//! ## Core idea
//! 1. Wrap the raw symbols in an [`InputSequence`] (non-empty, immutable).
//! 2. [`TableBuilder`] fills an N×N [`DpTable`] where cell `(i, j)` holds the
//!    LPS length of the substring spanning positions `j..=i`.
//! 3. [`Backtracer`] walks the completed table from the bottom-left cell
//!    (the full sequence) back to a length-1 base case, emitting matched
//!    symbol pairs outward from the middle of the output.
//!
//! The two phases are strictly sequential: the table is fully populated
//! before the backtrace reads it, and the whole computation is a pure
//! function of the input.
//!
//! ## Quick start
//! ```
//! use lps_dp::{Backtracer, InputSequence, TableBuilder};
//!
//! let input: InputSequence = "character".parse()?;
//! let table = TableBuilder::new(&input).build();
//! let palindrome = Backtracer::new(&table, &input).run();
//!
//! assert_eq!(table.max_len(), 5);
//! assert_eq!(palindrome.iter().collect::<String>(), "carac");
//! # Ok::<(), lps_dp::LpsError>(())
//! ```
//!
//! When multiple maximal palindromes exist, the backtrace is deterministic:
//! it prefers dropping the window's start symbol, then its end symbol, before
//! committing a matched pair. See [`Backtracer`] for details.

pub mod backtrace;
pub mod builder;
pub mod error;
pub mod sequence;
pub mod table;

pub use crate::backtrace::Backtracer;
pub use crate::builder::TableBuilder;
pub use crate::error::LpsError;
pub use crate::sequence::InputSequence;
pub use crate::table::DpTable;

/// Run both phases in sequence and return one maximal palindromic
/// subsequence of `input`.
///
/// Convenience wrapper over [`TableBuilder`] and [`Backtracer`] for callers
/// that do not need the intermediate table.
pub fn longest_palindromic_subsequence(input: &InputSequence) -> Vec<char> {
    let table = TableBuilder::new(input).build();
    Backtracer::new(&table, input).run()
}
