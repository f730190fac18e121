//! Input representation: an immutable, 0-indexed symbol sequence.

use std::fmt;
use std::str::FromStr;

use crate::error::LpsError;

/// Immutable, 0-indexed sequence of symbols, length ≥ 1.
///
/// Owned exclusively by the computation and read-only to both the table
/// builder and the backtracer. Symbols are discrete `char`s; no Unicode
/// normalization is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSequence {
    symbols: Vec<char>,
}

impl InputSequence {
    /// Wrap a symbol vector, rejecting empty input.
    pub fn new(symbols: Vec<char>) -> Result<Self, LpsError> {
        if symbols.is_empty() {
            return Err(LpsError::EmptyInput);
        }
        Ok(Self { symbols })
    }

    /// Number of symbols N.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: emptiness is rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at position `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`; the builder and backtracer only index
    /// within bounds by construction.
    #[inline]
    pub fn symbol(&self, idx: usize) -> char {
        self.symbols[idx]
    }

    /// The full symbol slice.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl FromStr for InputSequence {
    type Err = LpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for InputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(InputSequence::new(Vec::new()), Err(LpsError::EmptyInput));
        assert_eq!("".parse::<InputSequence>(), Err(LpsError::EmptyInput));
    }

    #[test]
    fn parses_and_indexes() {
        let seq: InputSequence = "aba".parse().unwrap();
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.symbol(0), 'a');
        assert_eq!(seq.symbol(1), 'b');
        assert_eq!(seq.symbols(), &['a', 'b', 'a']);
        assert_eq!(seq.to_string(), "aba");
    }

    #[test]
    fn keeps_symbols_literal() {
        // Whatever the collaborator hands over is treated as-is, whitespace
        // included.
        let seq: InputSequence = "a b\t".parse().unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.symbol(1), ' ');
        assert_eq!(seq.symbol(3), '\t');
    }
}
