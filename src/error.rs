//! Error types for input validation.
//!
//! The core algorithm is total over any non-empty sequence, so the only
//! recoverable failure lives at the input boundary. Internal consistency
//! violations (a backtrace walking off the populated table region, a cell
//! written twice) indicate construction bugs and panic instead.

use thiserror::Error;

/// Errors surfaced while preparing input for the computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LpsError {
    /// The computation requires at least one symbol; an empty sequence has
    /// no defined palindromic subsequence.
    #[error("input sequence is empty")]
    EmptyInput,
}
