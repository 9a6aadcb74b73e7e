//! Error types for shape accessors.
//!
//! Parsing itself never fails: every value degrades to the most specific
//! node kind that applies. Only accessors that assume a particular tree
//! shape can report an error.

use thiserror::Error;

/// Errors raised by [`Shape`](crate::Shape) accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The accessor needs exactly one tensor in the parsed value.
    #[error("cannot get single tensor dimensions: expected exactly one tensor, found {found}")]
    InvariantViolation { found: usize },
}
