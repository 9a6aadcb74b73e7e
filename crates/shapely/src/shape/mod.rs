//! The `Shape` handle returned by a parse.
//!
//! A `Shape` owns the immutable node tree plus the tensor arena built while
//! parsing. Element counts come from the arena, which holds one entry per
//! distinct tensor object, so a tensor referenced from several places in
//! the input is counted once.

use std::fmt;

use rustc_hash::FxHashMap;
use shapely_value::Dims;

use crate::error::ShapeError;
use crate::node::{ShapeNode, TensorId};

/// One distinct tensor found during a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorEntry {
    id: TensorId,
    dims: Dims,
    elements: u64,
}

impl TensorEntry {
    pub(crate) fn new(id: TensorId, dims: Dims) -> Self {
        let elements = element_count(&dims);
        Self { id, dims, elements }
    }

    #[inline]
    pub fn id(&self) -> TensorId {
        self.id
    }

    /// Dimensions as summarized (after any high-rank collapsing).
    #[inline]
    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    /// Absolute value of the product of the dimensions.
    #[inline]
    pub fn elements(&self) -> u64 {
        self.elements
    }
}

/// `|d1 * d2 * ... * dn|`, saturating instead of overflowing.
///
/// A zero dimension makes the count zero; a `-1` wildcard only flips the
/// sign, which the absolute value discards.
pub fn element_count(dims: &[i64]) -> u64 {
    dims.iter()
        .fold(1i64, |acc, &d| acc.saturating_mul(d))
        .unsigned_abs()
}

/// Parsed summary of a value.
#[derive(Clone, Debug)]
pub struct Shape {
    root: ShapeNode,
    tensors: Vec<TensorEntry>,
    threshold: usize,
}

impl Shape {
    pub(crate) fn new(root: ShapeNode, tensors: Vec<TensorEntry>, threshold: usize) -> Self {
        Self {
            root,
            tensors,
            threshold,
        }
    }

    /// Root of the node tree.
    #[inline]
    pub fn root(&self) -> &ShapeNode {
        &self.root
    }

    /// Take ownership of the node tree.
    pub fn into_root(self) -> ShapeNode {
        self.root
    }

    /// Threshold the value was parsed with.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Render the summary. Same as `to_string()`.
    pub fn render(&self) -> String {
        self.root.to_string()
    }

    /// Distinct tensors, indexed by [`TensorId::index`].
    #[inline]
    pub fn tensors(&self) -> &[TensorEntry] {
        &self.tensors
    }

    #[inline]
    pub fn tensor_count(&self) -> usize {
        self.tensors.len()
    }

    /// Sum of the element counts of every distinct tensor.
    pub fn total_element_count(&self) -> u64 {
        self.tensors
            .iter()
            .map(TensorEntry::elements)
            .fold(0, u64::saturating_add)
    }

    /// Element count of each distinct tensor, keyed by id.
    pub fn tensor_element_counts(&self) -> FxHashMap<TensorId, u64> {
        self.tensors
            .iter()
            .map(|entry| (entry.id, entry.elements))
            .collect()
    }

    /// Dimensions of the only tensor in the value.
    ///
    /// Fails with [`ShapeError::InvariantViolation`] unless the value holds
    /// exactly one distinct tensor.
    pub fn single_tensor_dimensions(&self) -> Result<&[i64], ShapeError> {
        match self.tensors.as_slice() {
            [only] => Ok(only.dims()),
            all => Err(ShapeError::InvariantViolation { found: all.len() }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

#[cfg(test)]
mod tests;
