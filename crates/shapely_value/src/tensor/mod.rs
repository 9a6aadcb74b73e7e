//! The tensor-like capability.
//!
//! A value is tensor-like when it can report a shape descriptor: one size
//! per axis. Nothing else about the tensor (dtype, device, contents) is
//! consulted, so any numeric library can participate by implementing
//! [`TensorLike`] for its tensor type.

use std::fmt;

use smallvec::SmallVec;

/// Per-axis sizes of a tensor. Negative entries are allowed and act as
/// wildcard markers (e.g. an unknown batch dimension).
pub type Dims = SmallVec<[i64; 4]>;

/// Anything exposing a shape descriptor.
///
/// `Display` is the tensor's own textual form, used when a scalar tensor
/// (empty shape) is summarized as itself.
pub trait TensorLike: fmt::Debug + fmt::Display + Send + Sync {
    /// Shape descriptor; empty for a scalar tensor.
    fn shape(&self) -> Dims;
}

/// Minimal dense `f64` tensor.
///
/// Useful for callers without a tensor library at hand and for tests.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseTensor {
    dims: Dims,
    data: Vec<f64>,
}

impl DenseTensor {
    /// Build a tensor from its dimensions and row-major data.
    ///
    /// Returns `None` when `data` does not hold exactly one element per
    /// position of `dims`.
    pub fn new(dims: &[usize], data: Vec<f64>) -> Option<Self> {
        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))?;
        if expected != data.len() {
            return None;
        }
        Some(Self {
            dims: dims.iter().map(|&d| i64::try_from(d).unwrap_or(i64::MAX)).collect(),
            data,
        })
    }

    /// Zero-filled tensor of the given dimensions.
    pub fn zeros(dims: &[usize]) -> Self {
        let len = dims.iter().copied().fold(1usize, usize::saturating_mul);
        Self {
            dims: dims.iter().map(|&d| i64::try_from(d).unwrap_or(i64::MAX)).collect(),
            data: vec![0.0; len],
        }
    }

    /// Zero-dimensional tensor holding one value.
    pub fn scalar(value: f64) -> Self {
        Self {
            dims: Dims::new(),
            data: vec![value],
        }
    }

    /// Row-major element storage.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl TensorLike for DenseTensor {
    fn shape(&self) -> Dims {
        self.dims.clone()
    }
}

impl fmt::Display for DenseTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.dims.is_empty(), self.data.first()) {
            (true, Some(x)) => write!(f, "tensor({x:?})"),
            _ => write!(f, "tensor(shape={:?})", self.dims.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests;
