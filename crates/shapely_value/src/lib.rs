//! Shapely Values - the in-memory data model summarized by `shapely`.
//!
//! This crate provides:
//! - The heterogeneous `Value` enum (scalars, lists, tuples, maps, sets,
//!   tensors and opaque objects)
//! - `Heap<T>`, the shared `Arc` wrapper every heap payload goes through
//! - The `TensorLike` capability and a minimal `DenseTensor` implementor
//! - `ObjectValue`, the type path of an opaque instance
//!
//! # Construction
//!
//! Heap values are only built through `Value::` factory methods:
//!
//! ```text
//! let row = Value::list(vec![Value::int(1), Value::int(2)]);
//! let batch = Value::tensor(DenseTensor::zeros(&[8, 3]));
//! ```
//!
//! Cloning a `Value` clones the `Arc`, so a cloned tensor or object keeps
//! its identity.

mod tensor;
mod value;

pub use tensor::{DenseTensor, Dims, TensorLike};
pub use value::{Heap, MapValue, ObjectValue, Quoted, Value};
