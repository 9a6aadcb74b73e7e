//! The recursive shape parser.
//!
//! # Classification
//!
//! Each value is classified in a fixed precedence order:
//!
//! 1. Mapping: always an `ElidedMapping` of the first `threshold` pairs
//! 2. Tuple, or list of at most `threshold` items: a `Sequence` of every item
//! 3. Longer list: an `ElidedSequence` of the first `threshold` items
//! 4. Tensor-like: a `Tensor` node, or a `Leaf` when the shape is empty
//! 5. Other builtin values (scalars, strings, bytes, sets): a `Leaf`
//! 6. Opaque objects: a `Class` node with the fully-qualified type name
//!
//! Only items that survive truncation are visited, so tensors past the
//! threshold of an elided container are not recorded in the tensor arena.
//!
//! # Tensor Identity
//!
//! Tensors are interned by the address of their shared payload. The input
//! is borrowed for the whole parse, so an address cannot be reused by a
//! different tensor while the arena is alive.

use rustc_hash::FxHashMap;
use shapely_value::{Dims, Heap, MapValue, TensorLike, Value};

use crate::config::{HighRankDims, ParseOptions, DISPLAY_RANK};
use crate::node::{SeqKind, ShapeNode, TensorId};
use crate::shape::{Shape, TensorEntry};
use crate::stack::with_stack;

/// Distinct tensors seen during one parse, in first-seen order.
#[derive(Default)]
struct TensorArena {
    ids: FxHashMap<usize, TensorId>,
    entries: Vec<TensorEntry>,
}

impl TensorArena {
    fn intern(&mut self, addr: usize, dims: &Dims) -> TensorId {
        if let Some(&id) = self.ids.get(&addr) {
            return id;
        }
        let id = TensorId::new(self.entries.len());
        tracing::trace!(index = id.index(), ?dims, "new tensor");
        self.entries.push(TensorEntry::new(id, dims.clone()));
        self.ids.insert(addr, id);
        id
    }
}

/// Single-use parser that turns one value into a [`Shape`].
pub struct ShapeParser {
    threshold: usize,
    high_rank: HighRankDims,
    arena: TensorArena,
}

impl ShapeParser {
    /// Create a parser, resolving the threshold now.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            threshold: options.resolved_threshold(),
            high_rank: options.high_rank,
            arena: TensorArena::default(),
        }
    }

    /// Threshold this parser truncates at.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Parse `value`, consuming the parser.
    #[tracing::instrument(level = "debug", skip_all, fields(threshold = self.threshold))]
    pub fn parse(mut self, value: &Value) -> Shape {
        let root = self.parse_node(value);
        let tensors = self.arena.entries;
        tracing::debug!(tensors = tensors.len(), "shape parsed");
        Shape::new(root, tensors, self.threshold)
    }

    fn parse_node(&mut self, value: &Value) -> ShapeNode {
        with_stack(|| match value {
            Value::Map(map) => self.parse_mapping(map),
            Value::Tuple(items) => self.parse_sequence(SeqKind::Tuple, items),
            Value::List(items) if items.len() <= self.threshold => {
                self.parse_sequence(SeqKind::List, items)
            }
            Value::List(items) => self.parse_elided(items),
            Value::Tensor(tensor) => self.parse_tensor(tensor, value),
            Value::None
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Bytes(_)
            | Value::Set(_) => ShapeNode::Leaf(value.clone()),
            Value::Object(object) => ShapeNode::Class(object.classname()),
        })
    }

    fn parse_mapping(&mut self, map: &MapValue) -> ShapeNode {
        let len = map.len();
        if len > self.threshold {
            tracing::trace!(len, kept = self.threshold, "eliding mapping");
        }
        let entries = map
            .iter()
            .take(self.threshold)
            .map(|(key, child)| (key.clone(), self.parse_node(child)))
            .collect();
        ShapeNode::ElidedMapping { len, entries }
    }

    fn parse_sequence(&mut self, kind: SeqKind, items: &[Value]) -> ShapeNode {
        let items = items.iter().map(|item| self.parse_node(item)).collect();
        ShapeNode::Sequence { kind, items }
    }

    fn parse_elided(&mut self, items: &[Value]) -> ShapeNode {
        let len = items.len();
        tracing::trace!(len, kept = self.threshold, "eliding sequence");
        let items = items
            .iter()
            .take(self.threshold)
            .map(|item| self.parse_node(item))
            .collect();
        ShapeNode::ElidedSequence { len, items }
    }

    fn parse_tensor(&mut self, tensor: &Heap<dyn TensorLike>, value: &Value) -> ShapeNode {
        let dims = tensor.shape();
        if dims.is_empty() {
            // Scalar tensor: summarized as itself
            return ShapeNode::Leaf(value.clone());
        }
        let dims = self.display_dims(dims);
        let id = self.arena.intern(tensor.addr(), &dims);
        ShapeNode::Tensor { dims, id }
    }

    fn display_dims(&self, dims: Dims) -> Dims {
        match self.high_rank {
            HighRankDims::Collapse if dims.len() > DISPLAY_RANK => {
                let trailing = &dims[dims.len() - (DISPLAY_RANK - 1)..];
                std::iter::once(-1).chain(trailing.iter().copied()).collect()
            }
            _ => dims,
        }
    }
}
