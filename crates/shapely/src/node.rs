//! Shape nodes: the immutable tree a parse produces.

use shapely_value::{Dims, Value};

/// Identifier of a distinct tensor within one parse.
///
/// Ids are dense indices handed out in first-seen order. Every occurrence of
/// the same underlying tensor object gets the same id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TensorId(usize);

impl TensorId {
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this tensor in [`Shape::tensors`](crate::Shape::tensors).
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Kind of ordered container a sequence node came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    /// Resizable; elided past the threshold.
    List,
    /// Fixed-arity; never elided.
    Tuple,
}

/// One node of a parsed shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeNode {
    /// A value kept as-is: primitives, sets, scalar tensors.
    Leaf(Value),
    /// Every element of a tuple, or of a list within the threshold.
    Sequence { kind: SeqKind, items: Vec<ShapeNode> },
    /// The leading `threshold` elements of a longer list. Tuples are never
    /// elided, so this is always a list.
    ElidedSequence { len: usize, items: Vec<ShapeNode> },
    /// The leading `threshold` pairs of a mapping, in insertion order.
    ElidedMapping {
        len: usize,
        entries: Vec<(Value, ShapeNode)>,
    },
    /// Dimensions of a tensor-like object.
    Tensor { dims: Dims, id: TensorId },
    /// Fully-qualified type name of an opaque object.
    Class(String),
}

impl ShapeNode {
    /// Direct children, in order.
    pub fn children(&self) -> Box<dyn Iterator<Item = &ShapeNode> + '_> {
        match self {
            ShapeNode::Sequence { items, .. } | ShapeNode::ElidedSequence { items, .. } => {
                Box::new(items.iter())
            }
            ShapeNode::ElidedMapping { entries, .. } => Box::new(entries.iter().map(|(_, v)| v)),
            ShapeNode::Leaf(_) | ShapeNode::Tensor { .. } | ShapeNode::Class(_) => {
                Box::new(std::iter::empty())
            }
        }
    }

    /// Whether this node reports fewer children than its source had.
    pub fn is_elided(&self) -> bool {
        match self {
            ShapeNode::ElidedSequence { len, items, .. } => items.len() < *len,
            ShapeNode::ElidedMapping { len, entries } => entries.len() < *len,
            _ => false,
        }
    }
}

impl ShapeNode {
    /// Move this node's children into `out`.
    fn take_children(&mut self, out: &mut Vec<ShapeNode>) {
        match self {
            ShapeNode::Sequence { items, .. } | ShapeNode::ElidedSequence { items, .. } => {
                out.append(items);
            }
            ShapeNode::ElidedMapping { entries, .. } => {
                out.extend(entries.drain(..).map(|(_, child)| child));
            }
            ShapeNode::Leaf(_) | ShapeNode::Tensor { .. } | ShapeNode::Class(_) => {}
        }
    }
}

impl Drop for ShapeNode {
    /// Releases the tree from a work-list so that dropping a deep shape does
    /// not recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}
