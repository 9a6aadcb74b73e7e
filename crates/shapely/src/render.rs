//! Text rendering of shape nodes.
//!
//! | Node              | Rendering                        |
//! |-------------------|----------------------------------|
//! | `Leaf`            | the value's own `Display`        |
//! | `Sequence` list   | `[a, b, c]`                      |
//! | `Sequence` tuple  | `(a, b, c)`, `(a,)` for one item |
//! | `ElidedSequence`  | `L(<len>) [a, b]`                |
//! | `ElidedMapping`   | `D(<len>) {k: a, k: b}`          |
//! | `Tensor`          | `[d1, d2, d3]`                   |
//! | `Class`           | `'module.Name'`                  |

use std::fmt;

use shapely_value::Quoted;

use crate::node::{SeqKind, ShapeNode};
use crate::stack::with_stack;

/// Render a node to a string. Same as `node.to_string()`.
pub fn render(node: &ShapeNode) -> String {
    node.to_string()
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_sequence(f: &mut fmt::Formatter<'_>, kind: SeqKind, items: &[ShapeNode]) -> fmt::Result {
    match kind {
        SeqKind::List => {
            write!(f, "[")?;
            write_joined(f, items)?;
            write!(f, "]")
        }
        SeqKind::Tuple => {
            write!(f, "(")?;
            write_joined(f, items)?;
            if items.len() == 1 {
                write!(f, ",")?;
            }
            write!(f, ")")
        }
    }
}

impl fmt::Display for ShapeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack(|| match self {
            ShapeNode::Leaf(value) => write!(f, "{value}"),
            ShapeNode::Sequence { kind, items } => write_sequence(f, *kind, items),
            ShapeNode::ElidedSequence { len, items } => {
                write!(f, "L({len}) ")?;
                write_sequence(f, SeqKind::List, items)
            }
            ShapeNode::ElidedMapping { len, entries } => {
                write!(f, "D({len}) {{")?;
                for (i, (key, child)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {child}")?;
                }
                write!(f, "}}")
            }
            ShapeNode::Tensor { dims, .. } => {
                write!(f, "[")?;
                write_joined(f, dims.iter())?;
                write!(f, "]")
            }
            ShapeNode::Class(name) => write!(f, "{}", Quoted(name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TensorId;
    use pretty_assertions::assert_eq;
    use shapely_value::Value;
    use smallvec::smallvec;

    fn leaf(n: i64) -> ShapeNode {
        ShapeNode::Leaf(Value::int(n))
    }

    #[test]
    fn test_sequences() {
        let list = ShapeNode::Sequence {
            kind: SeqKind::List,
            items: vec![leaf(1), leaf(2)],
        };
        assert_eq!(render(&list), "[1, 2]");

        let one = ShapeNode::Sequence {
            kind: SeqKind::Tuple,
            items: vec![leaf(1)],
        };
        assert_eq!(render(&one), "(1,)");

        let empty = ShapeNode::Sequence {
            kind: SeqKind::Tuple,
            items: vec![],
        };
        assert_eq!(render(&empty), "()");
    }

    #[test]
    fn test_elided_nodes() {
        let list = ShapeNode::ElidedSequence {
            len: 10,
            items: vec![leaf(0), leaf(1)],
        };
        assert_eq!(render(&list), "L(10) [0, 1]");

        let map = ShapeNode::ElidedMapping {
            len: 3,
            entries: vec![(Value::string("a"), leaf(1))],
        };
        assert_eq!(render(&map), "D(3) {'a': 1}");

        let empty = ShapeNode::ElidedMapping {
            len: 0,
            entries: vec![],
        };
        assert_eq!(render(&empty), "D(0) {}");
    }

    #[test]
    fn test_tensor_and_class() {
        let tensor = ShapeNode::Tensor {
            dims: smallvec![-1, 3, 224],
            id: TensorId::new(0),
        };
        assert_eq!(render(&tensor), "[-1, 3, 224]");

        let class = ShapeNode::Class("pkg.mod.Thing".to_string());
        assert_eq!(render(&class), "'pkg.mod.Thing'");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let node = ShapeNode::ElidedSequence {
            len: 7,
            items: vec![ShapeNode::Class("a.B".to_string()), leaf(2)],
        };
        assert_eq!(render(&node), render(&node));
    }
}
