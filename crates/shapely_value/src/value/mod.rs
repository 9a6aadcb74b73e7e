//! Values the shape parser walks.
//!
//! # Heap Enforcement
//!
//! Every heap payload lives behind `Heap<T>`, whose constructor is private
//! to this crate. Outside code goes through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let list = Value::list(vec![Value::int(1)]);    // OK
//! let list = Value::List(Heap::new(vec![]));      // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Identity
//!
//! Tensors and objects compare and hash by identity (the address of their
//! shared payload). Every other variant compares structurally.

mod heap;
mod map;
mod object;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::tensor::TensorLike;

pub use heap::Heap;
pub use map::MapValue;
pub use object::ObjectValue;

/// An arbitrary nested value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline)
    /// Absent value.
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),

    // Heap Types
    /// String value.
    Str(Heap<str>),
    /// Byte string value.
    Bytes(Heap<[u8]>),
    /// Resizable ordered sequence.
    List(Heap<Vec<Value>>),
    /// Fixed-arity ordered sequence.
    Tuple(Heap<Vec<Value>>),
    /// Insertion-ordered mapping.
    Map(Heap<MapValue>),
    /// Collection of distinct values.
    Set(Heap<Vec<Value>>),

    // Identity Types
    /// Tensor-like object, seen only through its shape descriptor.
    Tensor(Heap<dyn TensorLike>),
    /// Opaque instance of a user-defined type.
    Object(Heap<ObjectValue>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_arc(Arc::from(s.as_ref())))
    }

    /// Create a byte string value.
    #[inline]
    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Value::Bytes(Heap::from_arc(Arc::from(b.as_ref())))
    }

    /// Create a list value.
    ///
    /// # Example
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a map value from key/value pairs.
    ///
    /// Later pairs with a repeated key overwrite the earlier value but keep
    /// its position.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Heap::new(entries.into_iter().collect()))
    }

    /// Create a set value, dropping repeated items (first occurrence wins).
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::new();
        for item in items {
            if seen.insert(item.clone()) {
                unique.push(item);
            }
        }
        Value::Set(Heap::new(unique))
    }

    /// Wrap a freshly created tensor-like object.
    pub fn tensor(tensor: impl TensorLike + 'static) -> Self {
        let shared: Arc<dyn TensorLike> = Arc::new(tensor);
        Value::Tensor(Heap::from_arc(shared))
    }

    /// Wrap a tensor-like object that may already be referenced elsewhere.
    ///
    /// Every `Value` built from clones of the same `Arc` is the same tensor
    /// as far as identity is concerned.
    pub fn shared_tensor(tensor: Arc<dyn TensorLike>) -> Self {
        Value::Tensor(Heap::from_arc(tensor))
    }

    /// Create an opaque object value.
    pub fn object(object: ObjectValue) -> Self {
        Value::Object(Heap::new(object))
    }
}

impl Value {
    /// Get the type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "dict",
            Value::Set(_) => "set",
            Value::Tensor(_) => "tensor",
            Value::Object(_) => "object",
        }
    }

    /// The tensor capability of this value, if it has one.
    pub fn as_tensor(&self) -> Option<&dyn TensorLike> {
        match self {
            Value::Tensor(t) => Some(&**t),
            _ => None,
        }
    }

    /// Try to view this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to view this value as a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Text displayed as a quoted string literal.
///
/// Single quotes unless the text contains a single quote and no double
/// quote. Backslashes, the chosen quote and control characters are escaped.
#[derive(Clone, Copy, Debug)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.0)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c if c.is_control() => write!(f, "\\x{:02x}", u32::from(c))?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "b'")?;
    for &b in bytes {
        match b {
            b'\\' => write!(f, "\\\\")?,
            b'\'' => write!(f, "\\'")?,
            b'\n' => write!(f, "\\n")?,
            b'\r' => write!(f, "\\r")?,
            b'\t' => write!(f, "\\t")?,
            0x20..=0x7e => write!(f, "{}", char::from(b))?,
            _ => write!(f, "\\x{b:02x}")?,
        }
    }
    write!(f, "'")
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else {
        // Debug keeps the trailing `.0` on integral floats but writes
        // exponents bare (`1e-5`); pad them to a sign and two digits
        let text = format!("{x:?}");
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&text),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => write_quoted(f, s),
            Value::Bytes(b) => write_bytes(f, b),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Set(items) if items.is_empty() => write!(f, "set()"),
            Value::Set(items) => {
                write!(f, "{{")?;
                write_items(f, items)?;
                write!(f, "}}")
            }
            Value::Tensor(t) => write!(f, "{}", &**t),
            Value::Object(o) => write!(f, "{}", &**o),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Bytes(b) => write!(f, "Bytes({:?})", &**b),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Tuple(items) => write!(f, "Tuple({:?})", &**items),
            Value::Map(map) => f.debug_map().entries(map.iter()).finish(),
            Value::Set(items) => write!(f, "Set({:?})", &**items),
            Value::Tensor(t) => write!(f, "Tensor({:?} @ {:#x})", &**t, t.addr()),
            Value::Object(o) => write!(f, "Object({} @ {:#x})", o.classname(), o.addr()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // Bitwise so that `Eq` and `Hash` agree (NaN == NaN here)
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|item| b.contains(item))
            }
            (Value::Tensor(a), Value::Tensor(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::None => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => x.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::List(items) | Value::Tuple(items) => {
                for item in items.iter() {
                    item.hash(state);
                }
            }
            // Order-insensitive equality: only the size is stable
            Value::Map(map) => map.len().hash(state),
            Value::Set(items) => items.len().hash(state),
            Value::Tensor(t) => t.addr().hash(state),
            Value::Object(o) => o.addr().hash(state),
        }
    }
}

impl Value {
    /// Move the children of a uniquely owned container into `out`.
    ///
    /// Shared containers are left alone: another reference still owns them.
    fn take_children(&mut self, out: &mut Vec<Value>) {
        match self {
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                if let Some(items) = items.get_mut() {
                    out.append(items);
                }
            }
            Value::Map(map) => {
                if let Some(map) = map.get_mut() {
                    map.drain_into(out);
                }
            }
            _ => {}
        }
    }
}

impl Drop for Value {
    /// Releases nested containers from a work-list so that dropping a deeply
    /// nested value does not recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut value) = pending.pop() {
            value.take_children(&mut pending);
        }
    }
}
