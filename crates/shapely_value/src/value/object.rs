//! Opaque instances of user-defined types.
//!
//! The summarizer never looks inside an object; all it needs is the
//! dotted path of the object's type.

use std::fmt;

/// Type path of an opaque instance, split into module and qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    module: String,
    qualname: String,
}

impl ObjectValue {
    /// Create an object description from an explicit module and name.
    pub fn new(module: impl Into<String>, qualname: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            qualname: qualname.into(),
        }
    }

    /// Describe an instance of the Rust type `T`.
    ///
    /// `std::any::type_name` paths are split at the last `::` before any
    /// generic arguments; module separators become `.`:
    /// `alloc::vec::Vec<i32>` yields module `alloc.vec`, name `Vec<i32>`.
    pub fn of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let path_end = full.find('<').unwrap_or(full.len());
        let (module, qualname) = match full[..path_end].rfind("::") {
            Some(split) => (&full[..split], &full[split + 2..]),
            None => ("", full),
        };
        Self::new(module.replace("::", "."), qualname)
    }

    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[inline]
    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    /// Fully-qualified `<module>.<qualname>` name.
    pub fn classname(&self) -> String {
        if self.module.is_empty() {
            self.qualname.clone()
        } else {
            format!("{}.{}", self.module, self.qualname)
        }
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.classname())
    }
}
