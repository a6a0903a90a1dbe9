//! Vertex identifiers.

use std::{borrow::Borrow, fmt, sync::Arc};

/// Opaque, cheaply clonable vertex label.
///
/// Labels are compared and hashed by their string contents. Contraction
/// synthesises new labels by concatenation, see [`VertexId::concat`].
///
/// # Examples
/// ```
/// use karger_core::VertexId;
///
/// let u = VertexId::from("u");
/// let v = VertexId::from("v");
/// assert_eq!(u.concat(&v).as_str(), "uv");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Creates a label from any string-like value.
    #[must_use]
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the label text.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Returns `true` when the label is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds the combined label `self ++ other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut label = String::with_capacity(self.0.len().saturating_add(other.0.len()));
        label.push_str(&self.0);
        label.push_str(&other.0);
        Self(Arc::from(label))
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(label: &str) -> Self {
        Self(Arc::from(label))
    }
}

impl From<String> for VertexId {
    fn from(label: String) -> Self {
        Self(Arc::from(label))
    }
}

impl From<&String> for VertexId {
    fn from(label: &String) -> Self {
        Self::new(label)
    }
}

impl From<&VertexId> for VertexId {
    fn from(label: &VertexId) -> Self {
        label.clone()
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VertexId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for VertexId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
