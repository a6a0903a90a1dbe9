//! Per-vertex adjacency container.
//!
//! [`AdjacencyList`] is an ordered multiset of destination labels. It is backed
//! by a [`VecDeque`] so insertion at either end is O(1) while search and
//! removal scan the entries in order.

use std::{collections::VecDeque, fmt};

use crate::{
    error::{GraphError, Result},
    vertex::VertexId,
};

/// Ordered sequence of outgoing edge destinations for one vertex.
///
/// Duplicates are allowed: each entry is one directed edge.
///
/// # Examples
/// ```
/// use karger_core::{AdjacencyList, VertexId};
///
/// let mut list = AdjacencyList::new();
/// list.push_front(VertexId::from("b"));
/// list.push_front(VertexId::from("a"));
/// list.push_back(VertexId::from("b"));
/// assert_eq!(list.to_string(), "a <-> b <-> b");
/// assert_eq!(list.remove_all(&VertexId::from("b")), 2);
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    entries: VecDeque<VertexId>,
}

impl AdjacencyList {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `vertex` at the head.
    pub fn push_front(&mut self, vertex: VertexId) {
        self.entries.push_front(vertex);
    }

    /// Inserts `vertex` at the tail.
    pub fn push_back(&mut self, vertex: VertexId) {
        self.entries.push_back(vertex);
    }

    /// Removes and returns the head entry.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyContainer`] when the container is empty.
    pub fn pop_front(&mut self) -> Result<VertexId> {
        self.entries.pop_front().ok_or(GraphError::EmptyContainer)
    }

    /// Removes and returns the tail entry.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyContainer`] when the container is empty.
    pub fn pop_back(&mut self) -> Result<VertexId> {
        self.entries.pop_back().ok_or(GraphError::EmptyContainer)
    }

    /// Returns the head entry, if any.
    #[must_use]
    pub fn front(&self) -> Option<&VertexId> {
        self.entries.front()
    }

    /// Returns the tail entry, if any.
    #[must_use]
    pub fn back(&self) -> Option<&VertexId> {
        self.entries.back()
    }

    /// Returns `true` when at least one entry equals `vertex`.
    #[must_use]
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.entries.contains(vertex)
    }

    /// Counts the entries equal to `vertex`.
    #[must_use]
    pub fn count(&self, vertex: &VertexId) -> usize {
        self.entries.iter().filter(|entry| *entry == vertex).count()
    }

    /// Removes the first entry equal to `vertex`.
    ///
    /// Returns `Ok(false)` when no entry matched.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyContainer`] when the container is empty.
    pub fn remove_first(&mut self, vertex: &VertexId) -> Result<bool> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyContainer);
        }
        let Some(position) = self.entries.iter().position(|entry| entry == vertex) else {
            return Ok(false);
        };
        Ok(self.entries.remove(position).is_some())
    }

    /// Removes every entry equal to `vertex` and returns how many were removed.
    ///
    /// An empty container yields `0`.
    pub fn remove_all(&mut self, vertex: &VertexId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != vertex);
        before.saturating_sub(self.entries.len())
    }

    /// Rewrites every entry equal to `old` to `new`, returning the number of
    /// entries rewritten. The length is unchanged.
    pub fn rename(&mut self, old: &VertexId, new: &VertexId) -> usize {
        let mut renamed = 0_usize;
        for entry in self.entries.iter_mut().filter(|entry| *entry == old) {
            entry.clone_from(new);
            renamed = renamed.saturating_add(1);
        }
        renamed
    }

    /// Moves every entry of `other` onto the end of `self`, leaving `other`
    /// empty.
    pub fn append(&mut self, other: &mut Self) {
        self.entries.append(&mut other.entries);
    }

    /// Number of entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when the container holds no entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterates over the entries from head to tail.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &VertexId> + '_ {
        self.entries.iter()
    }

    /// Returns the entry at `index`, counted from the head.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VertexId> {
        self.entries.get(index)
    }
}

impl FromIterator<VertexId> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a VertexId;
    type IntoIter = std::collections::vec_deque::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.entries.iter();
        if let Some(first) = entries.next() {
            write!(f, "{first}")?;
        }
        for entry in entries {
            write!(f, " <-> {entry}")?;
        }
        Ok(())
    }
}
