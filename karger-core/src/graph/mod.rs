//! Adjacency-list multigraph.
//!
//! [`Multigraph`] maps every live vertex to its [`AdjacencyList`] of outgoing
//! destinations and keeps redundant vertex and edge counters in sync with the
//! containers. Undirected edges are stored as two directed entries.
//!
//! The backing map is an [`IndexMap`], so lookups are O(1) and iteration order
//! is a deterministic function of the operations applied. Seeded algorithms
//! built on top of the graph rely on that determinism.

mod invariants;

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::{
    adjacency::AdjacencyList,
    error::{GraphError, Result},
    vertex::VertexId,
};

pub use self::invariants::GraphInvariantViolation;

/// Directed or undirected multigraph stored as adjacency lists.
///
/// # Examples
/// ```
/// use karger_core::Multigraph;
///
/// let mut graph = Multigraph::from_parts(["a", "b", "c"], [("a", "b")])?;
/// graph.add_undirected_edge(("b", "c"))?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.neighbors("c")?.contains(&"b".into()));
/// # Ok::<(), karger_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Multigraph {
    adjacency: IndexMap<VertexId, AdjacencyList>,
    vertex_count: usize,
    edge_count: usize,
}

impl Multigraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an initial vertex set and directed edges.
    ///
    /// Repeated vertices in `vertices` collapse into one. Each edge `(u, v)`
    /// is inserted as a single directed entry `u -> v`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] for an empty label and
    /// [`GraphError::InvalidEdge`] naming the first edge that references a
    /// vertex outside `vertices`.
    pub fn from_parts<V, E, S, T>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator,
        V::Item: Into<VertexId>,
        E: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            let vertex = vertex.into();
            if vertex.is_empty() {
                return Err(GraphError::InvalidVertex);
            }
            graph.adjacency.entry(vertex).or_default();
        }
        graph.vertex_count = graph.adjacency.len();

        for (from, to) in edges {
            graph.add_edge((from.as_ref(), to.as_ref()))?;
        }
        Ok(graph)
    }

    /// Number of live vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Number of live directed edge entries.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `true` when `vertex` is in the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Iterates over the live vertices in storage order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &VertexId> + '_ {
        self.adjacency.keys()
    }

    /// Iterates over every directed entry as `(source, destination)`.
    pub fn edges(&self) -> impl Iterator<Item = (&VertexId, &VertexId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |to| (from, to)))
    }

    /// Returns the `index`-th directed entry in [`Multigraph::edges`] order.
    ///
    /// Sampling `index` uniformly from `0..edge_count()` selects a uniformly
    /// random edge entry.
    #[must_use]
    pub fn edge_at(&self, index: usize) -> Option<(&VertexId, &VertexId)> {
        let mut remaining = index;
        for (from, list) in &self.adjacency {
            if remaining < list.len() {
                return list.get(remaining).map(|to| (from, to));
            }
            remaining = remaining.saturating_sub(list.len());
        }
        None
    }

    /// Counts the parallel `from -> to` entries.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn edge_multiplicity(&self, (from, to): (&str, &str)) -> Result<usize> {
        let to = self.key(to)?;
        Ok(self.neighbors(from)?.count(&to))
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] if `vertex` already exists and
    /// [`GraphError::InvalidVertex`] if the label is empty.
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) -> Result<()> {
        let vertex = vertex.into();
        if vertex.is_empty() {
            return Err(GraphError::InvalidVertex);
        }
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::DuplicateVertex { vertex });
        }
        self.adjacency.insert(vertex, AdjacencyList::new());
        self.vertex_count = self.vertex_count.saturating_add(1);
        Ok(())
    }

    /// Removes `vertex` together with every entry pointing to or from it.
    ///
    /// Returns the number of directed entries removed.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if `vertex` is absent; the graph
    /// is left untouched.
    #[instrument(name = "graph.remove_vertex", level = "debug", err, skip(self))]
    pub fn remove_vertex(&mut self, vertex: &str) -> Result<usize> {
        let vertex = self.key(vertex)?;

        let mut removed = 0_usize;
        for list in self.adjacency.values_mut() {
            removed = removed.saturating_add(list.remove_all(&vertex));
        }
        if let Some(outgoing) = self.adjacency.swap_remove(&vertex) {
            removed = removed.saturating_add(outgoing.len());
        }

        self.edge_count = self.edge_count.saturating_sub(removed);
        self.vertex_count = self.vertex_count.saturating_sub(1);
        debug!(removed, "vertex removed");
        Ok(removed)
    }

    /// Adds one directed entry `from -> to` at the head of `from`'s list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if either endpoint is absent.
    pub fn add_edge(&mut self, (from, to): (&str, &str)) -> Result<()> {
        let (from, to) = self.edge_keys(from, to)?;
        self.list_mut(&from)?.push_front(to);
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Adds the undirected edge `{u, v}` as the entries `u -> v` and `v -> u`.
    ///
    /// A self-loop request (`u == v`) inserts two `u -> u` entries, so every
    /// undirected edge contributes exactly two entries.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] if either endpoint is absent.
    pub fn add_undirected_edge(&mut self, (u, v): (&str, &str)) -> Result<()> {
        let (u, v) = self.edge_keys(u, v)?;
        self.list_mut(&u)?.push_front(v.clone());
        self.list_mut(&v)?.push_front(u);
        self.edge_count = self.edge_count.saturating_add(2);
        Ok(())
    }

    /// Removes every parallel `from -> to` entry and returns how many were
    /// removed.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn remove_edge(&mut self, (from, to): (&str, &str)) -> Result<usize> {
        let (from, to) = self.endpoint_keys(from, to)?;
        let removed = self.list_mut(&from)?.remove_all(&to);
        self.edge_count = self.edge_count.saturating_sub(removed);
        Ok(removed)
    }

    /// Removes a single `from -> to` entry, the first one in list order.
    ///
    /// Returns `false` when no such entry exists.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent and
    /// [`GraphError::EmptyContainer`] if `from` has no outgoing entries.
    pub fn remove_one_edge(&mut self, (from, to): (&str, &str)) -> Result<bool> {
        let (from, to) = self.endpoint_keys(from, to)?;
        let removed = self.list_mut(&from)?.remove_first(&to)?;
        if removed {
            self.edge_count = self.edge_count.saturating_sub(1);
        }
        Ok(removed)
    }

    /// Removes every `u -> v` and `v -> u` entry and returns the combined
    /// count.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if either endpoint is absent.
    pub fn remove_undirected_edge(&mut self, (u, v): (&str, &str)) -> Result<usize> {
        let (u, v) = self.endpoint_keys(u, v)?;
        let mut removed = self.list_mut(&u)?.remove_all(&v);
        if u != v {
            removed = removed.saturating_add(self.list_mut(&v)?.remove_all(&u));
        }
        self.edge_count = self.edge_count.saturating_sub(removed);
        Ok(removed)
    }

    /// Returns a read-only view of the outgoing entries of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if `vertex` is absent.
    pub fn neighbors(&self, vertex: &str) -> Result<&AdjacencyList> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| GraphError::missing(&VertexId::from(vertex)))
    }

    /// Renames `old` to `new`, merging into `new` when it already exists.
    ///
    /// Every entry equal to `old`, in every list including `old`'s own, is
    /// rewritten to `new` without touching the edge count. `old`'s outgoing
    /// entries then either become `new`'s list (when `new` is fresh) or are
    /// appended to `new`'s existing list, in which case two vertices have
    /// become one. Returns `true` when a merge happened. Renaming a vertex to
    /// itself is a no-op.
    ///
    /// Self-loops created by a merge are kept; see
    /// [`Multigraph::remove_self_loops`].
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if `old` is absent and
    /// [`GraphError::InvalidVertex`] if `new` is empty. Both checks happen
    /// before any mutation.
    #[instrument(
        name = "graph.replace_vertex",
        level = "debug",
        err,
        skip(self, new),
        fields(new = %new.as_str()),
    )]
    pub fn replace_vertex(&mut self, old: &str, new: &VertexId) -> Result<bool> {
        let old = self.key(old)?;
        if new.is_empty() {
            return Err(GraphError::InvalidVertex);
        }
        if old == *new {
            return Ok(false);
        }

        for list in self.adjacency.values_mut() {
            list.rename(&old, new);
        }
        let mut moved = self
            .adjacency
            .swap_remove(&old)
            .ok_or_else(|| GraphError::missing(&old))?;

        if let Some(target) = self.adjacency.get_mut(new) {
            target.append(&mut moved);
            self.vertex_count = self.vertex_count.saturating_sub(1);
            debug!("vertex merged into existing target");
            Ok(true)
        } else {
            self.adjacency.insert(new.clone(), moved);
            Ok(false)
        }
    }

    /// Removes every `vertex -> vertex` entry and returns how many were
    /// removed.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingVertex`] if `vertex` is absent.
    pub fn remove_self_loops(&mut self, vertex: &str) -> Result<usize> {
        let vertex = self.key(vertex)?;
        let removed = self.list_mut(&vertex)?.remove_all(&vertex);
        self.edge_count = self.edge_count.saturating_sub(removed);
        Ok(removed)
    }

    /// Counts self-loop entries across the whole graph.
    #[must_use]
    pub fn self_loop_count(&self) -> usize {
        self.edges().filter(|(from, to)| from == to).count()
    }

    fn key(&self, vertex: &str) -> Result<VertexId> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| GraphError::missing(&VertexId::from(vertex)))
    }

    fn list_mut(&mut self, vertex: &VertexId) -> Result<&mut AdjacencyList> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| GraphError::missing(vertex))
    }

    /// Resolves both endpoints for insertion, reporting an invalid edge.
    fn edge_keys(&self, from: &str, to: &str) -> Result<(VertexId, VertexId)> {
        match (
            self.adjacency.get_key_value(from),
            self.adjacency.get_key_value(to),
        ) {
            (Some((from, _)), Some((to, _))) => Ok((from.clone(), to.clone())),
            _ => Err(GraphError::invalid_edge(
                &VertexId::from(from),
                &VertexId::from(to),
            )),
        }
    }

    /// Resolves both endpoints for removal, reporting the missing vertex.
    fn endpoint_keys(&self, from: &str, to: &str) -> Result<(VertexId, VertexId)> {
        Ok((self.key(from)?, self.key(to)?))
    }
}

impl fmt::Display for Multigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in &self.adjacency {
            writeln!(f, "{vertex}: {list}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod property;
