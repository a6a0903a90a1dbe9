//! Structural invariant checks for [`Multigraph`].
//!
//! The counters kept by the graph are caches over the adjacency lists. These
//! checks recompute them so tests can assert graph health after each
//! operation.

use thiserror::Error;

use crate::vertex::VertexId;

use super::Multigraph;

/// Reports a structural invariant violation surfaced by
/// [`Multigraph::check_invariants`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum GraphInvariantViolation {
    /// The cached vertex count disagrees with the number of adjacency lists.
    #[error("vertex_count is {recorded} but the graph holds {actual} adjacency lists")]
    VertexCount {
        /// Value of the cached counter.
        recorded: usize,
        /// Number of adjacency lists present.
        actual: usize,
    },
    /// The cached edge count disagrees with the total list length.
    #[error("edge_count is {recorded} but the adjacency lists hold {actual} entries")]
    EdgeCount {
        /// Value of the cached counter.
        recorded: usize,
        /// Sum of all adjacency list lengths.
        actual: usize,
    },
    /// An entry points at a vertex that is not in the graph.
    #[error("entry {from} -> {to} references a vertex that is not in the graph")]
    DanglingEntry {
        /// Vertex owning the entry.
        from: VertexId,
        /// Missing destination.
        to: VertexId,
    },
}

impl Multigraph {
    /// Verifies the vertex and edge counters and that every entry refers to a
    /// live vertex.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found.
    ///
    /// # Examples
    /// ```
    /// use karger_core::Multigraph;
    ///
    /// let graph = Multigraph::from_parts(["a", "b"], [("a", "b"), ("b", "a")])?;
    /// assert!(graph.check_invariants().is_ok());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn check_invariants(&self) -> Result<(), GraphInvariantViolation> {
        let actual_vertices = self.adjacency.len();
        if self.vertex_count != actual_vertices {
            return Err(GraphInvariantViolation::VertexCount {
                recorded: self.vertex_count,
                actual: actual_vertices,
            });
        }

        let actual_edges: usize = self.adjacency.values().map(|list| list.len()).sum();
        if self.edge_count != actual_edges {
            return Err(GraphInvariantViolation::EdgeCount {
                recorded: self.edge_count,
                actual: actual_edges,
            });
        }

        if let Some((from, to)) = self
            .edges()
            .find(|(_, to)| !self.adjacency.contains_key(*to))
        {
            return Err(GraphInvariantViolation::DanglingEntry {
                from: from.clone(),
                to: to.clone(),
            });
        }
        Ok(())
    }
}
