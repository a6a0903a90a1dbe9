//! Edge contraction.
//!
//! Contracting an edge `(u, v)` merges both endpoints into one vertex, rewires
//! every edge incident to either endpoint onto the merged vertex and discards
//! the entries that would become self-loops. This is the step iterated by
//! randomized minimum-cut algorithms.
//!
//! Two labelling schemes are offered:
//!
//! - [`contract_edge`] synthesises the merged label by concatenating the
//!   endpoint labels. Callers must ensure repeated contractions never produce
//!   a label already in use.
//! - [`merge_vertices`] keeps the survivor's existing label, so labels never
//!   grow. Pair it with a union-find over the original vertices to recover
//!   what each survivor represents.
//!
//! Every entry point checks all preconditions before mutating the graph.

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Multigraph,
    vertex::VertexId,
};

/// Outcome of a single contraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contraction {
    merged: VertexId,
    self_loops_removed: usize,
}

impl Contraction {
    /// Label of the vertex that now stands for both endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub fn merged(&self) -> &VertexId { &self.merged }

    /// Number of self-loop entries stripped from the merged vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn self_loops_removed(&self) -> usize { self.self_loops_removed }
}

/// Contracts `(u, v)` into a fresh vertex labelled `u ++ v`.
///
/// # Errors
/// Returns [`GraphError::MissingVertex`] when an endpoint is absent,
/// [`GraphError::InvalidEdge`] when `u == v` and
/// [`GraphError::DuplicateVertex`] when the concatenated label already names a
/// vertex.
///
/// # Examples
/// ```
/// use karger_core::{Multigraph, contract_edge};
///
/// let mut graph = Multigraph::from_parts(["u", "v", "w"], Vec::<(&str, &str)>::new())?;
/// for edge in [("u", "v"), ("u", "w"), ("v", "w")] {
///     graph.add_undirected_edge(edge)?;
/// }
/// let contraction = contract_edge(&mut graph, ("u", "v"))?;
/// assert_eq!(contraction.merged().as_str(), "uv");
/// assert_eq!(contraction.self_loops_removed(), 2);
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.neighbors("uv")?.len(), 2);
/// # Ok::<(), karger_core::GraphError>(())
/// ```
pub fn contract_edge(graph: &mut Multigraph, (u, v): (&str, &str)) -> Result<Contraction> {
    let combined = VertexId::from(u).concat(&VertexId::from(v));
    contract_edge_into(graph, (u, v), combined)
}

/// Contracts `(u, v)` into a fresh vertex with the caller-chosen `label`.
///
/// # Errors
/// Returns [`GraphError::MissingVertex`] when an endpoint is absent,
/// [`GraphError::InvalidEdge`] when `u == v`, [`GraphError::InvalidVertex`]
/// when `label` is empty and [`GraphError::DuplicateVertex`] when `label`
/// already names a vertex.
#[instrument(
    name = "graph.contract_edge",
    level = "debug",
    err,
    skip(graph, label),
    fields(label = %label)
)]
pub fn contract_edge_into(
    graph: &mut Multigraph,
    (u, v): (&str, &str),
    label: VertexId,
) -> Result<Contraction> {
    check_endpoints(graph, u, v)?;
    if label.is_empty() {
        return Err(GraphError::InvalidVertex);
    }
    if graph.contains_vertex(label.as_str()) {
        return Err(GraphError::DuplicateVertex { vertex: label });
    }

    graph.replace_vertex(u, &label)?;
    graph.replace_vertex(v, &label)?;
    finish(graph, label)
}

/// Merges `absorbed` into `survivor`, keeping the survivor's label.
///
/// # Errors
/// Returns [`GraphError::MissingVertex`] when either vertex is absent and
/// [`GraphError::InvalidEdge`] when both name the same vertex.
///
/// # Examples
/// ```
/// use karger_core::{Multigraph, merge_vertices};
///
/// let mut graph = Multigraph::from_parts(["a", "b", "c"], Vec::<(&str, &str)>::new())?;
/// graph.add_undirected_edge(("a", "b"))?;
/// graph.add_undirected_edge(("b", "c"))?;
/// let contraction = merge_vertices(&mut graph, "b", "a")?;
/// assert_eq!(contraction.merged().as_str(), "a");
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edge_multiplicity(("a", "c"))?, 1);
/// # Ok::<(), karger_core::GraphError>(())
/// ```
#[instrument(name = "graph.merge_vertices", level = "trace", err, skip(graph))]
pub fn merge_vertices(
    graph: &mut Multigraph,
    absorbed: &str,
    survivor: &str,
) -> Result<Contraction> {
    check_endpoints(graph, absorbed, survivor)?;
    let survivor = VertexId::from(survivor);
    graph.replace_vertex(absorbed, &survivor)?;
    finish(graph, survivor)
}

fn check_endpoints(graph: &Multigraph, u: &str, v: &str) -> Result<()> {
    for endpoint in [u, v] {
        if !graph.contains_vertex(endpoint) {
            return Err(GraphError::MissingVertex {
                vertex: VertexId::from(endpoint),
            });
        }
    }
    if u == v {
        return Err(GraphError::InvalidEdge {
            from: VertexId::from(u),
            to: VertexId::from(v),
        });
    }
    Ok(())
}

fn finish(graph: &mut Multigraph, merged: VertexId) -> Result<Contraction> {
    let self_loops_removed = graph.remove_self_loops(merged.as_str())?;
    debug!(
        merged = %merged,
        self_loops_removed,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "contraction complete"
    );
    Ok(Contraction {
        merged,
        self_loops_removed,
    })
}

#[cfg(test)]
mod tests;
