//! Plain-text edge-list reader.
//!
//! One record per line. `#` starts a comment and blank lines are skipped. Two
//! whitespace-separated labels declare an undirected edge; a single label
//! declares a vertex that may stay isolated. Vertices are created on first
//! mention, in file order. A record naming the same label twice is kept as a
//! self-loop; the min-cut search ignores it.

use std::io::{self, BufRead};

use karger_core::{GraphError, Multigraph};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A record held the wrong number of labels.
    #[error("line {line}: expected one or two labels, found {found}")]
    Malformed {
        /// One-based line number of the record.
        line: usize,
        /// Number of labels on the line.
        found: usize,
    },
    /// Inserting the record into the graph failed.
    #[error("line {line}: {source}")]
    Graph {
        /// One-based line number of the record.
        line: usize,
        /// Underlying graph error.
        #[source]
        source: GraphError,
    },
}

impl EdgeListError {
    /// One-based line number the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Read { line, .. } | Self::Malformed { line, .. } | Self::Graph { line, .. } => {
                *line
            }
        }
    }
}

/// Reads an undirected multigraph from `reader`.
///
/// # Errors
/// Returns [`EdgeListError`] naming the offending line when reading fails or a
/// record is malformed.
///
/// # Examples
/// ```
/// use karger_cli::cli::parse_edge_list;
///
/// let graph = parse_edge_list("# triangle\na b\nb c\nc a\n\nlonely\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), karger_cli::cli::EdgeListError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<Multigraph, EdgeListError> {
    let mut graph = Multigraph::new();
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| EdgeListError::Read {
            line: number,
            source,
        })?;
        let record = line.split('#').next().unwrap_or_default();
        let labels: Vec<&str> = record.split_whitespace().collect();
        let graph_error = |source| EdgeListError::Graph {
            line: number,
            source,
        };
        match labels.as_slice() {
            [] => {}
            [vertex] => ensure_vertex(&mut graph, vertex).map_err(graph_error)?,
            [u, v] => {
                ensure_vertex(&mut graph, u).map_err(graph_error)?;
                ensure_vertex(&mut graph, v).map_err(graph_error)?;
                graph.add_undirected_edge((*u, *v)).map_err(graph_error)?;
            }
            other => {
                return Err(EdgeListError::Malformed {
                    line: number,
                    found: other.len(),
                });
            }
        }
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

fn ensure_vertex(graph: &mut Multigraph, vertex: &str) -> Result<(), GraphError> {
    if graph.contains_vertex(vertex) {
        return Ok(());
    }
    graph.add_vertex(vertex)
}
