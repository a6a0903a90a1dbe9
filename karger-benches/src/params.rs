//! Benchmark parameter types rendered as Criterion benchmark ids.

use std::fmt;

/// Parameters for a contraction benchmark run.
#[derive(Clone, Debug)]
pub struct ContractionBenchParams {
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Number of undirected edges in the graph.
    pub edges: usize,
}

impl fmt::Display for ContractionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertices, self.edges)
    }
}

/// Parameters for a minimum-cut benchmark run.
#[derive(Clone, Debug)]
pub struct MinCutBenchParams {
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Number of contraction trials per run.
    pub trials: usize,
}

impl fmt::Display for MinCutBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},trials={}", self.vertices, self.trials)
    }
}
