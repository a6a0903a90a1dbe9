//! Seeded synthetic graphs for benchmarks.
//!
//! Every generator is deterministic for a given configuration so benchmark
//! runs compare like with like.

use karger_core::Multigraph;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`connected_graph`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `v0..`.
    pub vertices: usize,
    /// Random undirected edges added on top of the ring backbone.
    pub extra_edges: usize,
    /// Seed for edge placement.
    pub seed: u64,
}

/// Configuration for [`planted_cut`].
#[derive(Clone, Debug)]
pub struct PlantedCutConfig {
    /// Vertices per side, labelled `l0..` and `r0..`.
    pub cluster_size: usize,
    /// Random undirected edges joining the two sides.
    pub crossing_edges: usize,
    /// Seed for crossing-edge placement.
    pub seed: u64,
}

/// Builds a connected multigraph: a ring over every vertex plus
/// `extra_edges` uniformly random chords, parallel edges allowed.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertices` is zero.
pub fn connected_graph(config: &SyntheticGraphConfig) -> Result<Multigraph, BenchSetupError> {
    if config.vertices == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertices",
        });
    }
    let labels = labels("v", config.vertices);
    let mut graph = Multigraph::from_parts(labels.iter().map(String::as_str), no_edges())?;
    if config.vertices < 2 {
        return Ok(graph);
    }

    for (from, to) in labels.iter().zip(labels.iter().cycle().skip(1)) {
        graph.add_undirected_edge((from, to))?;
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    for _ in 0..config.extra_edges {
        let from = rng.gen_range(0..config.vertices);
        let offset = rng.gen_range(1..config.vertices);
        let to = from.wrapping_add(offset).wrapping_rem(config.vertices);
        graph.add_undirected_edge((&format!("v{from}"), &format!("v{to}")))?;
    }
    Ok(graph)
}

/// Builds two complete graphs joined by `crossing_edges` random edges.
///
/// While `crossing_edges < cluster_size - 1` the only minimum cut separates
/// the two sides.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `cluster_size` is zero.
pub fn planted_cut(config: &PlantedCutConfig) -> Result<Multigraph, BenchSetupError> {
    if config.cluster_size == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "cluster_size",
        });
    }
    let left = labels("l", config.cluster_size);
    let right = labels("r", config.cluster_size);
    let mut graph = Multigraph::from_parts(
        left.iter().chain(&right).map(String::as_str),
        no_edges(),
    )?;
    for side in [&left, &right] {
        for (index, from) in side.iter().enumerate() {
            for to in side.iter().skip(index + 1) {
                graph.add_undirected_edge((from, to))?;
            }
        }
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    for _ in 0..config.crossing_edges {
        let from = rng.gen_range(0..config.cluster_size);
        let to = rng.gen_range(0..config.cluster_size);
        graph.add_undirected_edge((&format!("l{from}"), &format!("r{to}")))?;
    }
    Ok(graph)
}

fn labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|index| format!("{prefix}{index}")).collect()
}

const fn no_edges() -> Vec<(&'static str, &'static str)> {
    Vec::new()
}
