//! Shared test utilities for `karger-core`.

use karger_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::Multigraph;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KARGER_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph holding `vertices` and one undirected pair per edge.
pub(crate) fn undirected_graph(vertices: &[&str], edges: &[(&str, &str)]) -> Multigraph {
    let mut graph = Multigraph::from_parts(vertices.iter().copied(), Vec::<(&str, &str)>::new())
        .expect("vertex labels are valid");
    for edge in edges {
        graph.add_undirected_edge(*edge).expect("endpoints exist");
    }
    graph
}

/// Builds the complete graph over `vertices`.
pub(crate) fn complete_graph(vertices: &[&str]) -> Multigraph {
    let mut edges = Vec::new();
    for (index, u) in vertices.iter().enumerate() {
        for v in vertices.iter().skip(index + 1) {
            edges.push((*u, *v));
        }
    }
    undirected_graph(vertices, &edges)
}
