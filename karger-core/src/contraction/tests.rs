//! Unit tests for edge contraction.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rstest::rstest;

use crate::{
    GraphError, VertexId,
    test_utils::{complete_graph, undirected_graph},
};

use super::{contract_edge, contract_edge_into, merge_vertices};

#[test]
fn contracting_a_triangle_edge_leaves_two_parallel_edges() {
    let mut graph = undirected_graph(&["u", "v", "w"], &[("u", "v"), ("u", "w"), ("v", "w")]);
    let contraction = contract_edge(&mut graph, ("u", "v")).expect("edge exists");

    assert_eq!(contraction.merged(), &VertexId::from("uv"));
    assert_eq!(contraction.self_loops_removed(), 2);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_multiplicity(("uv", "w")).expect("both exist"), 2);
    assert_eq!(graph.edge_multiplicity(("w", "uv")).expect("both exist"), 2);
    assert_eq!(graph.edge_multiplicity(("uv", "uv")).expect("uv exists"), 0);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.check_invariants().is_ok());
}

#[test]
fn parallel_edges_between_endpoints_are_all_stripped() {
    let mut graph = undirected_graph(&["a", "b", "c"], &[("a", "b"), ("a", "b"), ("b", "c")]);
    let contraction = contract_edge(&mut graph, ("a", "b")).expect("edge exists");
    assert_eq!(contraction.self_loops_removed(), 4);
    assert_eq!(graph.self_loop_count(), 0);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn disjoint_contractions_never_collide() {
    let mut graph = undirected_graph(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d"), ("b", "c")]);
    let first = contract_edge(&mut graph, ("a", "b")).expect("a-b exists");
    let second = contract_edge(&mut graph, ("c", "d")).expect("c-d exists");

    assert_ne!(first.merged(), second.merged());
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains_vertex("ab"));
    assert!(graph.contains_vertex("cd"));
    assert_eq!(graph.edge_multiplicity(("ab", "cd")).expect("both exist"), 1);
    assert!(graph.check_invariants().is_ok());
}

#[test]
fn contraction_rejects_label_collisions_without_mutating() {
    let mut graph = undirected_graph(&["a", "b", "ab"], &[("a", "b"), ("b", "ab")]);
    let before = graph.to_string();
    let err = contract_edge(&mut graph, ("a", "b")).expect_err("ab is taken");
    assert_eq!(
        err,
        GraphError::DuplicateVertex {
            vertex: VertexId::from("ab"),
        }
    );
    assert_eq!(graph.to_string(), before);
}

#[rstest]
#[case::missing_first(("z", "a"))]
#[case::missing_second(("a", "z"))]
fn contraction_rejects_missing_endpoints(#[case] edge: (&str, &str)) {
    let mut graph = undirected_graph(&["a", "b"], &[("a", "b")]);
    let err = contract_edge(&mut graph, edge).expect_err("z is absent");
    assert_eq!(
        err,
        GraphError::MissingVertex {
            vertex: VertexId::from("z"),
        }
    );
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn contraction_rejects_identical_endpoints() {
    let mut graph = undirected_graph(&["a"], &[]);
    let err = contract_edge(&mut graph, ("a", "a")).expect_err("a vertex cannot absorb itself");
    assert!(matches!(err, GraphError::InvalidEdge { .. }));
    assert!(graph.contains_vertex("a"));
}

#[test]
fn contract_edge_into_uses_the_supplied_label() {
    let mut graph = undirected_graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let contraction =
        contract_edge_into(&mut graph, ("a", "b"), VertexId::from("a+b")).expect("edge exists");
    assert_eq!(contraction.merged().as_str(), "a+b");
    assert_eq!(graph.edge_multiplicity(("c", "a+b")).expect("both exist"), 1);
}

#[test]
fn merge_vertices_keeps_survivor_label() {
    let mut graph = complete_graph(&["a", "b", "c", "d"]);
    let contraction = merge_vertices(&mut graph, "b", "a").expect("both exist");
    assert_eq!(contraction.merged().as_str(), "a");
    assert_eq!(contraction.self_loops_removed(), 2);
    assert!(!graph.contains_vertex("b"));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_multiplicity(("a", "c")).expect("both exist"), 2);
    assert_eq!(graph.edge_multiplicity(("d", "a")).expect("both exist"), 2);
    assert!(graph.check_invariants().is_ok());
}

/// Counts the original undirected edges of `K_n` crossing the final cut.
fn crossing_edges(left: &str, right: &str) -> usize {
    left.chars().count() * right.chars().count()
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
fn random_contraction_of_k4_preserves_crossing_edges(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = complete_graph(&["a", "b", "c", "d"]);
    assert_eq!(graph.edge_count(), 12);

    while graph.vertex_count() > 2 {
        let index = rng.gen_range(0..graph.edge_count());
        let (u, v) = graph
            .edge_at(index)
            .map(|(u, v)| (u.clone(), v.clone()))
            .expect("index is in range");
        contract_edge(&mut graph, (u.as_str(), v.as_str())).expect("sampled edge exists");

        assert_eq!(graph.self_loop_count(), 0);
        assert!(graph.check_invariants().is_ok());
    }

    let sides: Vec<_> = graph.vertices().cloned().collect();
    let [left, right] = sides.as_slice() else {
        panic!("expected two vertices, found {}", sides.len());
    };
    let crossing = crossing_edges(left.as_str(), right.as_str());
    assert_eq!(graph.edge_count(), 2 * crossing);
    assert_eq!(
        graph.edge_multiplicity((left.as_str(), right.as_str())).expect("both exist"),
        crossing
    );
}
