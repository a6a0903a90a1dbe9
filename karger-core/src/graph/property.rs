//! Property tests driving random operation sequences against the multigraph.
//!
//! After every operation the redundant counters must match the containers and
//! no entry may dangle. Failed operations must leave the graph untouched.

use proptest::{prelude::*, prop_oneof, proptest};

use crate::{contraction::contract_edge, test_utils::suite_proptest_config};

use super::Multigraph;

const LABELS: u8 = 6;

#[derive(Clone, Debug)]
enum GraphOp {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge(u8, u8),
    AddUndirectedEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveOneEdge(u8, u8),
    RemoveUndirectedEdge(u8, u8),
    ReplaceVertex(u8, u8),
    RemoveSelfLoops(u8),
    ContractEdge(u8, u8),
}

fn label(index: u8) -> String {
    format!("v{index}")
}

fn op_strategy() -> impl Strategy<Value = GraphOp> {
    let vertex = || 0..LABELS;
    prop_oneof![
        2 => vertex().prop_map(GraphOp::AddVertex),
        1 => vertex().prop_map(GraphOp::RemoveVertex),
        3 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::AddEdge(u, v)),
        3 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::AddUndirectedEdge(u, v)),
        1 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::RemoveEdge(u, v)),
        1 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::RemoveOneEdge(u, v)),
        1 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::RemoveUndirectedEdge(u, v)),
        1 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::ReplaceVertex(u, v)),
        1 => vertex().prop_map(GraphOp::RemoveSelfLoops),
        1 => (vertex(), vertex()).prop_map(|(u, v)| GraphOp::ContractEdge(u, v)),
    ]
}

/// Applies `op` and reports whether it succeeded.
fn apply(graph: &mut Multigraph, op: &GraphOp) -> bool {
    match *op {
        GraphOp::AddVertex(v) => graph.add_vertex(label(v)).is_ok(),
        GraphOp::RemoveVertex(v) => graph.remove_vertex(&label(v)).is_ok(),
        GraphOp::AddEdge(u, v) => graph.add_edge((&label(u), &label(v))).is_ok(),
        GraphOp::AddUndirectedEdge(u, v) => {
            graph.add_undirected_edge((&label(u), &label(v))).is_ok()
        }
        GraphOp::RemoveEdge(u, v) => graph.remove_edge((&label(u), &label(v))).is_ok(),
        GraphOp::RemoveOneEdge(u, v) => graph.remove_one_edge((&label(u), &label(v))).is_ok(),
        GraphOp::RemoveUndirectedEdge(u, v) => {
            graph.remove_undirected_edge((&label(u), &label(v))).is_ok()
        }
        GraphOp::ReplaceVertex(u, v) => graph.replace_vertex(&label(u), &label(v).into()).is_ok(),
        GraphOp::RemoveSelfLoops(v) => graph.remove_self_loops(&label(v)).is_ok(),
        GraphOp::ContractEdge(u, v) => contract_edge(graph, (&label(u), &label(v))).is_ok(),
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn invariants_hold_after_any_operation_sequence(
        ops in proptest::collection::vec(op_strategy(), 0..64)
    ) {
        let mut graph = Multigraph::new();
        for op in &ops {
            let before = graph.to_string();
            let applied = apply(&mut graph, op);
            if let Err(violation) = graph.check_invariants() {
                prop_assert!(false, "{:?} broke the graph: {}", op, violation);
            }
            if !applied {
                prop_assert_eq!(graph.to_string(), before, "failed {:?} mutated the graph", op);
            }
        }
    }

    #[test]
    fn undirected_edges_stay_symmetric(
        edges in proptest::collection::vec((0..LABELS, 0..LABELS), 0..32)
    ) {
        let labels: Vec<String> = (0..LABELS).map(label).collect();
        let mut graph = Multigraph::from_parts(labels.iter().map(String::as_str), Vec::<(&str, &str)>::new())
            .expect("labels are valid");
        for (u, v) in &edges {
            graph
                .add_undirected_edge((&label(*u), &label(*v)))
                .expect("endpoints exist");
        }
        prop_assert_eq!(graph.edge_count(), 2 * edges.len());
        for u in &labels {
            for v in &labels {
                let forward = graph.edge_multiplicity((u, v)).expect("both exist");
                let backward = graph.edge_multiplicity((v, u)).expect("both exist");
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
