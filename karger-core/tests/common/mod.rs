use karger_core::Multigraph;

/// Builds a graph holding `vertices` and one undirected pair per edge.
#[must_use]
pub fn undirected_graph(vertices: &[&str], edges: &[(&str, &str)]) -> Multigraph {
    let mut graph = Multigraph::from_parts(vertices.iter().copied(), Vec::<(&str, &str)>::new())
        .expect("vertex labels are valid");
    for edge in edges {
        graph.add_undirected_edge(*edge).expect("endpoints exist");
    }
    graph
}

/// Builds a ring `v0 - v1 - ... - v{n-1} - v0`.
#[must_use]
pub fn ring(len: usize) -> Multigraph {
    let labels: Vec<String> = (0..len).map(|index| format!("v{index}")).collect();
    let names: Vec<&str> = labels.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = (0..len)
        .map(|index| (names[index], names[(index + 1) % len]))
        .collect();
    undirected_graph(&names, &edges)
}
