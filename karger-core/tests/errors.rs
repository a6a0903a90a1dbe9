use karger_core::{
    ExecutionStrategy, GraphError, GraphErrorCode, MinCutError, MinCutErrorCode, VertexId,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::DuplicateVertex { vertex: VertexId::from("a") },
    GraphErrorCode::DuplicateVertex,
    "GRAPH_DUPLICATE_VERTEX",
)]
#[case(
    GraphError::MissingVertex { vertex: VertexId::from("a") },
    GraphErrorCode::MissingVertex,
    "GRAPH_MISSING_VERTEX",
)]
#[case(
    GraphError::InvalidEdge { from: VertexId::from("a"), to: VertexId::from("b") },
    GraphErrorCode::InvalidEdge,
    "GRAPH_INVALID_EDGE",
)]
#[case(GraphError::EmptyContainer, GraphErrorCode::EmptyContainer, "GRAPH_EMPTY_CONTAINER")]
#[case(GraphError::InvalidVertex, GraphErrorCode::InvalidVertex, "GRAPH_INVALID_VERTEX")]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] stable: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), stable);
    assert_eq!(expected.to_string(), stable);
}

#[rstest]
#[case(MinCutError::ZeroTrials, MinCutErrorCode::ZeroTrials, None)]
#[case(
    MinCutError::TooFewVertices { vertices: 1 },
    MinCutErrorCode::TooFewVertices,
    None,
)]
#[case(
    MinCutError::BackendUnavailable { requested: ExecutionStrategy::Parallel },
    MinCutErrorCode::BackendUnavailable,
    None,
)]
#[case(
    MinCutError::AsymmetricGraph { from: VertexId::from("a"), to: VertexId::from("b") },
    MinCutErrorCode::AsymmetricGraph,
    None,
)]
#[case(
    MinCutError::from(GraphError::EmptyContainer),
    MinCutErrorCode::GraphFailure,
    Some(GraphErrorCode::EmptyContainer),
)]
fn returns_expected_min_cut_code(
    #[case] error: MinCutError,
    #[case] expected: MinCutErrorCode,
    #[case] graph_code: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.graph_code(), graph_code);
}

#[test]
fn messages_name_the_offending_vertices() {
    let error = GraphError::InvalidEdge {
        from: VertexId::from("x"),
        to: VertexId::from("y"),
    };
    assert_eq!(
        error.to_string(),
        "edge (x, y) contains a nonexistent or invalid vertex"
    );
    let wrapped = MinCutError::from(GraphError::MissingVertex {
        vertex: VertexId::from("z"),
    });
    assert_eq!(
        wrapped.to_string(),
        "graph operation failed: vertex `z` does not exist in the graph"
    );
}
