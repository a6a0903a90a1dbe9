//! Tests for the `MinCut` driver API.

mod common;

use common::{ring, undirected_graph};
use karger_core::{ExecutionStrategy, MinCutBuilder, MinCutError, Multigraph};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use karger_test_support::tracing::RecordingLayer;

#[fixture]
fn square() -> Multigraph {
    ring(4)
}

#[rstest]
fn builder_defaults() {
    let builder = MinCutBuilder::new();
    assert_eq!(builder.trials(), None);
    assert_eq!(builder.seed(), karger_core::DEFAULT_SEED);
    assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);

    let min_cut = builder.build().expect("defaults valid");
    assert_eq!(min_cut.trials(), None);
    assert_eq!(min_cut.seed(), 42);
}

#[rstest]
fn builder_rejects_zero_trials() {
    let err = MinCutBuilder::new()
        .with_trials(0)
        .build()
        .expect_err("builder must reject zero trials");
    assert_eq!(err, MinCutError::ZeroTrials);
}

#[rstest]
#[case::square(4)]
#[case::hexagon(6)]
#[case::decagon(10)]
fn every_ring_cut_has_two_edges(#[case] len: usize) {
    let result = MinCutBuilder::new()
        .with_trials(10)
        .build()
        .expect("configuration must be valid")
        .run(&ring(len))
        .expect("ring is cuttable");
    assert_eq!(result.cut_size(), 2);
    assert_eq!(result.hits(), 10);
    assert_eq!(result.best_trial(), 0);
    let partition = result.partition();
    assert_eq!(partition.left().len() + partition.right().len(), len);
}

#[rstest]
fn two_vertex_graph_needs_no_contraction() {
    let graph = undirected_graph(&["a", "b"], &[("a", "b"), ("a", "b"), ("a", "b")]);
    let result = MinCutBuilder::new()
        .build()
        .expect("configuration must be valid")
        .run(&graph)
        .expect("pair is cuttable");
    assert_eq!(result.cut_size(), 3);
    assert_eq!(result.trials(), 2);
    assert!(result.partition().is_left(&"a".into()));
    assert!(!result.partition().is_left(&"b".into()));
}

#[rstest]
fn run_records_min_cut_tracing(square: Multigraph) {
    let min_cut = MinCutBuilder::new()
        .with_trials(3)
        .with_seed(5)
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result = tracing::subscriber::with_default(subscriber, || min_cut.run(&square))
        .expect("run must succeed");
    assert_eq!(result.cut_size(), 2);

    let spans = layer.spans();
    let run_span = spans
        .iter()
        .find(|span| span.name == "mincut.run")
        .expect("mincut.run span must exist");
    assert_eq!(run_span.fields.get("vertices"), Some(&"4".to_owned()));
    assert_eq!(run_span.fields.get("edges"), Some(&"8".to_owned()));
    assert_eq!(run_span.fields.get("seed"), Some(&"5".to_owned()));
    assert_eq!(
        run_span.fields.get("strategy"),
        Some(&"Sequential".to_owned())
    );

    assert_eq!(layer.span_count("mincut.trial"), 3);
    assert!(layer.span_count("graph.merge_vertices") >= 3);
    assert!(layer.has_event(Level::INFO, "minimum cut search complete"));
}

#[rstest]
fn run_logs_too_small_warning() {
    let min_cut = MinCutBuilder::new()
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = undirected_graph(&["solo"], &[]);
    let err = tracing::subscriber::with_default(subscriber, || min_cut.run(&graph))
        .expect_err("single vertices cannot be cut");
    assert!(matches!(err, MinCutError::TooFewVertices { vertices: 1 }));

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::WARN
            && event
                .fields
                .get("message")
                .is_some_and(|value| value == "graph is too small to cut")
    }));
}
