//! Contraction benchmarks.
//!
//! Measures contracting a synthetic graph all the way down to two vertices,
//! once with survivor labels kept by `merge_vertices` and once with growing
//! concatenated labels from `contract_edge`. Each iteration works on a fresh
//! clone so the graph construction cost stays out of the measurement.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use karger_benches::{
    error::BenchSetupError,
    params::ContractionBenchParams,
    source::{SyntheticGraphConfig, connected_graph},
};
use karger_core::{GraphError, Multigraph, contract_edge, merge_vertices};

/// Seed used for graph generation and edge sampling.
const SEED: u64 = 42;

/// Graph sizes to benchmark.
const VERTEX_COUNTS: &[usize] = &[32, 128, 512];

/// Random chords per vertex on top of the ring backbone.
const CHORDS_PER_VERTEX: usize = 4;

#[derive(Clone, Copy)]
enum Labelling {
    Survivor,
    Concatenated,
}

fn contract_to_two(
    mut graph: Multigraph,
    rng: &mut SmallRng,
    labelling: Labelling,
) -> Result<Multigraph, GraphError> {
    while graph.vertex_count() > 2 && graph.edge_count() > 0 {
        let sampled = rng.gen_range(0..graph.edge_count());
        let (from, to) = graph
            .edge_at(sampled)
            .map(|(from, to)| (from.clone(), to.clone()))
            .ok_or(GraphError::EmptyContainer)?;
        match labelling {
            Labelling::Survivor => merge_vertices(&mut graph, from.as_str(), to.as_str())?,
            Labelling::Concatenated => contract_edge(&mut graph, (from.as_str(), to.as_str()))?,
        };
    }
    Ok(graph)
}

fn contraction_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("contract_to_two");
    group.sample_size(20);

    for &vertices in VERTEX_COUNTS {
        let extra_edges = vertices.saturating_mul(CHORDS_PER_VERTEX);
        let graph = connected_graph(&SyntheticGraphConfig {
            vertices,
            extra_edges,
            seed: SEED,
        })?;
        let params = ContractionBenchParams {
            vertices,
            edges: graph.edge_count() / 2,
        };

        for (name, labelling) in [
            ("survivor", Labelling::Survivor),
            ("concatenated", Labelling::Concatenated),
        ] {
            let mut rng = SmallRng::seed_from_u64(SEED);
            group.bench_with_input(
                BenchmarkId::new(name, &params),
                &graph,
                |b, graph| {
                    b.iter_batched(
                        || graph.clone(),
                        |graph| contract_to_two(graph, &mut rng, labelling),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn contraction(c: &mut Criterion) {
    if let Err(err) = contraction_impl(c) {
        panic!("contraction benchmark setup failed: {err}");
    }
}

criterion_group!(benches, contraction);
criterion_main!(benches);
