//! Randomized minimum cut by repeated edge contraction.
//!
//! Every trial contracts a private copy of the graph down to two
//! super-vertices by merging the endpoints of uniformly sampled edges. The
//! entries left between the two survivors form a cut; the smallest cut over
//! all trials is reported. With `C(n, 2) · ln n` trials the probability of
//! missing a minimum cut is at most `1 / n`.
//!
//! Survivors keep the label of their union-find root, so labels never grow and
//! merged vertices can never collide with existing ones.

mod union_find;

use std::num::NonZeroUsize;

use indexmap::{IndexMap, IndexSet};
use rand::{Rng, SeedableRng, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    builder::ExecutionStrategy,
    contraction::merge_vertices,
    error::{GraphError, MinCutError},
    graph::Multigraph,
    result::{MinCutResult, Partition},
    sort::randomized_quicksort,
    vertex::VertexId,
};

use self::union_find::DisjointSet;

/// Upper bound applied to [`default_trial_count`].
pub const MAX_DEFAULT_TRIALS: usize = 10_000;

/// Odd 64-bit golden-ratio constant spreading trial indices across seeds.
const TRIAL_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Returns the trial count used when none is configured.
///
/// Computes `C(n, 2) · (⌊log2 n⌋ + 1)`, clamped to `1..=MAX_DEFAULT_TRIALS`.
///
/// # Examples
/// ```
/// use karger_core::default_trial_count;
///
/// assert_eq!(default_trial_count(3), 6);
/// assert_eq!(default_trial_count(4), 18);
/// assert_eq!(default_trial_count(1), 1);
/// ```
#[must_use]
pub fn default_trial_count(vertices: usize) -> usize {
    let pairs = vertices.saturating_mul(vertices.saturating_sub(1)) / 2;
    let log_factor = (usize::BITS - vertices.leading_zeros()) as usize;
    pairs
        .saturating_mul(log_factor)
        .clamp(1, MAX_DEFAULT_TRIALS)
}

/// Entry point for running the contraction algorithm.
///
/// Construct instances with [`crate::MinCutBuilder`].
///
/// # Examples
/// ```
/// use karger_core::{MinCutBuilder, Multigraph};
///
/// let mut graph = Multigraph::from_parts(["a", "b", "c"], Vec::<(&str, &str)>::new())?;
/// for edge in [("a", "b"), ("b", "c"), ("c", "a")] {
///     graph.add_undirected_edge(edge)?;
/// }
/// let result = MinCutBuilder::new().with_trials(8).build()?.run(&graph)?;
/// assert_eq!(result.cut_size(), 2);
/// assert_eq!(result.trials(), 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MinCut {
    trials: Option<NonZeroUsize>,
    seed: u64,
    execution_strategy: ExecutionStrategy,
}

impl MinCut {
    pub(crate) fn new(
        trials: Option<NonZeroUsize>,
        seed: u64,
        execution_strategy: ExecutionStrategy,
    ) -> Self {
        Self {
            trials,
            seed,
            execution_strategy,
        }
    }

    /// Returns the explicitly configured trial count, if any.
    #[must_use]
    pub fn trials(&self) -> Option<NonZeroUsize> {
        self.trials
    }

    /// Returns the seed every trial derives its random stream from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the execution strategy used by [`MinCut::run`].
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Runs every trial against `graph` and reports the smallest cut found.
    ///
    /// Self-loops in the input never cross a cut and are ignored. The input is
    /// not modified.
    ///
    /// # Errors
    /// Returns [`MinCutError::TooFewVertices`] when `graph` has fewer than two
    /// vertices, [`MinCutError::AsymmetricGraph`] when some `u -> v` entries
    /// lack matching `v -> u` entries, [`MinCutError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `parallel`
    /// feature and [`MinCutError::Graph`] if a contraction step fails.
    #[instrument(
        name = "mincut.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            seed = self.seed,
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run(&self, graph: &Multigraph) -> Result<MinCutResult, MinCutError> {
        let vertices = graph.vertex_count();
        if vertices < 2 {
            warn!(vertices, "graph is too small to cut");
            return Err(MinCutError::TooFewVertices { vertices });
        }
        check_symmetric(graph)?;

        let trials = self
            .trials
            .map_or_else(|| default_trial_count(vertices), NonZeroUsize::get);
        let runner = TrialRunner::new(graph, self.seed)?;
        let outcomes = self.run_trials(&runner, trials)?;

        let (best_trial, best) = outcomes
            .iter()
            .enumerate()
            .min_by_key(|(index, outcome)| (outcome.cut_size, *index))
            .ok_or(MinCutError::ZeroTrials)?;
        let cut_size = best.cut_size;
        let partition = best.partition.clone();

        let mut trial_cuts: Vec<usize> = outcomes.iter().map(|outcome| outcome.cut_size).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        randomized_quicksort(&mut trial_cuts, &mut rng);

        let result = MinCutResult::new(cut_size, partition, best_trial, trial_cuts);
        info!(
            cut_size,
            trials,
            best_trial,
            hits = result.hits(),
            "minimum cut search complete"
        );
        Ok(result)
    }

    fn run_trials(
        &self,
        runner: &TrialRunner,
        trials: usize,
    ) -> Result<Vec<TrialOutcome>, MinCutError> {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => (0..trials)
                .map(|trial| runner.run(trial))
                .collect::<Result<Vec<_>, _>>()
                .map_err(MinCutError::from),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => (0..trials)
                .into_par_iter()
                .map(|trial| runner.run(trial))
                .collect::<Result<Vec<_>, _>>()
                .map_err(MinCutError::from),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(MinCutError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
        }
    }
}

/// Rejects graphs whose entries do not pair up as undirected edges.
///
/// The cut of a trial is read from one survivor's entries, which only equals
/// the crossing edge count when every `u -> v` has a `v -> u` twin.
fn check_symmetric(graph: &Multigraph) -> Result<(), MinCutError> {
    let mut balance: IndexMap<(&VertexId, &VertexId), isize> = IndexMap::new();
    for (from, to) in graph.edges().filter(|(from, to)| from != to) {
        let (key, delta) = if from < to {
            ((from, to), 1)
        } else {
            ((to, from), -1)
        };
        let count = balance.entry(key).or_default();
        *count = count.saturating_add(delta);
    }

    let Some(((low, high), count)) = balance.into_iter().find(|(_, count)| *count != 0) else {
        return Ok(());
    };
    let (from, to) = if count > 0 { (low, high) } else { (high, low) };
    warn!(%from, %to, "graph is not symmetric");
    Err(MinCutError::AsymmetricGraph {
        from: from.clone(),
        to: to.clone(),
    })
}

/// Derives the random stream seed of one trial.
///
/// Scrambling the index keeps trial `k + 1` under `seed` apart from trial `k`
/// under `seed + 1`.
fn trial_seed(seed: u64, trial: usize) -> u64 {
    seed ^ (trial as u64).wrapping_mul(TRIAL_SEED_STRIDE)
}

#[derive(Debug)]
struct TrialOutcome {
    cut_size: usize,
    partition: Partition,
}

/// Shared, read-only state every trial starts from.
struct TrialRunner {
    base: Multigraph,
    originals: IndexSet<VertexId>,
    seed: u64,
}

impl TrialRunner {
    fn new(graph: &Multigraph, seed: u64) -> Result<Self, GraphError> {
        let originals: IndexSet<VertexId> = graph.vertices().cloned().collect();
        let mut base = graph.clone();
        let mut stripped = 0_usize;
        for vertex in &originals {
            stripped = stripped.saturating_add(base.remove_self_loops(vertex.as_str())?);
        }
        if stripped > 0 {
            debug!(stripped, "ignoring self-loops in the input graph");
        }
        Ok(Self {
            base,
            originals,
            seed,
        })
    }

    fn position(&self, vertex: &VertexId) -> Result<usize, GraphError> {
        self.originals
            .get_index_of(vertex)
            .ok_or_else(|| GraphError::missing(vertex))
    }

    fn label(&self, position: usize) -> Result<&VertexId, GraphError> {
        self.originals
            .get_index(position)
            .ok_or(GraphError::InvalidVertex)
    }

    #[instrument(name = "mincut.trial", level = "debug", err, skip(self))]
    fn run(&self, trial: usize) -> Result<TrialOutcome, GraphError> {
        let mut graph = self.base.clone();
        let mut rng = SmallRng::seed_from_u64(trial_seed(self.seed, trial));
        let mut sets = DisjointSet::new(self.originals.len());

        // Every live vertex is labelled after the root of its set.
        while graph.vertex_count() > 2 && graph.edge_count() > 0 {
            let sampled = rng.gen_range(0..graph.edge_count());
            let (from, to) = graph
                .edge_at(sampled)
                .ok_or(GraphError::EmptyContainer)?;
            let (from, to) = (self.position(from)?, self.position(to)?);

            let root = sets.union(from, to);
            let absorbed = if root == from { to } else { from };
            merge_vertices(
                &mut graph,
                self.label(absorbed)?.as_str(),
                self.label(root)?.as_str(),
            )?;
        }

        let first = graph
            .vertices()
            .next()
            .cloned()
            .ok_or(GraphError::EmptyContainer)?;
        let cut_size = graph.neighbors(first.as_str())?.len();

        let first_root = self.position(&first)?;
        let (mut left, mut right) = (Vec::new(), Vec::new());
        for (position, vertex) in self.originals.iter().enumerate() {
            if sets.find(position) == first_root {
                left.push(vertex.clone());
            } else {
                right.push(vertex.clone());
            }
        }

        debug!(cut_size, survivors = graph.vertex_count(), "trial complete");
        Ok(TrialOutcome {
            cut_size,
            partition: Partition::new(left, right),
        })
    }
}
