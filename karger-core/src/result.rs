//! Result types for minimum-cut runs.

use crate::vertex::VertexId;

/// Two disjoint vertex sets covering every vertex of the input graph.
///
/// Each side is sorted, and the side holding the smallest label is always
/// reported as [`Partition::left`], so equal cuts compare equal.
///
/// # Examples
/// ```
/// use karger_core::{Partition, VertexId};
///
/// let partition = Partition::new(
///     vec![VertexId::from("c"), VertexId::from("a")],
///     vec![VertexId::from("b")],
/// );
/// assert_eq!(partition.left(), [VertexId::from("a"), VertexId::from("c")]);
/// assert_eq!(partition.right(), [VertexId::from("b")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    left: Vec<VertexId>,
    right: Vec<VertexId>,
}

impl Partition {
    /// Builds a canonical partition from two vertex sets.
    #[must_use]
    pub fn new(mut first: Vec<VertexId>, mut second: Vec<VertexId>) -> Self {
        first.sort_unstable();
        second.sort_unstable();
        if second.first() < first.first() && !second.is_empty() {
            std::mem::swap(&mut first, &mut second);
        }
        Self {
            left: first,
            right: second,
        }
    }

    /// Side containing the smallest label.
    #[must_use]
    #[rustfmt::skip]
    pub fn left(&self) -> &[VertexId] { &self.left }

    /// The other side.
    #[must_use]
    #[rustfmt::skip]
    pub fn right(&self) -> &[VertexId] { &self.right }

    /// Returns `true` when `vertex` is on the left side.
    #[must_use]
    pub fn is_left(&self, vertex: &VertexId) -> bool {
        self.left.binary_search(vertex).is_ok()
    }
}

/// Represents the output of a [`crate::MinCut::run`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCutResult {
    cut_size: usize,
    partition: Partition,
    best_trial: usize,
    hits: usize,
    trial_cuts: Vec<usize>,
}

impl MinCutResult {
    pub(crate) fn new(
        cut_size: usize,
        partition: Partition,
        best_trial: usize,
        trial_cuts: Vec<usize>,
    ) -> Self {
        let hits = trial_cuts.iter().filter(|cut| **cut == cut_size).count();
        Self {
            cut_size,
            partition,
            best_trial,
            hits,
            trial_cuts,
        }
    }

    /// Number of undirected edges crossing the best cut found.
    #[must_use]
    #[rustfmt::skip]
    pub fn cut_size(&self) -> usize { self.cut_size }

    /// Vertex sets on either side of the best cut.
    #[must_use]
    #[rustfmt::skip]
    pub fn partition(&self) -> &Partition { &self.partition }

    /// Number of trials executed.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trial_cuts.len()
    }

    /// Index of the first trial that produced the best cut.
    #[must_use]
    #[rustfmt::skip]
    pub fn best_trial(&self) -> usize { self.best_trial }

    /// Number of trials that found a cut of the best size.
    #[must_use]
    #[rustfmt::skip]
    pub fn hits(&self) -> usize { self.hits }

    /// Cut sizes of every trial in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn trial_cuts(&self) -> &[usize] { &self.trial_cuts }
}
