//! Karger core library.
//!
//! An adjacency-list multigraph with vertex contraction, and a randomized
//! minimum-cut driver built on it.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjacency;
mod builder;
mod contraction;
mod error;
mod graph;
mod mincut;
mod result;
mod sort;
mod vertex;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    adjacency::AdjacencyList,
    builder::{DEFAULT_SEED, ExecutionStrategy, MinCutBuilder},
    contraction::{Contraction, contract_edge, contract_edge_into, merge_vertices},
    error::{GraphError, GraphErrorCode, MinCutError, MinCutErrorCode, Result},
    graph::{GraphInvariantViolation, Multigraph},
    mincut::{MAX_DEFAULT_TRIALS, MinCut, default_trial_count},
    result::{MinCutResult, Partition},
    sort::{randomized_quicksort, randomized_quicksort_by},
    vertex::VertexId,
};
