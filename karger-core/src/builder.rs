//! Builder utilities for configuring minimum-cut runs.
//!
//! Exposes the execution strategy selection surface and builder validation used before constructing [`MinCut`] instances.

use std::num::NonZeroUsize;

use crate::{error::MinCutError, mincut::MinCut};

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Indicates how [`MinCut`] schedules its independent trials when
/// [`MinCut::run`] is invoked.
///
/// Both strategies produce identical results for the same seed: every trial
/// derives its own random stream from the seed and its trial index and
/// contracts a private copy of the graph.
///
/// # Examples
/// ```
/// use karger_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert!(matches!(strategy, ExecutionStrategy::Sequential));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Run trials one after another on the calling thread.
    #[default]
    Sequential,
    /// Spread trials across the Rayon thread pool.
    Parallel,
}

/// Configures and constructs [`MinCut`] instances.
///
/// # Examples
/// ```
/// use karger_core::{ExecutionStrategy, MinCutBuilder};
///
/// let min_cut = MinCutBuilder::new()
///     .with_trials(16)
///     .with_seed(7)
///     .with_execution_strategy(ExecutionStrategy::Parallel)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(min_cut.trials().map(|trials| trials.get()), Some(16));
/// assert_eq!(min_cut.seed(), 7);
/// assert_eq!(min_cut.execution_strategy(), ExecutionStrategy::Parallel);
/// ```
#[derive(Debug, Clone)]
pub struct MinCutBuilder {
    trials: Option<usize>,
    seed: u64,
    execution_strategy: ExecutionStrategy,
}

impl Default for MinCutBuilder {
    fn default() -> Self {
        Self {
            trials: None,
            seed: DEFAULT_SEED,
            execution_strategy: ExecutionStrategy::Sequential,
        }
    }
}

impl MinCutBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{ExecutionStrategy, MinCutBuilder};
    ///
    /// let builder = MinCutBuilder::new();
    /// assert_eq!(builder.trials(), None);
    /// assert_eq!(builder.seed(), 42);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Sequential);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of independent contraction trials.
    ///
    /// Without an override the trial count is derived from the vertex count,
    /// see [`crate::default_trial_count`].
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Returns the explicitly configured trial count, if any.
    #[must_use]
    pub fn trials(&self) -> Option<usize> {
        self.trials
    }

    /// Sets the seed from which every trial derives its random stream.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the execution strategy to use when running trials.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{ExecutionStrategy, MinCutBuilder};
    ///
    /// let builder = MinCutBuilder::new().with_execution_strategy(ExecutionStrategy::Parallel);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Parallel);
    /// ```
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`MinCut`] instance.
    ///
    /// # Errors
    /// Returns [`MinCutError::ZeroTrials`] when an explicit trial count of
    /// zero was configured.
    ///
    /// # Examples
    /// ```
    /// use karger_core::{MinCutBuilder, MinCutError};
    ///
    /// let err = MinCutBuilder::new().with_trials(0).build().unwrap_err();
    /// assert_eq!(err, MinCutError::ZeroTrials);
    /// ```
    pub fn build(self) -> Result<MinCut, MinCutError> {
        let trials = match self.trials {
            Some(requested) => Some(NonZeroUsize::new(requested).ok_or(MinCutError::ZeroTrials)?),
            None => None,
        };
        Ok(MinCut::new(trials, self.seed, self.execution_strategy))
    }
}
