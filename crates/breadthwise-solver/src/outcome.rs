/// Counters collected during a single search invocation.
///
/// The start configuration is not counted by either counter, so a search that
/// starts on a goal reports zero for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    pub(crate) total_expansions: usize,
    pub(crate) unique_states: usize,
}

impl SearchStats {
    /// Returns the number of neighbors produced by all expansions, duplicates included.
    #[must_use]
    pub fn total_expansions(&self) -> usize {
        self.total_expansions
    }

    /// Returns the number of neighbors that had not been seen before they were produced.
    ///
    /// This is the number of configurations enqueued besides the start, and
    /// never exceeds [`total_expansions`](Self::total_expansions).
    #[must_use]
    pub fn unique_states(&self) -> usize {
        self.unique_states
    }
}

/// The result of [`Solver::solve`](crate::Solver::solve).
///
/// Every variant carries the search counters so callers can report the effort
/// spent, whether or not a path was found.
///
/// # Examples
///
/// ```
/// use breadthwise_solver::{SolveOutcome, testing::ExplicitGraph};
///
/// // 0 -> 1 -> 2, goal at 2
/// let graph = ExplicitGraph::new(vec![vec![1], vec![2], vec![]], &[2]);
/// match breadthwise_solver::solve(graph.state(0)) {
///     SolveOutcome::Solved { path, stats } => {
///         assert_eq!(path.len(), 3);
///         assert_eq!(stats.total_expansions(), 2);
///     }
///     other => panic!("expected a path, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome<C> {
    /// A goal was reached.
    Solved {
        /// Configurations from the start (first) to the goal (last).
        path: Vec<C>,
        /// Search counters.
        stats: SearchStats,
    },
    /// The frontier emptied without reaching a goal.
    Unsolvable {
        /// Search counters.
        stats: SearchStats,
    },
    /// The configured expansion cap was hit before the search finished.
    ///
    /// Never produced by a solver without [`SolverConfig::max_expansions`](crate::SolverConfig::max_expansions).
    LimitReached {
        /// Search counters.
        stats: SearchStats,
    },
}

impl<C> SolveOutcome<C> {
    /// Returns the search counters.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Solved { stats, .. }
            | Self::Unsolvable { stats }
            | Self::LimitReached { stats } => *stats,
        }
    }

    /// Returns the solution path, if a goal was reached.
    #[must_use]
    pub fn path(&self) -> Option<&[C]> {
        match self {
            Self::Solved { path, .. } => Some(path),
            Self::Unsolvable { .. } | Self::LimitReached { .. } => None,
        }
    }

    /// Consumes the outcome and returns the solution path, if a goal was reached.
    #[must_use]
    pub fn into_path(self) -> Option<Vec<C>> {
        match self {
            Self::Solved { path, .. } => Some(path),
            Self::Unsolvable { .. } | Self::LimitReached { .. } => None,
        }
    }

    /// Returns the number of moves in the solution path, if a goal was reached.
    #[must_use]
    pub fn moves(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }
}
