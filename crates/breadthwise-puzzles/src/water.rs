//! The water buckets puzzle: measure an exact amount with buckets of fixed capacity.

use std::{
    fmt::{self, Display},
    sync::Arc,
};

use breadthwise_solver::Configuration;

/// Errors that can occur when setting up a water puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WaterError {
    /// No buckets were given.
    #[display("at least one bucket is required")]
    NoBuckets,
}

/// The amounts of water held by a set of buckets.
///
/// Each move fills one bucket from the tap, drains one bucket, or pours one
/// bucket into another until the source is empty or the target is full.
/// The puzzle is solved when any bucket holds exactly the target amount.
///
/// # Examples
///
/// ```
/// use breadthwise_puzzles::WaterConfiguration;
///
/// let start = WaterConfiguration::new(4, vec![3, 5])?;
/// let outcome = breadthwise_solver::solve(start);
/// assert_eq!(outcome.moves(), Some(6));
///
/// let unreachable = WaterConfiguration::new(1, vec![2, 4])?;
/// assert!(breadthwise_solver::solve(unreachable).is_unsolvable());
/// # Ok::<(), breadthwise_puzzles::WaterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaterConfiguration {
    capacities: Arc<[u32]>,
    target: u32,
    amounts: Vec<u32>,
}

impl WaterConfiguration {
    /// Creates a puzzle with empty buckets of the given capacities.
    ///
    /// # Errors
    ///
    /// Returns [`WaterError::NoBuckets`] if `capacities` is empty.
    pub fn new(target: u32, capacities: Vec<u32>) -> Result<Self, WaterError> {
        if capacities.is_empty() {
            return Err(WaterError::NoBuckets);
        }
        let amounts = vec![0; capacities.len()];
        Ok(Self {
            capacities: capacities.into(),
            target,
            amounts,
        })
    }

    /// Returns the bucket capacities.
    #[must_use]
    pub fn capacities(&self) -> &[u32] {
        &self.capacities
    }

    /// Returns the amount of water in each bucket.
    #[must_use]
    pub fn amounts(&self) -> &[u32] {
        &self.amounts
    }

    /// Returns the amount that must be measured.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    fn with_amounts(&self, amounts: Vec<u32>) -> Self {
        Self {
            capacities: Arc::clone(&self.capacities),
            target: self.target,
            amounts,
        }
    }

    fn fill(&self, i: usize) -> Vec<u32> {
        let mut amounts = self.amounts.clone();
        amounts[i] = self.capacities[i];
        amounts
    }

    fn drain(&self, i: usize) -> Vec<u32> {
        let mut amounts = self.amounts.clone();
        amounts[i] = 0;
        amounts
    }

    fn pour(&self, from: usize, to: usize) -> Vec<u32> {
        let mut amounts = self.amounts.clone();
        let poured = amounts[from].min(self.capacities[to] - amounts[to]);
        amounts[from] -= poured;
        amounts[to] += poured;
        amounts
    }
}

impl Configuration for WaterConfiguration {
    fn neighbors(&self) -> Vec<Self> {
        let n = self.amounts.len();
        let mut neighbors = Vec::new();
        for i in 0..n {
            let mut candidates = vec![self.fill(i), self.drain(i)];
            candidates.extend((0..n).filter(|&j| j != i).map(|j| self.pour(i, j)));
            neighbors.extend(
                candidates
                    .into_iter()
                    .filter(|amounts| *amounts != self.amounts)
                    .map(|amounts| self.with_amounts(amounts)),
            );
        }
        neighbors
    }

    fn is_goal(&self) -> bool {
        self.amounts.contains(&self.target)
    }
}

impl Display for WaterConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.amounts)
    }
}
