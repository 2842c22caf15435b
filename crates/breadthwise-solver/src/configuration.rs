use std::{fmt::Display, hash::Hash};

/// A single point in a puzzle's state space.
///
/// The [`Solver`](crate::Solver) only ever sees a puzzle through this trait. It
/// explores the implicit graph whose nodes are configurations and whose edges
/// are the moves returned by [`neighbors`](Self::neighbors).
///
/// # Contract
///
/// - [`Eq`] and [`Hash`] must agree with each other and must cover the complete
///   semantic state: two configurations that represent the same board compare
///   equal no matter which move sequence produced them.
/// - [`neighbors`](Self::neighbors) returns fresh values. A configuration is
///   never mutated once it has been produced.
/// - [`Display`] is used for traces and hints only.
///
/// Violating the [`Eq`]/[`Hash`] agreement is not detected at runtime. It shows
/// up as duplicate expansion or missed convergence. Use the helpers in
/// [`testing`](crate::testing) to check a conforming type.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// use breadthwise_solver::Configuration;
///
/// /// Counting up from `value` until it reaches `target`.
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Counter {
///     value: u32,
///     target: u32,
/// }
///
/// impl fmt::Display for Counter {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.value)
///     }
/// }
///
/// impl Configuration for Counter {
///     fn neighbors(&self) -> Vec<Self> {
///         if self.value < self.target {
///             vec![Self {
///                 value: self.value + 1,
///                 target: self.target,
///             }]
///         } else {
///             vec![]
///         }
///     }
///
///     fn is_goal(&self) -> bool {
///         self.value == self.target
///     }
/// }
///
/// let start = Counter { value: 1, target: 4 };
/// let outcome = breadthwise_solver::solve(start);
/// assert_eq!(outcome.path().map(<[_]>::len), Some(4));
/// ```
pub trait Configuration: Clone + Eq + Hash + Display {
    /// Returns every configuration reachable from `self` by exactly one legal move.
    ///
    /// The result may be empty (a dead end) and must not contain `self`.
    /// The order should be deterministic so that traces are reproducible.
    fn neighbors(&self) -> Vec<Self>;

    /// Returns `true` if this configuration solves the puzzle.
    fn is_goal(&self) -> bool;
}
