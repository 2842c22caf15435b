//! Generic breadth-first search over implicit puzzle state spaces.
//!
//! A puzzle implements [`Configuration`] (neighbor enumeration, a goal test,
//! [`Eq`], [`Hash`], and [`Display`](std::fmt::Display)) and the [`Solver`]
//! finds a shortest sequence of moves from a start configuration to the
//! nearest goal. The solver never inspects a puzzle beyond that trait.
//!
//! Two entry points are provided:
//!
//! - [`solve`] returns the full path together with search counters
//!   ([`SolveOutcome`], [`SearchStats`]).
//! - [`hint`] returns only the configuration one move after the start.
//!
//! An unsolvable start is a normal outcome, reported through the result
//! type rather than as an error.
//!
//! # Examples
//!
//! ```
//! use breadthwise_solver::testing::ExplicitGraph;
//!
//! // 0 -> 1 -> 2 -> 3, goal at 3
//! let graph = ExplicitGraph::new(vec![vec![1], vec![2], vec![3], vec![]], &[3]);
//!
//! let outcome = breadthwise_solver::solve(graph.state(0));
//! assert!(outcome.is_solved());
//! assert_eq!(outcome.moves(), Some(3));
//!
//! assert_eq!(breadthwise_solver::hint(&graph.state(0)), Some(graph.state(1)));
//! assert_eq!(breadthwise_solver::hint(&graph.state(3)), Some(graph.state(3)));
//! ```

pub use self::{
    configuration::Configuration,
    outcome::{SearchStats, SolveOutcome},
    solver::{Solver, SolverConfig, hint, solve},
};

mod configuration;
mod outcome;
mod solver;
pub mod testing;
