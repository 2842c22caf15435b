use std::{
    collections::{HashMap, VecDeque, hash_map::Entry},
    num::NonZero,
};

use crate::{Configuration, SearchStats, SolveOutcome};

/// Tuning knobs for a [`Solver`].
///
/// The default configuration places no bound on the search, so a solver built
/// from it runs until it finds a goal or exhausts the reachable states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop once this many neighbors have been produced.
    ///
    /// The cap is checked before each expansion, so the final
    /// [`SearchStats::total_expansions`] can exceed it by less than one
    /// configuration's worth of neighbors.
    pub max_expansions: Option<NonZero<usize>>,
}

impl SolverConfig {
    /// Returns a configuration with the given expansion cap.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: Option<NonZero<usize>>) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

/// A breadth-first solver over any [`Configuration`].
///
/// Each call to [`solve`](Self::solve) or [`hint`](Self::hint) is an
/// independent search: the visited map and frontier are created for the call
/// and dropped when it returns. Memory grows with the number of distinct
/// reachable configurations, which is the caller's responsibility to bound
/// (see [`SolverConfig::max_expansions`]).
///
/// # Examples
///
/// ```
/// use breadthwise_solver::{Solver, testing::ExplicitGraph};
///
/// // 0 - 1 - 2 - 3 with a shortcut 0 - 3
/// let graph = ExplicitGraph::new(vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]], &[2]);
/// let solver = Solver::new();
///
/// let outcome = solver.solve(graph.state(0));
/// assert_eq!(outcome.moves(), Some(2));
///
/// let next = solver.hint(&graph.state(0));
/// assert_eq!(next, Some(graph.state(1)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the default (unbounded) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for a shortest path from `start` to the nearest goal.
    ///
    /// Returns [`SolveOutcome::Solved`] with the full path (start first, goal
    /// last) when a goal is reachable, and [`SolveOutcome::Unsolvable`] when
    /// the reachable states are exhausted. Both carry the search counters.
    ///
    /// If `start` is already a goal the path holds `start` alone and no
    /// configuration is expanded.
    pub fn solve<C>(&self, start: C) -> SolveOutcome<C>
    where
        C: Configuration,
    {
        let mut search = Search::new(start);
        match search.run(&self.config) {
            SearchEnd::Found(goal) => SolveOutcome::Solved {
                path: search.path_to(goal),
                stats: search.stats,
            },
            SearchEnd::Exhausted => SolveOutcome::Unsolvable {
                stats: search.stats,
            },
            SearchEnd::LimitReached => SolveOutcome::LimitReached {
                stats: search.stats,
            },
        }
    }

    /// Returns the configuration one move after `start` on a shortest path to a goal.
    ///
    /// Returns `None` when [`solve`](Self::solve) would not find a path. When
    /// `start` is already a goal the hint is `start` itself.
    pub fn hint<C>(&self, start: &C) -> Option<C>
    where
        C: Configuration,
    {
        let mut search = Search::new(start.clone());
        match search.run(&self.config) {
            SearchEnd::Found(goal) => Some(search.first_step_toward(goal)),
            SearchEnd::Exhausted | SearchEnd::LimitReached => None,
        }
    }
}

/// Searches for a shortest path using the default [`Solver`].
///
/// See [`Solver::solve`].
pub fn solve<C>(start: C) -> SolveOutcome<C>
where
    C: Configuration,
{
    Solver::new().solve(start)
}

/// Returns the next configuration toward the nearest goal using the default [`Solver`].
///
/// See [`Solver::hint`].
pub fn hint<C>(start: &C) -> Option<C>
where
    C: Configuration,
{
    Solver::new().hint(start)
}

type NodeId = usize;

const START: NodeId = 0;

#[derive(Debug)]
struct Node<C> {
    state: C,
    predecessor: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchEnd {
    Found(NodeId),
    Exhausted,
    LimitReached,
}

/// State of one breadth-first invocation.
///
/// `nodes` is the predecessor map stored by discovery order and `index` maps
/// each discovered configuration to its node. Every id in `frontier` is
/// already present in both.
#[derive(Debug)]
struct Search<C> {
    nodes: Vec<Node<C>>,
    index: HashMap<C, NodeId>,
    frontier: VecDeque<NodeId>,
    stats: SearchStats,
}

impl<C> Search<C>
where
    C: Configuration,
{
    fn new(start: C) -> Self {
        let mut index = HashMap::new();
        index.insert(start.clone(), START);
        Self {
            nodes: vec![Node {
                state: start,
                predecessor: None,
            }],
            index,
            frontier: VecDeque::from([START]),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self, config: &SolverConfig) -> SearchEnd {
        let end = self.explore(config);
        log::debug!(
            "search ended: {end:?}, total_expansions={}, unique_states={}",
            self.stats.total_expansions,
            self.stats.unique_states
        );
        end
    }

    fn explore(&mut self, config: &SolverConfig) -> SearchEnd {
        while let Some(id) = self.frontier.pop_front() {
            let current = &self.nodes[id].state;
            if current.is_goal() {
                return SearchEnd::Found(id);
            }
            if let Some(max) = config.max_expansions {
                if self.stats.total_expansions >= max.get() {
                    return SearchEnd::LimitReached;
                }
            }

            log::trace!("expanding state #{id}: {current}");
            for neighbor in current.neighbors() {
                self.stats.total_expansions += 1;
                self.discover(neighbor, id);
            }
        }
        SearchEnd::Exhausted
    }

    fn discover(&mut self, state: C, predecessor: NodeId) {
        let Entry::Vacant(entry) = self.index.entry(state) else {
            return;
        };
        let id = self.nodes.len();
        self.nodes.push(Node {
            state: entry.key().clone(),
            predecessor: Some(predecessor),
        });
        entry.insert(id);
        self.frontier.push_back(id);
        self.stats.unique_states += 1;
    }

    fn path_to(&self, goal: NodeId) -> Vec<C> {
        let mut path = Vec::new();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            path.push(node.state.clone());
            cursor = node.predecessor;
        }
        path.reverse();
        path
    }

    fn first_step_toward(&self, goal: NodeId) -> C {
        let mut id = goal;
        while let Some(predecessor) = self.nodes[id].predecessor {
            if predecessor == START {
                break;
            }
            id = predecessor;
        }
        self.nodes[id].state.clone()
    }
}
