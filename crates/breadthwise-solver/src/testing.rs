//! Test utilities for configurations and the solver.
//!
//! This module provides [`ExplicitGraph`], a configuration type backed by a
//! fully materialized adjacency list, and [`assert_configuration_contract`],
//! a checker for the [`Configuration`] contract that puzzle crates run
//! against their own types.
//!
//! # Example
//!
//! ```
//! use breadthwise_solver::testing::{ExplicitGraph, assert_configuration_contract};
//!
//! let graph = ExplicitGraph::new(vec![vec![1], vec![0]], &[1]);
//! assert_configuration_contract(&graph.state(0));
//! assert_eq!(breadthwise_solver::hint(&graph.state(0)), Some(graph.state(1)));
//! ```

use std::{
    collections::{HashSet, hash_map::DefaultHasher},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::Configuration;

#[derive(Debug)]
struct Graph {
    adjacency: Vec<Vec<usize>>,
    goals: HashSet<usize>,
}

/// A directed graph whose nodes are usable as [`Configuration`]s.
///
/// Node `i` has an edge to every node listed in `adjacency[i]`, in that order.
#[derive(Debug, Clone)]
pub struct ExplicitGraph {
    graph: Arc<Graph>,
}

impl ExplicitGraph {
    /// Creates a graph from an adjacency list and a set of goal nodes.
    ///
    /// # Panics
    ///
    /// Panics if an edge or a goal refers to a node outside the adjacency list.
    #[must_use]
    #[track_caller]
    pub fn new(adjacency: Vec<Vec<usize>>, goals: &[usize]) -> Self {
        let len = adjacency.len();
        for (from, targets) in adjacency.iter().enumerate() {
            for &to in targets {
                assert!(to < len, "edge {from} -> {to} leaves a graph of {len} nodes");
            }
        }
        for &goal in goals {
            assert!(goal < len, "goal {goal} is outside a graph of {len} nodes");
        }
        Self {
            graph: Arc::new(Graph {
                adjacency,
                goals: goals.iter().copied().collect(),
            }),
        }
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.adjacency.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.adjacency.is_empty()
    }

    /// Returns the configuration standing on `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the graph.
    #[must_use]
    #[track_caller]
    pub fn state(&self, node: usize) -> GraphState {
        assert!(node < self.len(), "node {node} is outside a graph of {} nodes", self.len());
        GraphState {
            graph: Arc::clone(&self.graph),
            node,
        }
    }
}

/// A position in an [`ExplicitGraph`].
///
/// Equality and hashing use the node number only. States of different graphs
/// must not be mixed in one search.
#[derive(Debug, Clone)]
pub struct GraphState {
    graph: Arc<Graph>,
    node: usize,
}

impl GraphState {
    /// Returns the node number.
    #[must_use]
    pub fn node(&self) -> usize {
        self.node
    }
}

impl PartialEq for GraphState {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for GraphState {}

impl Hash for GraphState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl fmt::Display for GraphState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {}", self.node)
    }
}

impl Configuration for GraphState {
    fn neighbors(&self) -> Vec<Self> {
        self.graph.adjacency[self.node]
            .iter()
            .map(|&node| Self {
                graph: Arc::clone(&self.graph),
                node,
            })
            .collect()
    }

    fn is_goal(&self) -> bool {
        self.graph.goals.contains(&self.node)
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Checks the [`Configuration`] contract on `config` and its neighbors.
///
/// Verifies that:
/// - a clone compares equal and hashes identically,
/// - [`neighbors`](Configuration::neighbors) is deterministic,
/// - no neighbor equals `config` itself,
/// - equal neighbors hash identically,
/// - [`is_goal`](Configuration::is_goal) is stable across calls.
///
/// # Panics
///
/// Panics with a descriptive message when any check fails.
#[track_caller]
pub fn assert_configuration_contract<C>(config: &C)
where
    C: Configuration + fmt::Debug,
{
    let copy = config.clone();
    assert_eq!(&copy, config, "clone differs from the original");
    assert_eq!(hash_of(&copy), hash_of(config), "clone hashes differently: {config:?}");
    assert_eq!(copy.is_goal(), config.is_goal(), "is_goal is not stable: {config:?}");

    let neighbors = config.neighbors();
    assert_eq!(neighbors, config.neighbors(), "neighbors are not deterministic: {config:?}");

    for (i, neighbor) in neighbors.iter().enumerate() {
        assert_ne!(neighbor, config, "neighbor #{i} equals the configuration itself: {config:?}");
        for other in &neighbors[..i] {
            if other == neighbor {
                assert_eq!(
                    hash_of(other),
                    hash_of(neighbor),
                    "equal neighbors hash differently: {neighbor:?}"
                );
            }
        }
    }
}

/// Checks the [`Configuration`] contract on every state within `depth` moves of `start`.
///
/// Returns the number of distinct states checked.
///
/// # Panics
///
/// Panics when [`assert_configuration_contract`] fails for any visited state.
#[track_caller]
pub fn assert_contract_within<C>(start: &C, depth: usize) -> usize
where
    C: Configuration + fmt::Debug,
{
    let mut seen = HashSet::new();
    seen.insert(start.clone());
    let mut layer = vec![start.clone()];
    for _ in 0..=depth {
        let mut next = Vec::new();
        for config in &layer {
            assert_configuration_contract(config);
            for neighbor in config.neighbors() {
                if seen.insert(neighbor.clone()) {
                    next.push(neighbor);
                }
            }
        }
        layer = next;
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_equality_ignores_graph_identity() {
        let graph = ExplicitGraph::new(vec![vec![1], vec![]], &[1]);
        assert_eq!(graph.state(0), graph.clone().state(0));
        assert_ne!(graph.state(0), graph.state(1));
        assert_eq!(hash_of(&graph.state(1)), hash_of(&graph.state(1)));
    }

    #[test]
    fn test_neighbors_follow_adjacency_order() {
        let graph = ExplicitGraph::new(vec![vec![2, 1], vec![], vec![]], &[]);
        let nodes: Vec<usize> = graph.state(0).neighbors().iter().map(GraphState::node).collect();
        assert_eq!(nodes, vec![2, 1]);
    }

    #[test]
    fn test_goal_membership() {
        let graph = ExplicitGraph::new(vec![vec![], vec![], vec![]], &[0, 2]);
        assert!(graph.state(0).is_goal());
        assert!(!graph.state(1).is_goal());
        assert!(graph.state(2).is_goal());
    }

    #[test]
    #[should_panic(expected = "leaves a graph")]
    fn test_rejects_dangling_edge() {
        let _ = ExplicitGraph::new(vec![vec![3]], &[]);
    }

    #[test]
    #[should_panic(expected = "equals the configuration itself")]
    fn test_contract_rejects_self_loop() {
        let graph = ExplicitGraph::new(vec![vec![0]], &[]);
        assert_configuration_contract(&graph.state(0));
    }

    #[test]
    fn test_contract_within_counts_reachable_states() {
        let graph = ExplicitGraph::new(vec![vec![1], vec![2], vec![3], vec![]], &[]);
        assert_eq!(assert_contract_within(&graph.state(0), 1), 3);
        assert_eq!(assert_contract_within(&graph.state(0), 10), 4);
    }
}
