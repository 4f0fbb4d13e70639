//! Breadth-first and depth-first enumeration over a [`WeightedGraph`].
//!
//! Both routines return nodes in discovery order and visit each reachable
//! node exactly once. Weights are ignored.

use std::collections::{BTreeSet, VecDeque};

use tracing::instrument;

use crate::graph::{Weight, WeightedGraph};

/// Enumeration strategy accepted by [`traverse`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TraversalOrder {
    /// Level order driven by a FIFO queue.
    #[default]
    BreadthFirst,
    /// Pre-order driven by a LIFO stack.
    DepthFirst,
}

/// Enumerates the nodes reachable from `start` using `order`.
///
/// # Examples
/// ```
/// use sociograph_core::{TraversalOrder, WeightedGraph, traverse};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge(0_u32, 1, 1_u32)?;
/// graph.add_edge(0, 2, 1)?;
/// graph.add_edge(1, 3, 1)?;
/// assert_eq!(traverse(&graph, 0, TraversalOrder::BreadthFirst), vec![0, 1, 2, 3]);
/// assert_eq!(traverse(&graph, 0, TraversalOrder::DepthFirst), vec![0, 2, 1, 3]);
/// # Ok::<(), sociograph_core::GraphError>(())
/// ```
#[must_use]
pub fn traverse<N, W>(graph: &WeightedGraph<N, W>, start: N, order: TraversalOrder) -> Vec<N>
where
    N: Copy + Ord + std::fmt::Debug,
    W: Weight,
{
    match order {
        TraversalOrder::BreadthFirst => breadth_first_order(graph, start),
        TraversalOrder::DepthFirst => depth_first_order(graph, start),
    }
}

/// Lists nodes in breadth-first discovery order starting at `start`.
///
/// A start node without edges (or absent from the graph) yields `[start]`.
#[must_use]
#[instrument(
    name = "traversal.bfs_order",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn breadth_first_order<N, W>(graph: &WeightedGraph<N, W>, start: N) -> Vec<N>
where
    N: Copy + Ord + std::fmt::Debug,
    W: Weight,
{
    let mut discovered = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for (next, _) in graph.neighbours(node) {
            if discovered.insert(next) {
                queue.push_back(next);
            }
        }
    }
    order
}

/// Lists nodes in depth-first pre-order starting at `start`.
///
/// Nodes are marked when popped. Neighbours are pushed in ascending order, so
/// the largest unvisited neighbour is explored first.
#[must_use]
#[instrument(
    name = "traversal.dfs_order",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn depth_first_order<N, W>(graph: &WeightedGraph<N, W>, start: N) -> Vec<N>
where
    N: Copy + Ord + std::fmt::Debug,
    W: Weight,
{
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        stack.extend(
            graph
                .neighbours(node)
                .map(|(next, _)| next)
                .filter(|next| !visited.contains(next)),
        );
    }
    order
}
