//! Dijkstra shortest paths with lazy deletion of stale queue entries.
//!
//! Two entry points share the queue discipline: [`shortest_distances`] over a
//! weighted [`WeightedGraph`], and [`member_path`] over the follow graph with
//! unit edge costs.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap, HashMap},
};

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Weight, WeightedGraph},
    member::MemberId,
    network::Network,
};

/// Shortest known distance to a node.
///
/// `Unreachable` plays the role of infinity and orders after every finite
/// distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance<W> {
    /// Reachable at the given cumulative weight.
    Finite(W),
    /// No path from the start node.
    Unreachable,
}

impl<W: Weight> Distance<W> {
    /// Returns the finite distance, if any.
    #[must_use]
    pub fn finite(self) -> Option<W> {
        match self {
            Self::Finite(weight) => Some(weight),
            Self::Unreachable => None,
        }
    }

    /// Returns `true` for a finite distance.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    fn improves_on(candidate: W, current: Option<&Self>) -> bool {
        match current {
            Some(Self::Finite(best)) => candidate.compare(best) == Ordering::Less,
            Some(Self::Unreachable) | None => true,
        }
    }
}

/// Min-queue entry: smaller distance first, then smaller node.
#[derive(Clone, Copy, Debug)]
struct QueueEntry<N, W> {
    distance: W,
    node: N,
}

impl<N: Ord, W: Weight> Ord for QueueEntry<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .compare(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord, W: Weight> PartialOrd for QueueEntry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, W: Weight> PartialEq for QueueEntry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, W: Weight> Eq for QueueEntry<N, W> {}

/// Computes the shortest cumulative weight from `start` to every node.
///
/// Every node of the graph appears in the result; unreachable nodes map to
/// [`Distance::Unreachable`]. `start` is always present with distance zero,
/// even when it is not part of the graph. A relaxation whose sum overflows
/// `W` is skipped, so a node whose every path overflows stays unreachable.
///
/// # Examples
/// ```
/// use sociograph_core::{Distance, WeightedGraph, shortest_distances};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge('a', 'b', 4_u32)?;
/// graph.add_edge('a', 'c', 1)?;
/// graph.add_edge('c', 'b', 2)?;
/// graph.add_node('z');
///
/// let distances = shortest_distances(&graph, 'a');
/// assert_eq!(distances[&'b'], Distance::Finite(3));
/// assert_eq!(distances[&'z'], Distance::Unreachable);
/// # Ok::<(), sociograph_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "traversal.dijkstra",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
)]
pub fn shortest_distances<N, W>(graph: &WeightedGraph<N, W>, start: N) -> BTreeMap<N, Distance<W>>
where
    N: Copy + Ord + std::fmt::Debug,
    W: Weight,
{
    let mut distances: BTreeMap<N, Distance<W>> = graph
        .nodes()
        .map(|node| (node, Distance::Unreachable))
        .collect();
    distances.insert(start, Distance::Finite(W::ZERO));

    let mut queue = BinaryHeap::from([QueueEntry {
        distance: W::ZERO,
        node: start,
    }]);
    let (mut stale, mut overflowed) = (0_usize, 0_usize);

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        if let Some(Distance::Finite(best)) = distances.get(&node) {
            if distance.compare(best) == Ordering::Greater {
                stale = stale.saturating_add(1);
                continue;
            }
        }

        for (next, weight) in graph.neighbours(node) {
            let Some(candidate) = distance.combine(weight) else {
                overflowed = overflowed.saturating_add(1);
                continue;
            };
            if Distance::improves_on(candidate, distances.get(&next)) {
                distances.insert(next, Distance::Finite(candidate));
                queue.push(QueueEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    debug!(stale, overflowed, "dijkstra finished");
    distances
}

/// Finds a fewest-hops path from `start` to `end`, treating every follow
/// edge as cost one.
///
/// An empty vector signals that `end` is unreachable; `start == end` yields
/// `vec![start]`.
///
/// # Errors
/// Returns [`crate::NetworkError::UnknownMember`] when either endpoint is
/// absent.
///
/// # Examples
/// ```
/// use sociograph_core::{MemberId, Network, member_path};
///
/// let mut network = Network::new();
/// for id in 1..=3 {
///     network.add_member(MemberId::new(id), format!("m{id}"))?;
/// }
/// network.follow(MemberId::new(1), MemberId::new(2))?;
///
/// assert_eq!(
///     member_path(&network, MemberId::new(1), MemberId::new(2))?,
///     vec![MemberId::new(1), MemberId::new(2)],
/// );
/// assert!(member_path(&network, MemberId::new(1), MemberId::new(3))?.is_empty());
/// # Ok::<(), sociograph_core::NetworkError>(())
/// ```
#[instrument(
    name = "traversal.member_path",
    level = "debug",
    skip(network),
    fields(members = network.len()),
)]
pub fn member_path(network: &Network, start: MemberId, end: MemberId) -> Result<Vec<MemberId>> {
    network.require(start)?;
    network.require(end)?;

    let mut distances: HashMap<MemberId, usize> = HashMap::from([(start, 0)]);
    let mut previous: HashMap<MemberId, MemberId> = HashMap::new();
    let mut queue = BinaryHeap::from([QueueEntry {
        distance: 0_usize,
        node: start,
    }]);

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        if distances.get(&node).is_some_and(|best| distance > *best) {
            continue;
        }
        let Some(member) = network.member(node) else {
            continue;
        };
        let candidate = distance.saturating_add(1);
        for &next in member.following() {
            if distances.get(&next).is_none_or(|best| candidate < *best) {
                distances.insert(next, candidate);
                previous.insert(next, node);
                queue.push(QueueEntry {
                    distance: candidate,
                    node: next,
                });
            }
        }
    }

    let path = reconstruct(&previous, start, end);
    if path.is_empty() {
        debug!(%start, %end, "no path between members");
    }
    Ok(path)
}

/// Walks `previous` from `end` and returns the path only when it originates
/// at `start`.
fn reconstruct(
    previous: &HashMap<MemberId, MemberId>,
    start: MemberId,
    end: MemberId,
) -> Vec<MemberId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prior) = previous.get(&current) {
        if current == start {
            break;
        }
        path.push(prior);
        current = prior;
    }
    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}
