//! Three-colour breadth-first search over the directed follow graph.
//!
//! Colour, hop distance, and predecessor are kept in a [`BfsTree`] owned by
//! the caller, never on the [`crate::Member`] entities, so concurrent searches
//! over the same network cannot interfere.

use std::collections::{BTreeMap, HashMap, VecDeque};

use tracing::{debug, instrument};

use crate::{
    error::Result,
    member::MemberId,
    network::Network,
};

/// Visitation state of a member during a breadth-first search.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Colour {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered and queued for expansion.
    Gray,
    /// Fully expanded.
    Black,
}

#[derive(Clone, Copy, Debug, Default)]
struct Visit {
    colour: Colour,
    distance: Option<usize>,
    predecessor: Option<MemberId>,
}

/// Result of one breadth-first search from a fixed start member.
///
/// # Examples
/// ```
/// use sociograph_core::{MemberId, Network, breadth_first_tree};
///
/// let mut network = Network::new();
/// for id in 1..=3 {
///     network.add_member(MemberId::new(id), format!("m{id}"))?;
/// }
/// network.follow(MemberId::new(1), MemberId::new(2))?;
///
/// let tree = breadth_first_tree(&network, MemberId::new(1))?;
/// assert_eq!(tree.distance(MemberId::new(2)), Some(1));
/// assert_eq!(tree.distance(MemberId::new(3)), None);
/// # Ok::<(), sociograph_core::NetworkError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BfsTree {
    start: MemberId,
    visits: HashMap<MemberId, Visit>,
}

impl BfsTree {
    pub(crate) fn grow(network: &Network, start: MemberId) -> Self {
        let mut visits: HashMap<MemberId, Visit> =
            network.ids().map(|id| (id, Visit::default())).collect();
        visits.insert(
            start,
            Visit {
                colour: Colour::Gray,
                distance: Some(0),
                predecessor: None,
            },
        );

        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let Some(member) = network.member(current) else {
                continue;
            };
            let depth = visits
                .get(&current)
                .and_then(|visit| visit.distance)
                .unwrap_or(0);
            for &next in member.following() {
                let Some(visit) = visits.get_mut(&next) else {
                    continue;
                };
                if visit.colour == Colour::White {
                    *visit = Visit {
                        colour: Colour::Gray,
                        distance: Some(depth.saturating_add(1)),
                        predecessor: Some(current),
                    };
                    queue.push_back(next);
                }
            }
            if let Some(visit) = visits.get_mut(&current) {
                visit.colour = Colour::Black;
            }
        }

        Self { start, visits }
    }

    /// The member the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> MemberId { self.start }

    /// Hop distance from the start, or `None` when unreached.
    #[must_use]
    pub fn distance(&self, id: MemberId) -> Option<usize> {
        self.visits.get(&id).and_then(|visit| visit.distance)
    }

    /// Final colour of `id`; members outside the network report white.
    #[must_use]
    pub fn colour(&self, id: MemberId) -> Colour {
        self.visits
            .get(&id)
            .map_or(Colour::White, |visit| visit.colour)
    }

    /// Member through which `id` was discovered.
    #[must_use]
    pub fn predecessor(&self, id: MemberId) -> Option<MemberId> {
        self.visits.get(&id).and_then(|visit| visit.predecessor)
    }

    /// Walks predecessor links from `end` back to the start.
    ///
    /// Returns `None` when `end` was not reached.
    #[must_use]
    pub fn path_to(&self, end: MemberId) -> Option<Vec<MemberId>> {
        self.distance(end)?;
        let mut path = vec![end];
        let mut current = end;
        while current != self.start {
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Hop distances for every member, in ascending identifier order.
    #[must_use]
    pub fn distances(&self) -> BTreeMap<MemberId, Option<usize>> {
        self.visits
            .iter()
            .map(|(id, visit)| (*id, visit.distance))
            .collect()
    }
}

/// Runs a full breadth-first search from `start`.
///
/// # Errors
/// Returns [`crate::NetworkError::UnknownMember`] when `start` is absent.
#[instrument(
    name = "traversal.bfs_tree",
    level = "debug",
    skip(network),
    fields(members = network.len()),
)]
pub fn breadth_first_tree(network: &Network, start: MemberId) -> Result<BfsTree> {
    network.require(start)?;
    Ok(BfsTree::grow(network, start))
}

/// Finds a fewest-hops path from `start` to `end` along follow edges.
///
/// Returns `Ok(None)` when `end` is unreachable; `start == end` yields
/// `Some(vec![start])`.
///
/// # Errors
/// Returns [`crate::NetworkError::UnknownMember`] when either endpoint is
/// absent.
///
/// # Examples
/// ```
/// use sociograph_core::{MemberId, Network, shortest_path};
///
/// let mut network = Network::new();
/// for id in 1..=4 {
///     network.add_member(MemberId::new(id), format!("m{id}"))?;
/// }
/// network.ensure_path(&[1, 2, 3].map(MemberId::new))?;
///
/// let path = shortest_path(&network, MemberId::new(1), MemberId::new(3))?;
/// assert_eq!(path, Some([1, 2, 3].map(MemberId::new).to_vec()));
/// assert_eq!(shortest_path(&network, MemberId::new(1), MemberId::new(4))?, None);
/// # Ok::<(), sociograph_core::NetworkError>(())
/// ```
#[instrument(
    name = "traversal.shortest_path",
    level = "debug",
    skip(network),
    fields(members = network.len()),
)]
pub fn shortest_path(
    network: &Network,
    start: MemberId,
    end: MemberId,
) -> Result<Option<Vec<MemberId>>> {
    network.require(start)?;
    network.require(end)?;
    let path = BfsTree::grow(network, start).path_to(end);
    if path.is_none() {
        debug!(%start, %end, "no path between members");
    }
    Ok(path)
}

/// Hop distances from `start` to every member (`None` when unreachable).
///
/// # Errors
/// Returns [`crate::NetworkError::UnknownMember`] when `start` is absent.
pub fn hop_distances(
    network: &Network,
    start: MemberId,
) -> Result<BTreeMap<MemberId, Option<usize>>> {
    Ok(breadth_first_tree(network, start)?.distances())
}
