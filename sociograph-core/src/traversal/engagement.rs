//! Depth-bounded best-first search for the highest-engagement follow path.
//!
//! Candidates are partial paths ranked by cumulative engagement. The search
//! explores the whole bounded frontier instead of stopping at the first
//! arrival, so its cost grows exponentially with the depth bound.

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{debug, instrument};

use crate::{error::Result, member::MemberId, network::Network};

/// Hop bound used when callers do not choose one.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Best path found by [`highest_engagement_path`] and its score.
///
/// An empty path with score zero means `end` was not reachable within the
/// bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngagementPath {
    path: Vec<MemberId>,
    score: u64,
}

impl EngagementPath {
    /// The "no path" result.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Members along the path, start first.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &[MemberId] { &self.path }

    /// Sum of [`crate::Member::total_engagement`] over every member on the path.
    #[must_use]
    #[rustfmt::skip]
    pub fn score(&self) -> u64 { self.score }

    /// Returns `true` when no path was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of follow edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Splits into the member list and the score.
    #[must_use]
    pub fn into_parts(self) -> (Vec<MemberId>, u64) {
        (self.path, self.score)
    }
}

/// Partial path waiting in the max-queue.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Candidate {
    score: u64,
    node: MemberId,
    path: Vec<MemberId>,
}

impl Ord for Candidate {
    /// Higher score first; ties pop the smaller node, then the
    /// lexicographically smaller path.
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Candidate> for EngagementPath {
    fn from(candidate: Candidate) -> Self {
        Self {
            path: candidate.path,
            score: candidate.score,
        }
    }
}

/// Finds the follow path from `start` to `end` with the greatest summed
/// engagement, using at most `max_depth` hops.
///
/// Paths never revisit a member. `start == end` yields `[start]` scored with
/// the start member's engagement. Among equally scored arrivals the first one
/// popped is kept.
///
/// # Errors
/// Returns [`crate::NetworkError::UnknownMember`] when either endpoint is
/// absent.
///
/// # Examples
/// ```
/// use sociograph_core::{MemberId, Network, highest_engagement_path};
///
/// let id = MemberId::new;
/// let mut network = Network::new();
/// for raw in 1..=4 {
///     network.add_member(id(raw), format!("m{raw}"))?;
/// }
/// network.ensure_path(&[id(1), id(2), id(4)])?;
/// network.ensure_path(&[id(1), id(3), id(4)])?;
/// network.like(id(3), id(1), 10)?;
///
/// let best = highest_engagement_path(&network, id(1), id(4), 5)?;
/// assert_eq!(best.path(), &[id(1), id(3), id(4)]);
/// assert_eq!(best.score(), 10);
/// # Ok::<(), sociograph_core::NetworkError>(())
/// ```
#[instrument(
    name = "traversal.engagement",
    level = "debug",
    skip(network),
    fields(members = network.len()),
)]
pub fn highest_engagement_path(
    network: &Network,
    start: MemberId,
    end: MemberId,
    max_depth: usize,
) -> Result<EngagementPath> {
    let origin = network.require(start)?;
    network.require(end)?;

    let mut queue = BinaryHeap::from([Candidate {
        score: origin.total_engagement(),
        node: start,
        path: vec![start],
    }]);
    let mut best: Option<Candidate> = None;
    let (mut expanded, mut pruned, mut arrivals) = (0_usize, 0_usize, 0_usize);

    while let Some(candidate) = queue.pop() {
        if candidate.node == end {
            arrivals = arrivals.saturating_add(1);
            if best
                .as_ref()
                .is_none_or(|current| candidate.score > current.score)
            {
                best = Some(candidate);
            }
            continue;
        }
        if candidate.path.len() > max_depth {
            pruned = pruned.saturating_add(1);
            continue;
        }
        let Some(member) = network.member(candidate.node) else {
            continue;
        };
        expanded = expanded.saturating_add(1);
        for &next in member.following() {
            if candidate.path.contains(&next) {
                continue;
            }
            let Some(neighbour) = network.member(next) else {
                continue;
            };
            let mut path = candidate.path.clone();
            path.push(next);
            queue.push(Candidate {
                score: candidate.score.saturating_add(neighbour.total_engagement()),
                node: next,
                path,
            });
        }
    }

    debug!(expanded, pruned, arrivals, found = best.is_some(), "engagement search finished");
    Ok(best.map_or_else(EngagementPath::empty, EngagementPath::from))
}
