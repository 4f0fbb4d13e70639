//! Slow, obviously correct reference implementations.

use std::collections::BTreeMap;

use crate::{MemberId, Network, WeightedGraph};

/// Shortest distances by repeated edge relaxation (Bellman-Ford).
///
/// `cost` maps an edge weight to the cost used by the oracle, which lets the
/// same routine produce hop counts. Unreachable nodes are absent.
pub(super) fn relaxed_distances(
    graph: &WeightedGraph<u32, u32>,
    start: u32,
    cost: impl Fn(u32) -> u64,
) -> BTreeMap<u32, u64> {
    let mut distances = BTreeMap::from([(start, 0_u64)]);
    loop {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&base) = distances.get(&node) else {
                continue;
            };
            for (next, weight) in graph.neighbours(node) {
                let candidate = base + cost(weight);
                if distances.get(&next).is_none_or(|current| candidate < *current) {
                    distances.insert(next, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            return distances;
        }
    }
}

/// Greatest summed engagement over every simple follow path from `start` to
/// `end` with at most `max_depth` hops, never passing through `end` early.
pub(super) fn exhaustive_best_engagement(
    network: &Network,
    start: MemberId,
    end: MemberId,
    max_depth: usize,
) -> Option<u64> {
    let mut best = None;
    let mut path = vec![start];
    extend(network, end, max_depth, &mut path, engagement(network, start), &mut best);
    best
}

fn extend(
    network: &Network,
    end: MemberId,
    max_depth: usize,
    path: &mut Vec<MemberId>,
    score: u64,
    best: &mut Option<u64>,
) {
    let Some(&node) = path.last() else {
        return;
    };
    if node == end {
        *best = Some(best.map_or(score, |current| current.max(score)));
        return;
    }
    if path.len() > max_depth {
        return;
    }
    let Some(member) = network.member(node) else {
        return;
    };
    for &next in member.following() {
        if path.contains(&next) {
            continue;
        }
        let gain = engagement(network, next);
        path.push(next);
        extend(network, end, max_depth, path, score + gain, best);
        path.pop();
    }
}

pub(super) fn engagement(network: &Network, id: MemberId) -> u64 {
    network.member(id).map_or(0, crate::Member::total_engagement)
}
