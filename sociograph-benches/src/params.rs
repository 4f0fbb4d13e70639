//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion parameter label.

use std::fmt;

/// Size of a synthetic weighted graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub nodes: u32,
    /// Random edge attempts per node.
    pub edges_per_node: u64,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.nodes, self.edges_per_node)
    }
}

/// Size of a synthetic social network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetworkBenchParams {
    /// Number of members.
    pub members: u64,
    /// Random follow attempts per member.
    pub followings_per_member: u64,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={},f={}", self.members, self.followings_per_member)
    }
}

/// Network size plus hop bound for the engagement search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngagementBenchParams {
    /// Network to search.
    pub network: NetworkBenchParams,
    /// Hop bound passed to the search.
    pub max_depth: usize,
}

impl fmt::Display for EngagementBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},depth={}", self.network, self.max_depth)
    }
}
