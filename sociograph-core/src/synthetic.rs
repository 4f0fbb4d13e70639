//! Seeded generators for synthetic networks and weighted graphs.
//!
//! Generation is deterministic for a given configuration, which keeps CLI
//! runs, benchmarks, and tests reproducible. The traversal algorithms never
//! depend on randomness themselves.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

use crate::{
    error::SyntheticError,
    graph::WeightedGraph,
    member::MemberId,
    network::Network,
};

/// Configures [`SyntheticNetworkConfig::generate_network`].
///
/// Members are numbered `1..=members` and named `Member_{id}`. Each member
/// contributes `followings_per_member` random follow attempts and
/// `interactions_per_member` random like and comment attempts; attempts that
/// pick the same member twice are skipped.
///
/// # Examples
/// ```
/// use sociograph_core::SyntheticNetworkConfig;
///
/// let network = SyntheticNetworkConfig::new()
///     .with_members(20)
///     .with_seed(7)
///     .generate_network()?;
/// assert_eq!(network.len(), 20);
/// # Ok::<(), sociograph_core::SyntheticError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticNetworkConfig {
    members: u64,
    followings_per_member: u64,
    interactions_per_member: u64,
    max_count: u64,
    seed: u64,
}

impl Default for SyntheticNetworkConfig {
    fn default() -> Self {
        Self {
            members: 10,
            followings_per_member: 10,
            interactions_per_member: 5,
            max_count: 9,
            seed: 0,
        }
    }
}

impl SyntheticNetworkConfig {
    /// Creates a configuration with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of members.
    #[must_use]
    pub fn with_members(mut self, members: u64) -> Self {
        self.members = members;
        self
    }

    /// Sets the follow attempts made per member.
    #[must_use]
    pub fn with_followings_per_member(mut self, attempts: u64) -> Self {
        self.followings_per_member = attempts;
        self
    }

    /// Sets the like and comment attempts made per member.
    #[must_use]
    pub fn with_interactions_per_member(mut self, attempts: u64) -> Self {
        self.interactions_per_member = attempts;
        self
    }

    /// Sets the inclusive upper bound of each random like or comment count.
    #[must_use]
    pub fn with_max_count(mut self, max_count: u64) -> Self {
        self.max_count = max_count;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Configured member count.
    #[must_use]
    #[rustfmt::skip]
    pub fn members(&self) -> u64 { self.members }

    /// Configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Builds the network.
    ///
    /// # Errors
    /// Returns [`SyntheticError::NoMembers`] when `members` is zero.
    #[instrument(
        name = "synthetic.network",
        level = "debug",
        skip(self),
        fields(members = self.members, seed = self.seed),
    )]
    pub fn generate_network(&self) -> Result<Network, SyntheticError> {
        if self.members == 0 {
            return Err(SyntheticError::NoMembers);
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut network = Network::new();
        for raw in 1..=self.members {
            network.add_member(MemberId::new(raw), format!("Member_{raw}"))?;
        }

        let pick = |rng: &mut SmallRng| MemberId::new(rng.gen_range(1..=self.members));
        for _ in 0..self.members.saturating_mul(self.followings_per_member) {
            let (follower, followee) = (pick(&mut rng), pick(&mut rng));
            if follower != followee {
                network.follow(follower, followee)?;
            }
        }
        for _ in 0..self.members.saturating_mul(self.interactions_per_member) {
            let (liker, likee) = (pick(&mut rng), pick(&mut rng));
            if liker != likee {
                network.like(liker, likee, rng.gen_range(0..=self.max_count))?;
            }
            let (commenter, commentee) = (pick(&mut rng), pick(&mut rng));
            if commenter != commentee {
                network.comment(commenter, commentee, rng.gen_range(0..=self.max_count))?;
            }
        }

        info!(
            members = network.len(),
            followings = network.following_count(),
            "synthetic network generated"
        );
        Ok(network)
    }
}

/// Configures [`SyntheticGraphConfig::generate_graph`].
///
/// Nodes are `0..nodes`. `edges` random pairs are drawn; self pairs are
/// skipped and repeated pairs overwrite the earlier weight. Weights are drawn
/// from `1..=max_weight`.
///
/// # Examples
/// ```
/// use sociograph_core::SyntheticGraphConfig;
///
/// let graph = SyntheticGraphConfig::new().with_nodes(5).with_edges(0).generate_graph()?;
/// assert_eq!(graph.node_count(), 5);
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), sociograph_core::SyntheticError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    nodes: u32,
    edges: u64,
    max_weight: u32,
    seed: u64,
}

impl Default for SyntheticGraphConfig {
    fn default() -> Self {
        Self {
            nodes: 16,
            edges: 32,
            max_weight: 10,
            seed: 0,
        }
    }
}

impl SyntheticGraphConfig {
    /// Creates a configuration with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes.
    #[must_use]
    pub fn with_nodes(mut self, nodes: u32) -> Self {
        self.nodes = nodes;
        self
    }

    /// Sets the number of random edge attempts.
    #[must_use]
    pub fn with_edges(mut self, edges: u64) -> Self {
        self.edges = edges;
        self
    }

    /// Sets the inclusive upper bound of random edge weights.
    #[must_use]
    pub fn with_max_weight(mut self, max_weight: u32) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the graph.
    ///
    /// # Errors
    /// Returns [`SyntheticError::NoNodes`] when `nodes` is zero and
    /// [`SyntheticError::InvalidMaxWeight`] when `max_weight` is zero.
    #[instrument(
        name = "synthetic.graph",
        level = "debug",
        skip(self),
        fields(nodes = self.nodes, seed = self.seed),
    )]
    pub fn generate_graph(&self) -> Result<WeightedGraph<u32, u32>, SyntheticError> {
        if self.nodes == 0 {
            return Err(SyntheticError::NoNodes);
        }
        if self.max_weight == 0 {
            return Err(SyntheticError::InvalidMaxWeight {
                got: self.max_weight,
            });
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut graph = WeightedGraph::new();
        for node in 0..self.nodes {
            graph.add_node(node);
        }
        for _ in 0..self.edges {
            let (u, v) = (rng.gen_range(0..self.nodes), rng.gen_range(0..self.nodes));
            if u == v {
                continue;
            }
            graph.add_edge(u, v, rng.gen_range(1..=self.max_weight))?;
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "synthetic graph generated"
        );
        Ok(graph)
    }
}
