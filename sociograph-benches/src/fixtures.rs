//! Seeded inputs shared by the benchmark binaries.

use sociograph_core::{
    MemberId, Network, SyntheticGraphConfig, SyntheticNetworkConfig, WeightedGraph,
};

use crate::{
    error::BenchSetupError,
    params::{GraphBenchParams, NetworkBenchParams},
};

/// Seed used for every generated input.
pub const SEED: u64 = 42;

const MAX_WEIGHT: u32 = 100;
const INTERACTIONS_PER_MEMBER: u64 = 5;

/// Generates a weighted graph sized by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty graph and propagates
/// generator failures.
pub fn weighted_graph(
    params: GraphBenchParams,
) -> Result<WeightedGraph<u32, u32>, BenchSetupError> {
    if params.nodes == 0 {
        return Err(BenchSetupError::ZeroValue { context: "nodes" });
    }
    let graph = SyntheticGraphConfig::new()
        .with_nodes(params.nodes)
        .with_edges(u64::from(params.nodes).saturating_mul(params.edges_per_node))
        .with_max_weight(MAX_WEIGHT)
        .with_seed(SEED)
        .generate_graph()?;
    Ok(graph)
}

/// Generates a social network sized by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] for an empty network and
/// propagates generator failures.
pub fn social_network(params: NetworkBenchParams) -> Result<Network, BenchSetupError> {
    if params.members == 0 {
        return Err(BenchSetupError::ZeroValue { context: "members" });
    }
    let network = SyntheticNetworkConfig::new()
        .with_members(params.members)
        .with_followings_per_member(params.followings_per_member)
        .with_interactions_per_member(INTERACTIONS_PER_MEMBER)
        .with_seed(SEED)
        .generate_network()?;
    Ok(network)
}

/// First and last member of a generated network.
#[must_use]
pub const fn endpoints(params: NetworkBenchParams) -> (MemberId, MemberId) {
    (MemberId::new(1), MemberId::new(params.members))
}
