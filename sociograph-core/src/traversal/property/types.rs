//! Fixture types for traversal property tests.

use crate::{MemberId, Network, WeightedGraph};

/// Shape of the generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// A single directed chain plus a few random shortcuts.
    Chain,
    /// Roughly one edge in five possible pairs.
    Sparse,
    /// Most pairs connected, many equal-length alternatives.
    Dense,
    /// Two halves with no edge between them.
    Disconnected,
}

/// Social network fixture with a chosen query pair.
#[derive(Clone, Debug)]
pub(super) struct NetworkFixture {
    /// Generated network.
    pub network: Network,
    /// Query start member.
    pub start: MemberId,
    /// Query end member; may equal `start`.
    pub end: MemberId,
    /// Topology used during generation.
    pub topology: Topology,
}

/// Weighted graph fixture with a chosen start node.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Generated graph; every node in `0..node_count` is present.
    pub graph: WeightedGraph<u32, u32>,
    /// Query start node.
    pub start: u32,
    /// Topology used during generation.
    pub topology: Topology,
}
