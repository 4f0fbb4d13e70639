use sociograph_core::{MemberId, Network, WeightedGraph};

#[must_use]
pub fn id(raw: u64) -> MemberId {
    MemberId::new(raw)
}

#[must_use]
pub fn ids(raw: &[u64]) -> Vec<MemberId> {
    raw.iter().copied().map(MemberId::new).collect()
}

/// Network with members `1..=count`, named `Member_{id}`, and no edges.
#[must_use]
pub fn members(count: u64) -> Network {
    let mut network = Network::new();
    for raw in 1..=count {
        network
            .add_member(id(raw), format!("Member_{raw}"))
            .expect("fresh id");
    }
    network
}

/// Unit-weight lattice: 0 fans out to 1 and 2, which fan out to 3..=6, all
/// of which meet at 7.
#[must_use]
pub fn lattice() -> WeightedGraph<u32, u32> {
    let mut graph = WeightedGraph::new();
    for (u, v) in [
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (2, 5),
        (2, 6),
        (3, 7),
        (4, 7),
        (5, 7),
        (6, 7),
    ] {
        graph.add_edge(u, v, 1).expect("unit weight is admissible");
    }
    graph
}
