//! Seeded generators for traversal fixtures.
//!
//! Proptest samples a topology and a seed; the fixture itself is built with
//! [`SmallRng`] so seeded rstest cases reproduce exactly the same inputs.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{MemberId, Network, WeightedGraph};

use super::types::{GraphFixture, NetworkFixture, Topology};

/// Smallest generated node count.
const MIN_NODES: u32 = 2;
/// Largest generated node count; exhaustive path enumeration stays cheap.
const MAX_NODES: u32 = 9;
/// Largest like or comment count per interaction.
const MAX_INTERACTIONS: u64 = 5;
/// Largest generated edge weight.
const MAX_WEIGHT: u32 = 9;

pub(super) fn network_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_network_fixture(topology, &mut rng)
    })
}

pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_graph_fixture(topology, &mut rng)
    })
}

pub(super) fn generate_network_fixture(topology: Topology, rng: &mut SmallRng) -> NetworkFixture {
    let count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let id = |raw: u32| MemberId::new(u64::from(raw));

    let mut network = Network::new();
    for raw in 0..count {
        network
            .add_member(id(raw), format!("Member{raw}"))
            .expect("generated ids are unique");
    }
    for (from, to) in edge_pairs(topology, count, rng) {
        network.follow(id(from), id(to)).expect("members exist");
    }
    for giver in 0..count {
        let receiver = rng.gen_range(0..count);
        if receiver == giver || !rng.gen_bool(0.6) {
            continue;
        }
        let likes = rng.gen_range(0..=MAX_INTERACTIONS);
        let comments = rng.gen_range(0..=MAX_INTERACTIONS);
        network.like(id(giver), id(receiver), likes).expect("members exist");
        network
            .comment(id(giver), id(receiver), comments)
            .expect("members exist");
    }

    NetworkFixture {
        start: id(rng.gen_range(0..count)),
        end: id(rng.gen_range(0..count)),
        network,
        topology,
    }
}

pub(super) fn generate_graph_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut graph = WeightedGraph::new();
    for node in 0..count {
        graph.add_node(node);
    }
    for (u, v) in edge_pairs(topology, count, rng) {
        let weight = rng.gen_range(1..=MAX_WEIGHT);
        graph.add_edge(u, v, weight).expect("positive weights are admissible");
    }
    GraphFixture {
        start: rng.gen_range(0..count),
        graph,
        topology,
    }
}

/// Ordered node pairs `(from, to)` with `from != to` over `0..count`.
fn edge_pairs(topology: Topology, count: u32, rng: &mut SmallRng) -> Vec<(u32, u32)> {
    match topology {
        Topology::Chain => {
            let mut pairs: Vec<(u32, u32)> = (1..count).map(|next| (next - 1, next)).collect();
            pairs.extend(random_pairs(count, 0.1, rng, |_, _| true));
            pairs
        }
        Topology::Sparse => random_pairs(count, 0.2, rng, |_, _| true),
        Topology::Dense => random_pairs(count, 0.7, rng, |_, _| true),
        Topology::Disconnected => {
            let split = count / 2;
            random_pairs(count, 0.5, rng, move |u, v| (u < split) == (v < split))
        }
    }
}

fn random_pairs(
    count: u32,
    probability: f64,
    rng: &mut SmallRng,
    allowed: impl Fn(u32, u32) -> bool,
) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for from in 0..count {
        for to in 0..count {
            if from != to && allowed(from, to) && rng.gen_bool(probability) {
                pairs.push((from, to));
            }
        }
    }
    pairs
}

impl proptest::arbitrary::Arbitrary for Topology {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Chain),
            3 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
