//! Dijkstra distances match edge relaxation on weighted and unit graphs.

use proptest::prop_assert_eq;
use proptest::test_runner::TestCaseResult;

use crate::{Distance, shortest_distances};

use super::oracle::relaxed_distances;
use super::types::GraphFixture;

pub(super) fn run_distance_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let expected = relaxed_distances(&fixture.graph, fixture.start, u64::from);
    let actual = shortest_distances(&fixture.graph, fixture.start);

    prop_assert_eq!(actual.len(), fixture.graph.node_count());
    for (node, distance) in actual {
        let oracle = expected.get(&node).copied();
        match distance {
            Distance::Finite(weight) => prop_assert_eq!(
                Some(u64::from(weight)),
                oracle,
                "node {} ({:?})",
                node,
                fixture.topology
            ),
            Distance::Unreachable => prop_assert_eq!(oracle, None, "node {}", node),
        }
    }
    Ok(())
}
