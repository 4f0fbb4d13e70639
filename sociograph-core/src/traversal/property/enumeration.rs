//! BFS and DFS enumeration visit every reachable node exactly once, and
//! breadth-first order never decreases in hop distance.

use std::collections::BTreeSet;

use proptest::prop_assert;
use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{TraversalOrder, breadth_first_order, traverse};

use super::oracle::relaxed_distances;
use super::types::GraphFixture;

pub(super) fn run_enumeration_property(fixture: &GraphFixture) -> TestCaseResult {
    let hops = relaxed_distances(&fixture.graph, fixture.start, |_| 1);
    let reachable: BTreeSet<u32> = hops.keys().copied().collect();

    for order in [TraversalOrder::BreadthFirst, TraversalOrder::DepthFirst] {
        let visited = traverse(&fixture.graph, fixture.start, order);
        let distinct: BTreeSet<u32> = visited.iter().copied().collect();
        prop_assert_eq!(
            distinct.len(),
            visited.len(),
            "{:?} repeated a node ({:?})",
            order,
            fixture.topology
        );
        prop_assert_eq!(&distinct, &reachable, "{:?} ({:?})", order, fixture.topology);
        prop_assert_eq!(visited.first(), Some(&fixture.start));
    }

    let order = breadth_first_order(&fixture.graph, fixture.start);
    for pair in order.windows(2) {
        let [before, after] = pair else {
            continue;
        };
        let (Some(near), Some(far)) = (hops.get(before), hops.get(after)) else {
            return Err(TestCaseError::fail(format!(
                "visited node missing from oracle: {before} or {after}"
            )));
        };
        prop_assert!(
            near <= far,
            "hop distance fell from {} ({}) to {} ({}) in {:?}",
            before,
            near,
            after,
            far,
            order
        );
    }
    Ok(())
}
