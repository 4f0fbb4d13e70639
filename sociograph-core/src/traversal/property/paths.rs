//! The breadth-first and unit-weight Dijkstra path finders agree on hop
//! counts, and every returned path is a genuine follow path.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use proptest::{prop_assert, prop_assert_eq};

use crate::{MemberId, Network, breadth_first_tree, member_path, shortest_path};

use super::types::NetworkFixture;

pub(super) fn run_path_agreement_property(fixture: &NetworkFixture) -> TestCaseResult {
    let network = &fixture.network;
    let start = fixture.start;
    let tree = breadth_first_tree(network, start).map_err(fail)?;

    for end in network.ids() {
        let bfs = shortest_path(network, start, end).map_err(fail)?;
        let dijkstra = member_path(network, start, end).map_err(fail)?;
        match bfs {
            None => {
                prop_assert!(
                    dijkstra.is_empty(),
                    "dijkstra found {:?} where BFS found nothing ({:?})",
                    dijkstra,
                    fixture.topology
                );
                prop_assert_eq!(tree.distance(end), None);
            }
            Some(path) => {
                validate_follow_path(network, &path, start, end)?;
                validate_follow_path(network, &dijkstra, start, end)?;
                prop_assert_eq!(
                    path.len(),
                    dijkstra.len(),
                    "hop counts differ for {} -> {} ({:?})",
                    start,
                    end,
                    fixture.topology
                );
                prop_assert_eq!(tree.distance(end), Some(path.len() - 1));
            }
        }
    }
    Ok(())
}

/// Checks endpoints, follow edges between consecutive members, and that no
/// member repeats.
pub(super) fn validate_follow_path(
    network: &Network,
    path: &[MemberId],
    start: MemberId,
    end: MemberId,
) -> TestCaseResult {
    prop_assert_eq!(path.first(), Some(&start), "path {:?}", path);
    prop_assert_eq!(path.last(), Some(&end), "path {:?}", path);
    for pair in path.windows(2) {
        let [from, to] = pair else {
            continue;
        };
        let member = network.require(*from).map_err(fail)?;
        prop_assert!(member.follows(*to), "{} does not follow {} in {:?}", from, to, path);
    }
    let mut seen = path.to_vec();
    seen.sort_unstable();
    seen.dedup();
    prop_assert_eq!(seen.len(), path.len(), "path {:?} revisits a member", path);
    Ok(())
}

pub(super) fn fail(error: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(error.to_string())
}
