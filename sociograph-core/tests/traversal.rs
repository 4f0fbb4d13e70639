//! End-to-end checks of the traversal entry points on small known graphs.

mod common;

use std::collections::BTreeMap;

use common::{id, ids, lattice, members};
use rstest::{fixture, rstest};
use sociograph_core::{
    DEFAULT_MAX_DEPTH, Distance, Network, TraversalOrder, breadth_first_order, hop_distances,
    highest_engagement_path, member_path, shortest_distances, shortest_path, traverse,
};

/// Members 1..=6 chained 1 → 2 → … → 6, plus an isolated member 7.
#[fixture]
fn chain() -> Network {
    let mut network = members(7);
    network
        .ensure_path(&ids(&[1, 2, 3, 4, 5, 6]))
        .expect("members exist");
    network
}

#[test]
fn lattice_distances_from_origin() {
    let distances = shortest_distances(&lattice(), 0);
    let expected: BTreeMap<u32, Distance<u32>> = [
        (0, 0),
        (1, 1),
        (2, 1),
        (3, 2),
        (4, 2),
        (5, 2),
        (6, 2),
        (7, 3),
    ]
    .into_iter()
    .map(|(node, distance)| (node, Distance::Finite(distance)))
    .collect();
    assert_eq!(distances, expected);
}

#[test]
fn lattice_breadth_first_order() {
    assert_eq!(breadth_first_order(&lattice(), 0), vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn lattice_depth_first_visits_everything_once() {
    let mut order = traverse(&lattice(), 0, TraversalOrder::DepthFirst);
    assert_eq!(order.first(), Some(&0));
    order.sort_unstable();
    assert_eq!(order, (0..=7).collect::<Vec<_>>());
}

#[rstest]
fn chain_paths_agree(chain: Network) {
    let expected = ids(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(
        shortest_path(&chain, id(1), id(6)).expect("members exist"),
        Some(expected.clone())
    );
    assert_eq!(member_path(&chain, id(1), id(6)).expect("members exist"), expected);
}

#[rstest]
#[case::first(1)]
#[case::middle(4)]
#[case::isolated(7)]
fn path_to_self_is_trivial(chain: Network, #[case] raw: u64) {
    assert_eq!(
        shortest_path(&chain, id(raw), id(raw)).expect("member exists"),
        Some(vec![id(raw)])
    );
    assert_eq!(member_path(&chain, id(raw), id(raw)).expect("member exists"), vec![id(raw)]);
}

#[rstest]
fn isolated_member_is_unreachable(chain: Network) {
    assert_eq!(shortest_path(&chain, id(1), id(7)).expect("members exist"), None);
    assert!(member_path(&chain, id(1), id(7)).expect("members exist").is_empty());
    assert!(
        highest_engagement_path(&chain, id(1), id(7), DEFAULT_MAX_DEPTH)
            .expect("members exist")
            .is_empty()
    );
}

#[rstest]
fn follow_edges_are_directed(chain: Network) {
    assert_eq!(shortest_path(&chain, id(6), id(1)).expect("members exist"), None);
    let distances = hop_distances(&chain, id(3)).expect("member exists");
    assert_eq!(distances.get(&id(6)), Some(&Some(3)));
    assert_eq!(distances.get(&id(2)), Some(&None));
}

#[rstest]
fn engagement_search_respects_default_depth(chain: Network) {
    let best = highest_engagement_path(&chain, id(1), id(6), DEFAULT_MAX_DEPTH)
        .expect("members exist");
    assert_eq!(best.path(), ids(&[1, 2, 3, 4, 5, 6]).as_slice());
    assert_eq!(best.hops(), DEFAULT_MAX_DEPTH);

    let short = highest_engagement_path(&chain, id(1), id(6), DEFAULT_MAX_DEPTH - 1)
        .expect("members exist");
    assert!(short.is_empty());
}

#[test]
fn engagement_search_picks_the_busier_branch() {
    let mut network = members(5);
    network.ensure_path(&ids(&[1, 2, 5])).expect("members exist");
    network.ensure_path(&ids(&[1, 3, 4, 5])).expect("members exist");
    network.like(id(3), id(2), 2).expect("members exist");
    network.comment(id(4), id(2), 2).expect("members exist");
    network.like(id(2), id(4), 3).expect("members exist");

    let best = highest_engagement_path(&network, id(1), id(5), 3).expect("members exist");
    assert_eq!(best.path(), ids(&[1, 3, 4, 5]).as_slice());
    assert_eq!(best.score(), 4);

    let shallow = highest_engagement_path(&network, id(1), id(5), 2).expect("members exist");
    assert_eq!(shallow.path(), ids(&[1, 2, 5]).as_slice());
    assert_eq!(shallow.score(), 3);
}

#[rstest]
#[case::unknown_start(99, 1)]
#[case::unknown_end(1, 99)]
fn unknown_members_are_rejected(chain: Network, #[case] from: u64, #[case] to: u64) {
    let expected = sociograph_core::NetworkError::UnknownMember { id: id(99) };
    assert_eq!(shortest_path(&chain, id(from), id(to)), Err(expected.clone()));
    assert_eq!(member_path(&chain, id(from), id(to)), Err(expected.clone()));
    assert_eq!(
        highest_engagement_path(&chain, id(from), id(to), 3),
        Err(expected)
    );
}
