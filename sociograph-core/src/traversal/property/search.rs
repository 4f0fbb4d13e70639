//! The bounded engagement search finds the exhaustive optimum and never
//! gets worse as the depth bound grows.

use proptest::test_runner::TestCaseResult;
use proptest::{prop_assert, prop_assert_eq};

use crate::highest_engagement_path;

use super::oracle::{engagement, exhaustive_best_engagement};
use super::paths::{fail, validate_follow_path};
use super::types::NetworkFixture;

/// Deepest bound compared against exhaustive enumeration.
pub(super) const MAX_ORACLE_DEPTH: usize = 4;

pub(super) fn run_engagement_oracle_property(fixture: &NetworkFixture) -> TestCaseResult {
    let (network, start, end) = (&fixture.network, fixture.start, fixture.end);
    let mut previous: Option<u64> = None;

    for max_depth in 0..=MAX_ORACLE_DEPTH {
        let found = highest_engagement_path(network, start, end, max_depth).map_err(fail)?;
        let expected = exhaustive_best_engagement(network, start, end, max_depth);

        match expected {
            None => prop_assert!(
                found.is_empty(),
                "search found {:?} at depth {} but no path exists ({:?})",
                found,
                max_depth,
                fixture.topology
            ),
            Some(score) => {
                prop_assert_eq!(
                    found.score(),
                    score,
                    "depth {} ({:?})",
                    max_depth,
                    fixture.topology
                );
                validate_follow_path(network, found.path(), start, end)?;
                prop_assert!(found.hops() <= max_depth);
                let summed: u64 = found.path().iter().map(|id| engagement(network, *id)).sum();
                prop_assert_eq!(summed, found.score());
            }
        }

        if let Some(before) = previous {
            prop_assert!(
                !found.is_empty() && found.score() >= before,
                "depth {} lost ground: {:?} after score {}",
                max_depth,
                found,
                before
            );
        }
        if !found.is_empty() {
            previous = Some(found.score());
        }
    }
    Ok(())
}
