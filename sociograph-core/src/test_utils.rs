//! Shared test utilities for `sociograph-core`.

use proptest::test_runner::Config as ProptestConfig;
use sociograph_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared environment profile so
/// every suite honours `SOCIOGRAPH_PBT_CASES`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        max_shrink_iters: profile.max_shrink_iters(),
        ..ProptestConfig::default()
    }
}
