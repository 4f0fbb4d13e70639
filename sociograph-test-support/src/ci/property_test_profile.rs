//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own default so a single
//! variable can scale every property suite up in CI or down locally.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const SOCIOGRAPH_PBT_CASES_ENV_KEY: &str = "SOCIOGRAPH_PBT_CASES";
/// Environment variable overriding the maximum shrink iterations.
pub const SOCIOGRAPH_PBT_SHRINK_ENV_KEY: &str = "SOCIOGRAPH_PBT_MAX_SHRINK_ITERS";

/// Case count and shrink budget for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    max_shrink_iters: u32,
}

impl ProptestRunProfile {
    /// Default shrink budget when no override is set.
    pub const DEFAULT_MAX_SHRINK_ITERS: u32 = 1024;

    /// Loads a profile, falling back to `default_cases` and
    /// [`Self::DEFAULT_MAX_SHRINK_ITERS`] when the variables are unset or
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use sociograph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self {
            cases: positive_override(SOCIOGRAPH_PBT_CASES_ENV_KEY, default_cases),
            max_shrink_iters: positive_override(
                SOCIOGRAPH_PBT_SHRINK_ENV_KEY,
                Self::DEFAULT_MAX_SHRINK_ITERS,
            ),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Upper bound on shrink iterations after a failure.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_shrink_iters(&self) -> u32 { self.max_shrink_iters }
}

fn positive_override(key: &'static str, default: u32) -> u32 {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match parse_positive(&raw) {
        Ok(value) => value,
        Err(reason) => {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring invalid property-test override",
            );
            default
        }
    }
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}
