//! Shared test utilities for `prim-core`.

use prim_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

/// Builds a proptest configuration from the shared run profile so every suite
/// honours `PRIM_PBT_CASES` and `PRIM_PBT_FORK`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
