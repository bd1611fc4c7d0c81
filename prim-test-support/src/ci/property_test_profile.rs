//! Property-test run profile parsed from the environment.
//!
//! Every proptest suite in the workspace reads its case count and fork flag
//! through [`ProptestRunProfile`] so CI can scale all suites with one knob.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const CASES_ENV_KEY: &str = "PRIM_PBT_CASES";
/// Environment variable enabling forked proptest execution.
pub const FORK_ENV_KEY: &str = "PRIM_PBT_FORK";

/// Case count and fork flag for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, keeping the supplied defaults for unset or invalid
    /// variables. Invalid values are reported with `tracing::warn!`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prim_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_env_or(CASES_ENV_KEY, default_cases, parse_positive),
            fork: read_env_or(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

/// Reads a positive count from `key`, falling back to `default`.
///
/// Used by suites that repeat a computation a configurable number of times.
#[must_use]
pub fn read_count(key: &'static str, default: u32) -> u32 {
    read_env_or(key, default, parse_positive)
}

fn read_env_or<T: Copy>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_positive(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("value must be greater than zero".to_owned()),
        Ok(value) => Ok(value),
        Err(err) => Err(format!("not an unsigned integer: {err}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean flag")),
    }
}
