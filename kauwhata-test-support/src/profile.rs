//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; the
//! environment can raise case counts in CI or enable forking when a property
//! aborts the process.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const CASES_ENV_KEY: &str = "KAUWHATA_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const FORK_ENV_KEY: &str = "KAUWHATA_PBT_FORK";

/// Reason an environment override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The value was not a number.
    #[error("expected a positive integer: {0}")]
    NotANumber(String),
    /// Zero cases would silently disable the property.
    #[error("cases must be greater than zero")]
    ZeroCases,
    /// The value was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off")]
    NotABool,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the supplied
    /// defaults when a variable is absent or malformed.
    ///
    /// # Examples
    /// ```
    /// use kauwhata_test_support::profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, default_fork, parse_bool),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, raw = %raw, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
