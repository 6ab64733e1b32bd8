//! Check toggles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// A named, independently toggleable check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Warning {
    /// Merge policy and plugin enablement disagree.
    MismatchedTide,
    /// Cluster jobs without pod utilities.
    NonDecoratedJobs,
    /// Cluster job names over the label length limit.
    LongJobNames,
    /// Queries requiring lgtm while forbidding needs-ok-to-test.
    NeedsOkToTest,
}

impl Warning {
    pub const ALL: [Warning; 4] = [
        Warning::MismatchedTide,
        Warning::NonDecoratedJobs,
        Warning::LongJobNames,
        Warning::NeedsOkToTest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Warning::MismatchedTide => "mismatched-tide",
            Warning::NonDecoratedJobs => "non-decorated-jobs",
            Warning::LongJobNames => "long-job-names",
            Warning::NeedsOkToTest => "needs-ok-to-test",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Warning {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Warning::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownWarning {
                name: s.to_string(),
                valid: Warning::ALL.iter().map(|w| w.as_str()).collect::<Vec<_>>().join(", "),
            })
    }
}

/// Which checks to run and how to treat advisory findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub warnings: BTreeSet<Warning>,
    /// Treat advisory findings as failures.
    pub strict: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            warnings: Warning::ALL.into_iter().collect(),
            strict: false,
        }
    }
}

impl CheckOptions {
    /// Build options from warning names. No names enables every check.
    pub fn from_names<S: AsRef<str>>(names: &[S], strict: bool) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Ok(Self {
                strict,
                ..Default::default()
            });
        }
        let warnings = names
            .iter()
            .map(|name| name.as_ref().trim().parse())
            .collect::<Result<BTreeSet<Warning>, _>>()?;
        Ok(Self { warnings, strict })
    }

    pub fn enabled(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }
}
