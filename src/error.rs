//! Validation findings and their aggregate.
//!
//! Every check accumulates findings instead of stopping at the first one,
//! so a single pass reports everything wrong with the configuration.

use std::fmt;

use checkconfig_model::JobKind;

use crate::tide::LabelRelation;

/// Longest job name the orchestration label scheme accepts.
pub const JOB_NAME_MAX_LEN: usize = 63;

/// Which direction a merge-policy/plugin mismatch goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InconsistencyKind {
    /// The merge policy honors the label but the plugin is not enabled.
    NotEnabled,
    /// The plugin is enabled but the merge policy ignores its label.
    NotRequired,
}

/// A mismatch between merge policy and plugin enablement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub kind: InconsistencyKind,
    pub plugin: String,
    pub label: String,
    pub relation: LabelRelation,
    /// Offending orgs and repos, as rendered by `OrgRepoSet::items`.
    pub items: Vec<String>,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = self.relation.verb();
        let items = self.items.join(", ");
        match self.kind {
            InconsistencyKind::NotEnabled => write!(
                f,
                "the following orgs or repos {} the {} label for merging but do not enable the {} plugin: [{}]",
                verb, self.label, self.plugin, items
            ),
            InconsistencyKind::NotRequired => write!(
                f,
                "the following orgs or repos enable the {} plugin but do not {} the {} label for merging: [{}]",
                self.plugin, verb, self.label, items
            ),
        }
    }
}

/// A single configuration finding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    ConfigInconsistency(Inconsistency),

    #[error(
        "name of {kind} job {name:?}{} too long (should be at most {} characters)",
        repo_clause(.repo),
        JOB_NAME_MAX_LEN
    )]
    PolicyNamingViolation {
        kind: JobKind,
        name: String,
        repo: Option<String>,
    },

    #[error(
        "the following jobs use the kubernetes provider but do not use the pod utilities: [{}]",
        .jobs.join(", ")
    )]
    PolicyDecorationViolation { jobs: Vec<String> },

    #[error(
        "the tide query at position {position} forbids the {forbidden:?} label and requires the {required:?} label, which is not recommended"
    )]
    PolicyContradiction {
        position: usize,
        required: String,
        forbidden: String,
    },
}

fn repo_clause(repo: &Option<String>) -> String {
    match repo {
        Some(repo) => format!(" (for repo {:?})", repo),
        None => String::new(),
    }
}

impl ValidationError {
    /// Machine-readable category.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ConfigInconsistency(_) => "CONFIG_INCONSISTENCY",
            ValidationError::PolicyNamingViolation { .. } => "POLICY_NAMING_VIOLATION",
            ValidationError::PolicyDecorationViolation { .. } => "POLICY_DECORATION_VIOLATION",
            ValidationError::PolicyContradiction { .. } => "POLICY_CONTRADICTION",
        }
    }

    /// Advisory findings only fail a run in strict mode.
    pub fn is_advisory(&self) -> bool {
        matches!(self, ValidationError::PolicyContradiction { .. })
    }
}

/// An ordered collection of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    errors: Vec<ValidationError>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: Aggregate) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// One message per finding.
    pub fn strings(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Machine-readable codes, one per finding.
    pub fn codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.code()).collect()
    }

    /// Whether the findings should fail the run.
    pub fn is_failure(&self, strict: bool) -> bool {
        self.errors.iter().any(|e| strict || !e.is_advisory())
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.strings().join("\n"))
    }
}

impl std::error::Error for Aggregate {}

impl From<ValidationError> for Aggregate {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for Aggregate {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Aggregate {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contradiction() -> ValidationError {
        ValidationError::PolicyContradiction {
            position: 2,
            required: "lgtm".to_string(),
            forbidden: "needs-ok-to-test".to_string(),
        }
    }

    #[test]
    fn test_not_enabled_message() {
        let err = ValidationError::ConfigInconsistency(Inconsistency {
            kind: InconsistencyKind::NotEnabled,
            plugin: "hold".to_string(),
            label: "do-not-merge/hold".to_string(),
            relation: LabelRelation::Forbids,
            items: vec!["org: x".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "the following orgs or repos forbid the do-not-merge/hold label for merging but do not enable the hold plugin: [org: x]"
        );
        assert_eq!(err.code(), "CONFIG_INCONSISTENCY");
        assert!(!err.is_advisory());
    }

    #[test]
    fn test_not_required_message() {
        let err = ValidationError::ConfigInconsistency(Inconsistency {
            kind: InconsistencyKind::NotRequired,
            plugin: "lgtm".to_string(),
            label: "lgtm".to_string(),
            relation: LabelRelation::Requires,
            items: vec!["repo: org/a".to_string(), "repo: org/b".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "the following orgs or repos enable the lgtm plugin but do not require the lgtm label for merging: [repo: org/a, repo: org/b]"
        );
    }

    #[test]
    fn test_naming_message_with_and_without_repo() {
        let presubmit = ValidationError::PolicyNamingViolation {
            kind: JobKind::Presubmit,
            name: "pull-x".to_string(),
            repo: Some("org/repo".to_string()),
        };
        assert_eq!(
            presubmit.to_string(),
            "name of Presubmit job \"pull-x\" (for repo \"org/repo\") too long (should be at most 63 characters)"
        );

        let periodic = ValidationError::PolicyNamingViolation {
            kind: JobKind::Periodic,
            name: "ci-x".to_string(),
            repo: None,
        };
        assert_eq!(
            periodic.to_string(),
            "name of Periodic job \"ci-x\" too long (should be at most 63 characters)"
        );
    }

    #[test]
    fn test_decoration_message() {
        let err = ValidationError::PolicyDecorationViolation {
            jobs: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "the following jobs use the kubernetes provider but do not use the pod utilities: [a, b]"
        );
    }

    #[test]
    fn test_contradiction_is_advisory() {
        let err = contradiction();
        assert!(err.is_advisory());
        assert!(err.to_string().starts_with(
            "the tide query at position 2 forbids the \"needs-ok-to-test\" label and requires the \"lgtm\" label"
        ));
    }

    #[test]
    fn test_aggregate_display_joins_lines() {
        let mut agg = Aggregate::new();
        agg.push(ValidationError::PolicyDecorationViolation {
            jobs: vec!["a".to_string()],
        });
        agg.push(contradiction());
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.to_string().lines().count(), 2);
        assert_eq!(agg.codes(), vec!["POLICY_DECORATION_VIOLATION", "POLICY_CONTRADICTION"]);
    }

    #[test]
    fn test_aggregate_failure_respects_strict() {
        let advisory: Aggregate = contradiction().into();
        assert!(!advisory.is_failure(false));
        assert!(advisory.is_failure(true));
        assert!(!Aggregate::new().is_failure(true));

        let hard: Aggregate = ValidationError::PolicyDecorationViolation {
            jobs: vec!["a".to_string()],
        }
        .into();
        assert!(hard.is_failure(false));
    }
}
