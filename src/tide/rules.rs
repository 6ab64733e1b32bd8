//! The registry of (plugin, label, relation) bindings.
//!
//! Each binding pairs a merge-policy label condition with the plugin that
//! manages the label. The registry is plain data handed to the checker.

use checkconfig_model::TideQuery;
use serde::{Deserialize, Serialize};

pub const LGTM_LABEL: &str = "lgtm";
pub const APPROVED_LABEL: &str = "approved";
pub const HOLD_LABEL: &str = "do-not-merge/hold";
pub const WIP_LABEL: &str = "do-not-merge/work-in-progress";
pub const INVALID_OWNERS_LABEL: &str = "do-not-merge/invalid-owners-file";
pub const RELEASE_NOTE_NEEDED_LABEL: &str = "do-not-merge/release-note-label-needed";
pub const CHERRY_PICK_UNAPPROVED_LABEL: &str = "do-not-merge/cherry-pick-not-approved";
pub const BLOCKED_PATHS_LABEL: &str = "do-not-merge/blocked-paths";
pub const NEEDS_REBASE_LABEL: &str = "needs-rebase";
pub const NEEDS_OK_TO_TEST_LABEL: &str = "needs-ok-to-test";

/// Built-in bindings: (plugin, label, relation).
const DEFAULT_BINDINGS: &[(&str, &str, LabelRelation)] = &[
    ("lgtm", LGTM_LABEL, LabelRelation::Requires),
    ("approve", APPROVED_LABEL, LabelRelation::Requires),
    ("hold", HOLD_LABEL, LabelRelation::Forbids),
    ("wip", WIP_LABEL, LabelRelation::Forbids),
    ("verify-owners", INVALID_OWNERS_LABEL, LabelRelation::Forbids),
    ("release-note", RELEASE_NOTE_NEEDED_LABEL, LabelRelation::Forbids),
    (
        "cherry-pick-unapproved",
        CHERRY_PICK_UNAPPROVED_LABEL,
        LabelRelation::Forbids,
    ),
    ("blockade", BLOCKED_PATHS_LABEL, LabelRelation::Forbids),
    ("needs-rebase", NEEDS_REBASE_LABEL, LabelRelation::Forbids),
];

/// How a merge query honors a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelRelation {
    /// The query lists the label under `labels`.
    Requires,
    /// The query lists the label under `missing_labels`.
    Forbids,
}

impl LabelRelation {
    /// The query's label list this relation inspects.
    pub fn label_set<'q>(&self, query: &'q TideQuery) -> &'q [String] {
        match self {
            LabelRelation::Requires => &query.labels,
            LabelRelation::Forbids => &query.missing_labels,
        }
    }

    /// Whether `query` honors `label` under this relation.
    pub fn matches(&self, label: &str, query: &TideQuery) -> bool {
        self.label_set(query).iter().any(|l| l == label)
    }

    /// Verb used in messages.
    pub fn verb(&self) -> &'static str {
        match self {
            LabelRelation::Requires => "require",
            LabelRelation::Forbids => "forbid",
        }
    }
}

/// A plugin paired with the label it manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBinding {
    pub plugin: String,
    pub label: String,
    pub relation: LabelRelation,
}

impl RuleBinding {
    pub fn new(plugin: impl Into<String>, label: impl Into<String>, relation: LabelRelation) -> Self {
        Self {
            plugin: plugin.into(),
            label: label.into(),
            relation,
        }
    }
}

/// Ordered set of bindings to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRegistry {
    bindings: Vec<RuleBinding>,
}

impl RuleRegistry {
    pub fn new(bindings: Vec<RuleBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[RuleBinding] {
        &self.bindings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleBinding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new(
            DEFAULT_BINDINGS
                .iter()
                .map(|(plugin, label, relation)| RuleBinding::new(*plugin, *label, *relation))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a RuleRegistry {
    type Item = &'a RuleBinding;
    type IntoIter = std::slice::Iter<'a, RuleBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
