//! Merge policy (tide) and plugin consistency.
//!
//! Builds scope sets from the merge queries and from plugin enablement, then
//! compares them for every registered (plugin, label, relation) binding.

mod check;
mod extract;
mod rules;

pub use check::{ensure_valid_configuration, validate_tide_requirements};
pub use extract::{plugin_subset, tide_subset, tide_superset};
pub use rules::{
    LabelRelation, RuleBinding, RuleRegistry, APPROVED_LABEL, BLOCKED_PATHS_LABEL,
    CHERRY_PICK_UNAPPROVED_LABEL, HOLD_LABEL, INVALID_OWNERS_LABEL, LGTM_LABEL,
    NEEDS_OK_TO_TEST_LABEL, NEEDS_REBASE_LABEL, RELEASE_NOTE_NEEDED_LABEL, WIP_LABEL,
};
