//! Merge-policy vs. plugin enablement consistency checks.
//!
//! For a binding, the tide subset is where the merge policy honors the
//! label, the plugin subset is where the plugin is enabled, and the tide
//! superset is everything under merge-policy control at all. Two rules hold:
//!
//! - every item in the tide subset must be in the plugin subset;
//! - every item of the plugin subset inside the tide superset must be in
//!   the tide subset.

use checkconfig_model::{PluginConfig, TideConfig};
use checkconfig_scope::OrgRepoSet;
use tracing::debug;

use super::extract::{plugin_subset, tide_subset, tide_superset};
use super::rules::{RuleBinding, RuleRegistry};
use crate::error::{Aggregate, Inconsistency, InconsistencyKind, ValidationError};

/// Compare one binding's scopes and report both kinds of mismatch.
pub fn ensure_valid_configuration(
    binding: &RuleBinding,
    tide_subset: &OrgRepoSet,
    tide_superset: &OrgRepoSet,
    plugin_subset: &OrgRepoSet,
) -> Aggregate {
    let not_enabled = tide_subset.difference(plugin_subset).items();
    let not_required = plugin_subset
        .intersection(tide_superset)
        .difference(tide_subset)
        .items();

    let mut errs = Aggregate::new();
    for (kind, items) in [
        (InconsistencyKind::NotEnabled, not_enabled),
        (InconsistencyKind::NotRequired, not_required),
    ] {
        if items.is_empty() {
            continue;
        }
        errs.push(ValidationError::ConfigInconsistency(Inconsistency {
            kind,
            plugin: binding.plugin.clone(),
            label: binding.label.clone(),
            relation: binding.relation,
            items,
        }));
    }
    errs
}

/// Run the consistency check for every binding in the registry.
pub fn validate_tide_requirements(
    tide: &TideConfig,
    plugins: &PluginConfig,
    registry: &RuleRegistry,
) -> Aggregate {
    let superset = tide_superset(&tide.queries);

    let mut errs = Aggregate::new();
    for binding in registry {
        let subset = tide_subset(&tide.queries, &binding.label, binding.relation);
        let enabled = plugin_subset(plugins, &binding.plugin);
        let found = ensure_valid_configuration(binding, &subset, &superset, &enabled);
        debug!(
            plugin = %binding.plugin,
            label = %binding.label,
            findings = found.len(),
            "checked binding"
        );
        errs.extend(found);
    }
    errs
}
