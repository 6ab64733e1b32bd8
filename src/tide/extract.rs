//! Building scope sets from merge queries and plugin enablement.

use checkconfig_model::{PluginConfig, TideQueries};
use checkconfig_scope::OrgRepoSet;

use super::rules::LabelRelation;

/// Scope where the merge policy honors `label` under `relation`.
pub fn tide_subset(queries: &TideQueries, label: &str, relation: LabelRelation) -> OrgRepoSet {
    let matching: TideQueries = queries
        .iter()
        .filter(|query| relation.matches(label, query))
        .cloned()
        .collect();
    tide_superset(&matching)
}

/// Scope of every query, regardless of labels.
pub fn tide_superset(queries: &TideQueries) -> OrgRepoSet {
    let (orgs, repos) = queries.org_exceptions_and_repos();
    OrgRepoSet::new(orgs, repos)
}

/// Scope where `plugin` is enabled.
///
/// Org-level enablement has no exceptions.
pub fn plugin_subset(plugins: &PluginConfig, plugin: &str) -> OrgRepoSet {
    let (orgs, repos) = plugins.enabled_repos_for_plugin(plugin);
    OrgRepoSet::from_orgs_and_repos(orgs, repos)
}
