//! Plugin enablement types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plugin enablement, keyed by org (`org`) or repo (`org/repo`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// In-process plugins enabled per org or repo.
    #[serde(default)]
    pub plugins: BTreeMap<String, Vec<String>>,

    /// External plugins enabled per org or repo.
    #[serde(default, alias = "external_plugins", rename = "external-plugins")]
    pub external_plugins: BTreeMap<String, Vec<ExternalPlugin>>,
}

/// An out-of-process plugin endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalPlugin {
    pub name: String,

    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub events: Vec<String>,
}

impl PluginConfig {
    /// The orgs and repos where `plugin` is enabled, either as an
    /// in-process or as an external plugin.
    ///
    /// Keys containing a `/` are repos, all others are orgs. Both lists are
    /// sorted and free of duplicates.
    pub fn enabled_repos_for_plugin(&self, plugin: &str) -> (Vec<String>, Vec<String>) {
        let internal = self
            .plugins
            .iter()
            .filter(|(_, names)| names.iter().any(|name| name == plugin))
            .map(|(key, _)| key);
        let external = self
            .external_plugins
            .iter()
            .filter(|(_, endpoints)| endpoints.iter().any(|ep| ep.name == plugin))
            .map(|(key, _)| key);

        let mut orgs = Vec::new();
        let mut repos = Vec::new();
        for key in internal.chain(external) {
            if key.contains('/') {
                repos.push(key.clone());
            } else {
                orgs.push(key.clone());
            }
        }
        orgs.sort();
        orgs.dedup();
        repos.sort();
        repos.dedup();
        (orgs, repos)
    }
}
