//! Merge-policy (tide) query types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Merge-policy section of the resolved configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TideConfig {
    /// Queries selecting mergeable pull requests.
    #[serde(default)]
    pub queries: TideQueries,
}

/// One merge query: a label filter scoped to orgs and repos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TideQuery {
    /// Orgs the query applies to wholesale.
    #[serde(default)]
    pub orgs: Vec<String>,

    /// Repos (`org/repo`) the query applies to individually.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Repos carved out of the query's orgs.
    #[serde(default, alias = "excludedRepos")]
    pub excluded_repos: Vec<String>,

    /// Labels a pull request must carry.
    #[serde(default)]
    pub labels: Vec<String>,

    /// Labels a pull request must not carry.
    #[serde(default, alias = "missingLabels")]
    pub missing_labels: Vec<String>,
}

impl TideQuery {
    /// Whether the query requires `label`.
    pub fn requires(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Whether the query forbids `label`.
    pub fn forbids(&self, label: &str) -> bool {
        self.missing_labels.iter().any(|l| l == label)
    }
}

/// An ordered list of merge queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TideQueries(pub Vec<TideQuery>);

impl TideQueries {
    pub fn iter(&self) -> std::slice::Iter<'_, TideQuery> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The combined scope of every query.
    ///
    /// Returns the orgs covered wholesale with their exceptions, and the
    /// repos covered individually. An org named by several queries keeps
    /// only the exceptions every one of them shares, and a repo listed
    /// individually by any query is never an exception.
    pub fn org_exceptions_and_repos(&self) -> (BTreeMap<String, BTreeSet<String>>, BTreeSet<String>) {
        let mut orgs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for query in &self.0 {
            for org in &query.orgs {
                let applicable = repos_in_org(org, &query.excluded_repos);
                match orgs.get_mut(org) {
                    Some(excepts) => excepts.retain(|repo| applicable.contains(repo)),
                    None => {
                        orgs.insert(org.clone(), applicable);
                    }
                }
            }
        }

        let repos: BTreeSet<String> = self
            .0
            .iter()
            .flat_map(|query| query.repos.iter().cloned())
            .collect();

        for excepts in orgs.values_mut() {
            excepts.retain(|repo| !repos.contains(repo));
        }
        (orgs, repos)
    }
}

impl FromIterator<TideQuery> for TideQueries {
    fn from_iter<I: IntoIterator<Item = TideQuery>>(iter: I) -> Self {
        TideQueries(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TideQueries {
    type Item = &'a TideQuery;
    type IntoIter = std::slice::Iter<'a, TideQuery>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn repos_in_org(org: &str, repos: &[String]) -> BTreeSet<String> {
    repos
        .iter()
        .filter(|repo| repo.split_once('/').map(|(o, _)| o) == Some(org))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_label_predicates() {
        let query = TideQuery {
            labels: strings(&["lgtm", "approved"]),
            missing_labels: strings(&["do-not-merge/hold"]),
            ..Default::default()
        };
        assert!(query.requires("lgtm"));
        assert!(!query.requires("do-not-merge/hold"));
        assert!(query.forbids("do-not-merge/hold"));
        assert!(!query.forbids("lgtm"));
    }

    #[test]
    fn test_exceptions_only_keep_repos_in_org() {
        let queries: TideQueries = vec![TideQuery {
            orgs: strings(&["kubernetes"]),
            excluded_repos: strings(&["kubernetes/community", "other/repo"]),
            ..Default::default()
        }]
        .into_iter()
        .collect();

        let (orgs, repos) = queries.org_exceptions_and_repos();
        assert_eq!(orgs.get("kubernetes"), Some(&set(&["kubernetes/community"])));
        assert!(repos.is_empty());
    }

    #[test]
    fn test_shared_org_intersects_exceptions() {
        let queries: TideQueries = vec![
            TideQuery {
                orgs: strings(&["org"]),
                excluded_repos: strings(&["org/a", "org/b"]),
                ..Default::default()
            },
            TideQuery {
                orgs: strings(&["org"]),
                excluded_repos: strings(&["org/b", "org/c"]),
                ..Default::default()
            },
        ]
        .into_iter()
        .collect();

        let (orgs, _) = queries.org_exceptions_and_repos();
        assert_eq!(orgs.get("org"), Some(&set(&["org/b"])));
    }

    #[test]
    fn test_listed_repo_is_never_an_exception() {
        let queries: TideQueries = vec![
            TideQuery {
                orgs: strings(&["org"]),
                excluded_repos: strings(&["org/special"]),
                ..Default::default()
            },
            TideQuery {
                repos: strings(&["org/special", "solo/repo"]),
                ..Default::default()
            },
        ]
        .into_iter()
        .collect();

        let (orgs, repos) = queries.org_exceptions_and_repos();
        assert_eq!(orgs.get("org"), Some(&BTreeSet::new()));
        assert_eq!(repos, set(&["org/special", "solo/repo"]));
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{
            "orgs": ["kubernetes"],
            "excludedRepos": ["kubernetes/community"],
            "labels": ["lgtm"],
            "missingLabels": ["needs-rebase"]
        }"#;
        let query: TideQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.excluded_repos, strings(&["kubernetes/community"]));
        assert_eq!(query.missing_labels, strings(&["needs-rebase"]));
        assert!(query.repos.is_empty());
    }

    #[test]
    fn test_deserialize_queries_from_toml() {
        let input = r#"
[[queries]]
repos = ["org/a"]
labels = ["lgtm"]

[[queries]]
orgs = ["org"]
missing_labels = ["do-not-merge/hold"]
"#;
        let config: TideConfig = toml::from_str(input).unwrap();
        assert_eq!(config.queries.len(), 2);
        assert!(config.queries.0[1].forbids("do-not-merge/hold"));
    }
}
