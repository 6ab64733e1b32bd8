//! The org/repo scope set and its set operations.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::name::org_of;

/// Org name -> repos (`org/repo`) carved out of that org's coverage.
pub type OrgExceptions = BTreeMap<String, BTreeSet<String>>;

/// Every org and repo governed by some rule.
///
/// An org entry with an empty exception set covers the entire org. Repos in
/// `repos` are covered individually. Values are never mutated once built;
/// [`difference`](Self::difference) and [`intersection`](Self::intersection)
/// return fresh sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRepoSet {
    /// Orgs covered wholesale, with their exceptions.
    #[serde(default)]
    org_exceptions: OrgExceptions,

    /// Repos covered individually.
    #[serde(default)]
    repos: BTreeSet<String>,
}

impl OrgRepoSet {
    /// Create a set from an org-exception map and a repo set.
    pub fn new(org_exceptions: OrgExceptions, repos: BTreeSet<String>) -> Self {
        Self {
            org_exceptions,
            repos,
        }
    }

    /// Create a set from org names (no exceptions) and repo names.
    pub fn from_orgs_and_repos<O, R>(orgs: O, repos: R) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            org_exceptions: orgs
                .into_iter()
                .map(|org| (org.into(), BTreeSet::new()))
                .collect(),
            repos: repos.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a wholesale org entry with the given exceptions.
    pub fn with_org<I, S>(mut self, org: impl Into<String>, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.org_exceptions
            .insert(org.into(), exceptions.into_iter().map(Into::into).collect());
        self
    }

    /// Add an individually covered repo.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repos.insert(repo.into());
        self
    }

    /// Orgs covered wholesale, with their exceptions.
    pub fn org_exceptions(&self) -> &OrgExceptions {
        &self.org_exceptions
    }

    /// Repos covered individually.
    pub fn repos(&self) -> &BTreeSet<String> {
        &self.repos
    }

    /// True when the set governs nothing.
    pub fn is_empty(&self) -> bool {
        self.org_exceptions.is_empty() && self.repos.is_empty()
    }

    /// Whether `repo` is governed, either individually or through an org
    /// entry that does not except it.
    pub fn covers(&self, repo: &str) -> bool {
        self.repos.contains(repo) || self.org_covers(repo)
    }

    /// Whether `repo` is governed through an org entry alone.
    fn org_covers(&self, repo: &str) -> bool {
        match org_of(repo).and_then(|org| self.org_exceptions.get(org)) {
            Some(excepts) => !excepts.contains(repo),
            None => false,
        }
    }

    /// Items governed by `self` but not by `other`.
    pub fn difference(&self, other: &OrgRepoSet) -> OrgRepoSet {
        let mut res = OrgRepoSet {
            org_exceptions: OrgExceptions::new(),
            repos: self.repos.clone(),
        };

        for (org, excepts1) in &self.org_exceptions {
            match other.org_exceptions.get(org) {
                Some(excepts2) => {
                    // Repos the other side carves out of the org are still
                    // ours; the org entry can't re-add them, so list them.
                    res.repos.extend(
                        excepts2
                            .difference(excepts1)
                            .filter(|repo| org_of(repo) == Some(org.as_str()))
                            .cloned(),
                    );
                }
                None => {
                    let mut excepts = excepts1.clone();
                    excepts.extend(
                        other
                            .repos
                            .iter()
                            .filter(|repo| org_of(repo) == Some(org.as_str()))
                            .cloned(),
                    );
                    res.org_exceptions.insert(org.clone(), excepts);
                }
            }
        }

        res.repos.retain(|repo| !other.covers(repo));
        res
    }

    /// Items governed by both `self` and `other`.
    pub fn intersection(&self, other: &OrgRepoSet) -> OrgRepoSet {
        let mut res = OrgRepoSet::default();

        for (org, excepts1) in &self.org_exceptions {
            if let Some(excepts2) = other.org_exceptions.get(org) {
                res.org_exceptions
                    .insert(org.clone(), excepts1.union(excepts2).cloned().collect());
            }
        }

        // An individually listed repo on either side survives when the
        // opposite side covers it too, unless a common org entry already
        // covers it.
        let candidates: BTreeSet<&String> = self.repos.iter().chain(other.repos.iter()).collect();
        for repo in candidates {
            if self.covers(repo) && other.covers(repo) && !res.org_covers(repo) {
                res.repos.insert(repo.clone());
            }
        }
        res
    }

    /// Render the set as sorted, human-readable lines.
    pub fn items(&self) -> Vec<String> {
        let mut items = Vec::with_capacity(self.org_exceptions.len() + self.repos.len());
        for (org, excepts) in &self.org_exceptions {
            if excepts.is_empty() {
                items.push(format!("org: {}", org));
            } else {
                let excepts: Vec<&str> = excepts.iter().map(String::as_str).collect();
                items.push(format!("org: {} without repo(s) {}", org, excepts.join(", ")));
            }
        }
        for repo in &self.repos {
            items.push(format!("repo: {}", repo));
        }
        items
    }
}
