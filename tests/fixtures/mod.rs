//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use checkconfig::model::TideQuery;

/// Path to a snapshot under tests/fixtures/snapshots
pub fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/snapshots")
        .join(name)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A query over whole orgs.
pub fn org_query(orgs: &[&str], excluded: &[&str], labels: &[&str], missing: &[&str]) -> TideQuery {
    TideQuery {
        orgs: strings(orgs),
        excluded_repos: strings(excluded),
        labels: strings(labels),
        missing_labels: strings(missing),
        ..Default::default()
    }
}

/// A query over individual repos.
pub fn repo_query(repos: &[&str], labels: &[&str], missing: &[&str]) -> TideQuery {
    TideQuery {
        repos: strings(repos),
        labels: strings(labels),
        missing_labels: strings(missing),
        ..Default::default()
    }
}
