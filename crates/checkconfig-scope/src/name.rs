//! Repository name helpers.

/// A fully-qualified repository name split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoName<'a> {
    pub org: &'a str,
    pub repo: &'a str,
}

impl<'a> RepoName<'a> {
    /// Split `org/repo` on the first separator.
    ///
    /// Names without a separator are opaque and return `None`.
    pub fn parse(full_name: &'a str) -> Option<Self> {
        full_name
            .split_once('/')
            .map(|(org, repo)| RepoName { org, repo })
    }
}

/// The org part of an `org/repo` name, if it has one.
pub fn org_of(full_name: &str) -> Option<&str> {
    RepoName::parse(full_name).map(|name| name.org)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_org_repo() {
        let name = RepoName::parse("kubernetes/test-infra").unwrap();
        assert_eq!(name.org, "kubernetes");
        assert_eq!(name.repo, "test-infra");
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        let name = RepoName::parse("org/repo/extra").unwrap();
        assert_eq!(name.org, "org");
        assert_eq!(name.repo, "repo/extra");
    }

    #[test]
    fn test_opaque_name() {
        assert!(RepoName::parse("kubernetes").is_none());
        assert_eq!(org_of("kubernetes"), None);
        assert_eq!(org_of("kubernetes/kops"), Some("kubernetes"));
    }
}
