//! Org/repo scope sets.
//!
//! An [`OrgRepoSet`] describes which orgs and repos a rule governs: whole
//! orgs (minus per-org exceptions) plus individually listed repos. The set
//! operations here are what the consistency checks use to compare the
//! merge policy against plugin enablement.

mod name;
mod set;

pub use name::{org_of, RepoName};
pub use set::{OrgExceptions, OrgRepoSet};
