//! Checkconfig - merge policy and plugin consistency checks
//!
//! Validates that the merge policy (tide queries) and the label-managing
//! plugins agree on which orgs and repos they govern, along with a few
//! independent job and query sanity checks. All findings from a run are
//! collected into a single aggregate.

pub mod checks;
pub mod config;
pub mod error;
pub mod report;
pub mod tide;

pub use checks::run_checks;
pub use config::{load_input, CheckOptions, ConfigError, InputBundle, LoadedInput, Warning};
pub use error::{Aggregate, Inconsistency, InconsistencyKind, ValidationError};
pub use report::CheckReport;
pub use tide::{LabelRelation, RuleBinding, RuleRegistry};

pub use checkconfig_model as model;
pub use checkconfig_scope::OrgRepoSet;
