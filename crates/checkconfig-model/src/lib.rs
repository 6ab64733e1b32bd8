//! Checkconfig Model Types
//!
//! The already-resolved configuration the checks run over: merge-policy
//! (tide) queries, plugin enablement and job lists.

pub mod jobs;
pub mod plugins;
pub mod tide;

pub use jobs::{JobAgent, JobBase, JobConfig, JobKind};
pub use plugins::{ExternalPlugin, PluginConfig};
pub use tide::{TideConfig, TideQueries, TideQuery};
