//! Job definition types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Agent that executes a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobAgent {
    /// Runs as a pod on the orchestration cluster.
    #[default]
    Kubernetes,
    Jenkins,
    KnativeBuild,
    TektonPipeline,
    /// Any agent this tool does not know about.
    #[serde(other)]
    Other,
}

impl JobAgent {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobAgent::Kubernetes => "kubernetes",
            JobAgent::Jenkins => "jenkins",
            JobAgent::KnativeBuild => "knative-build",
            JobAgent::TektonPipeline => "tekton-pipeline",
            JobAgent::Other => "other",
        }
    }
}

impl fmt::Display for JobAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields shared by every job type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBase {
    pub name: String,

    #[serde(default)]
    pub agent: JobAgent,

    /// Whether the job opts into the pod utilities.
    #[serde(default)]
    pub decorate: bool,
}

impl JobBase {
    pub fn new(name: impl Into<String>, agent: JobAgent, decorate: bool) -> Self {
        Self {
            name: name.into(),
            agent,
            decorate,
        }
    }
}

/// When a job runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Presubmit,
    Postsubmit,
    Periodic,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobKind::Presubmit => "Presubmit",
            JobKind::Postsubmit => "Postsubmit",
            JobKind::Periodic => "Periodic",
        };
        write!(f, "{}", name)
    }
}

/// All configured jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobConfig {
    /// Presubmit jobs keyed by repo.
    #[serde(default)]
    pub presubmits: BTreeMap<String, Vec<JobBase>>,

    /// Postsubmit jobs keyed by repo.
    #[serde(default)]
    pub postsubmits: BTreeMap<String, Vec<JobBase>>,

    #[serde(default)]
    pub periodics: Vec<JobBase>,
}

impl JobConfig {
    /// Every job with its kind and, for repo-bound jobs, its repo.
    ///
    /// Presubmits come first, then postsubmits, then periodics.
    pub fn all_jobs(&self) -> impl Iterator<Item = (JobKind, Option<&str>, &JobBase)> {
        let presubmits = self.presubmits.iter().flat_map(|(repo, jobs)| {
            jobs.iter()
                .map(move |job| (JobKind::Presubmit, Some(repo.as_str()), job))
        });
        let postsubmits = self.postsubmits.iter().flat_map(|(repo, jobs)| {
            jobs.iter()
                .map(move |job| (JobKind::Postsubmit, Some(repo.as_str()), job))
        });
        let periodics = self
            .periodics
            .iter()
            .map(|job| (JobKind::Periodic, None, job));
        presubmits.chain(postsubmits).chain(periodics)
    }
}
