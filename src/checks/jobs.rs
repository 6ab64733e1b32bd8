//! Job definition checks.

use checkconfig_model::{JobAgent, JobConfig};

use crate::error::{Aggregate, ValidationError, JOB_NAME_MAX_LEN};

/// Cluster jobs label their pods with the job name, so the name must fit
/// in a label value.
pub fn validate_job_requirements(jobs: &JobConfig) -> Aggregate {
    jobs.all_jobs()
        .filter(|(_, _, job)| job.agent == JobAgent::Kubernetes && job.name.len() > JOB_NAME_MAX_LEN)
        .map(|(kind, repo, job)| ValidationError::PolicyNamingViolation {
            kind,
            name: job.name.clone(),
            repo: repo.map(str::to_string),
        })
        .collect()
}

/// Cluster jobs must use the pod utilities. All offenders are reported in
/// a single finding.
pub fn validate_decorated_jobs(jobs: &JobConfig) -> Aggregate {
    let undecorated: Vec<String> = jobs
        .all_jobs()
        .filter(|(_, _, job)| job.agent == JobAgent::Kubernetes && !job.decorate)
        .map(|(_, _, job)| job.name.clone())
        .collect();

    if undecorated.is_empty() {
        return Aggregate::new();
    }
    ValidationError::PolicyDecorationViolation { jobs: undecorated }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkconfig_model::{JobBase, JobKind};

    fn name_of_len(len: usize) -> String {
        "j".repeat(len)
    }

    #[test]
    fn test_name_at_limit_passes() {
        let mut jobs = JobConfig::default();
        jobs.periodics
            .push(JobBase::new(name_of_len(63), JobAgent::Kubernetes, true));
        assert!(validate_job_requirements(&jobs).is_empty());
    }

    #[test]
    fn test_name_over_limit_fails() {
        let mut jobs = JobConfig::default();
        jobs.presubmits.insert(
            "org/repo".to_string(),
            vec![JobBase::new(name_of_len(64), JobAgent::Kubernetes, true)],
        );
        let errs = validate_job_requirements(&jobs).into_vec();
        assert_eq!(
            errs,
            vec![ValidationError::PolicyNamingViolation {
                kind: JobKind::Presubmit,
                name: name_of_len(64),
                repo: Some("org/repo".to_string()),
            }]
        );
    }

    #[test]
    fn test_long_name_ignored_for_other_agents() {
        let mut jobs = JobConfig::default();
        jobs.periodics
            .push(JobBase::new(name_of_len(80), JobAgent::Jenkins, false));
        assert!(validate_job_requirements(&jobs).is_empty());
        assert!(validate_decorated_jobs(&jobs).is_empty());
    }

    #[test]
    fn test_undecorated_jobs_combined() {
        let mut jobs = JobConfig::default();
        jobs.presubmits.insert(
            "org/repo".to_string(),
            vec![
                JobBase::new("pull-undecorated", JobAgent::Kubernetes, false),
                JobBase::new("pull-decorated", JobAgent::Kubernetes, true),
            ],
        );
        jobs.postsubmits.insert(
            "org/repo".to_string(),
            vec![JobBase::new("post-undecorated", JobAgent::Kubernetes, false)],
        );
        jobs.periodics
            .push(JobBase::new("ci-undecorated", JobAgent::Kubernetes, false));

        let errs = validate_decorated_jobs(&jobs).into_vec();
        assert_eq!(
            errs,
            vec![ValidationError::PolicyDecorationViolation {
                jobs: vec![
                    "pull-undecorated".to_string(),
                    "post-undecorated".to_string(),
                    "ci-undecorated".to_string(),
                ],
            }]
        );
    }
}
