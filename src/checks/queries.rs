//! Merge query sanity checks.

use checkconfig_model::TideConfig;

use crate::error::{Aggregate, ValidationError};
use crate::tide::{LGTM_LABEL, NEEDS_OK_TO_TEST_LABEL};

/// Flag queries that require `lgtm` while forbidding `needs-ok-to-test`.
///
/// Such a query lets a reviewer's lgtm bypass the ok-to-test gate, so it is
/// reported as advisory.
pub fn validate_needs_ok_to_test_label(tide: &TideConfig) -> Aggregate {
    tide.queries
        .iter()
        .enumerate()
        .filter(|(_, query)| query.requires(LGTM_LABEL) && query.forbids(NEEDS_OK_TO_TEST_LABEL))
        .map(|(position, _)| ValidationError::PolicyContradiction {
            position,
            required: LGTM_LABEL.to_string(),
            forbidden: NEEDS_OK_TO_TEST_LABEL.to_string(),
        })
        .collect()
}
