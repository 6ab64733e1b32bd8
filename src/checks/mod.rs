//! Validation drivers
//!
//! Runs every enabled check over the input and collects the findings into
//! one aggregate. Checks are independent; none stops the others.

mod jobs;
mod queries;

pub use jobs::{validate_decorated_jobs, validate_job_requirements};
pub use queries::validate_needs_ok_to_test_label;

use tracing::{debug, info_span};

use crate::config::{CheckOptions, InputBundle, Warning};
use crate::error::Aggregate;
use crate::tide::validate_tide_requirements;

/// Run the checks enabled in `options`, in toggle order.
pub fn run_checks(input: &InputBundle, options: &CheckOptions) -> Aggregate {
    let mut errs = Aggregate::new();
    for warning in Warning::ALL {
        if !options.enabled(warning) {
            debug!(check = %warning, "skipped");
            continue;
        }
        let _span = info_span!("check", name = %warning).entered();
        let found = run_check(warning, input);
        debug!(findings = found.len(), "done");
        errs.extend(found);
    }
    errs
}

fn run_check(warning: Warning, input: &InputBundle) -> Aggregate {
    match warning {
        Warning::MismatchedTide => {
            validate_tide_requirements(&input.tide, &input.plugins, &input.registry())
        }
        Warning::NonDecoratedJobs => validate_decorated_jobs(&input.jobs),
        Warning::LongJobNames => validate_job_requirements(&input.jobs),
        Warning::NeedsOkToTest => validate_needs_ok_to_test_label(&input.tide),
    }
}
