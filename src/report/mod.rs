//! Check report output
//!
//! Structured JSON and human-readable renderings of a check run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{CheckOptions, LoadedInput, Warning};
use crate::error::{Aggregate, ValidationError};

/// Schema identifier
pub const SCHEMA_ID: &str = "checkconfig/report@1";

/// One finding in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub code: String,
    pub message: String,
    pub advisory: bool,
}

impl From<&ValidationError> for Finding {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            advisory: error.is_advisory(),
        }
    }
}

/// Result of a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub schema_id: String,

    pub created_at: DateTime<Utc>,

    /// Input file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,

    /// SHA-256 of the input file bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_digest: Option<String>,

    /// Checks that ran
    pub warnings: Vec<Warning>,

    pub strict: bool,

    /// Whether the run fails
    pub failed: bool,

    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn new(options: &CheckOptions, errs: &Aggregate) -> Self {
        Self {
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            input_path: None,
            input_digest: None,
            warnings: options.warnings.iter().copied().collect(),
            strict: options.strict,
            failed: errs.is_failure(options.strict),
            findings: errs.iter().map(Finding::from).collect(),
        }
    }

    /// Record where the input came from.
    pub fn with_input(mut self, input: &LoadedInput) -> Self {
        self.input_path = Some(input.path.to_string_lossy().to_string());
        self.input_digest = Some(input.digest.clone());
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref path) = self.input_path {
            lines.push(format!("Input: {}", path));
        }
        let checks: Vec<&str> = self.warnings.iter().map(|w| w.as_str()).collect();
        lines.push(format!("Checks: {}", checks.join(", ")));
        lines.push(String::new());

        if self.findings.is_empty() {
            lines.push("No problems found".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Findings ({}):", self.findings.len()));
        for finding in &self.findings {
            let marker = if finding.advisory { "advisory" } else { "error" };
            lines.push(format!("  - [{}] {}", marker, finding.message));
        }
        lines.push(String::new());
        lines.push(if self.failed {
            "Result: FAILED".to_string()
        } else {
            "Result: PASSED with advisories".to_string()
        });
        lines.join("\n")
    }
}
