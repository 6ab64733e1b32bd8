//! Run configuration
//!
//! Check toggles and the resolved input snapshot the checks run over.

mod input;
mod warnings;

pub use input::{load_input, InputBundle, LoadedInput};
pub use warnings::{CheckOptions, Warning};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("no such warning {name:?}, valid warnings: {valid}")]
    UnknownWarning { name: String, valid: String },
}
