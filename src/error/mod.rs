mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

/// Failures that stop the engine from attempting a match at all.
///
/// Classification misses are not errors: they surface as a
/// [`crate::detect::Detection`] with status `NotFound`.
#[derive(Error, Debug)]
pub enum DevsiftError {
    #[error("Rule tree is not loaded")]
    RuleTreeNotLoaded,

    #[error("Rule store not found at {0}")]
    StoreNotFound(String),

    #[error("Invalid rule file '{file}': {reason}")]
    InvalidRuleFile { file: String, reason: String },

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid header '{0}', expected 'Name: value'")]
    InvalidHeader(String),

    #[error("Invalid build info entry '{0}', expected 'key=value'")]
    InvalidBuildInfo(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, DevsiftError>;
