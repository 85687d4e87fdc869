//! Error type shared by the registry and the family evaluators.

use thiserror::Error;

/// Errors produced by the registry and the family evaluators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No family is registered under the requested id.
    #[error("unknown function id {0}")]
    NotFound(u32),
    /// No family matches a textual lookup (id or name).
    #[error("unknown function '{0}'")]
    UnknownName(String),
    /// A family was registered twice under the same id.
    #[error("function id {0} is already registered")]
    DuplicateId(u32),
    /// The domain or evaluation request cannot be sampled.
    #[error("evaluation failed: {0}")]
    Evaluation(String),
    /// The parameter mapping does not match the declared parameter names.
    #[error("parameters for '{family}' must be exactly [{expected}], got [{got}]")]
    InvalidParameters {
        /// Display name of the family.
        family: &'static str,
        /// Declared parameter names, comma separated.
        expected: String,
        /// Supplied parameter names, comma separated.
        got: String,
    },
    /// A template request asked for zero presets.
    #[error("template count must be at least 1")]
    InvalidTemplateCount,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
