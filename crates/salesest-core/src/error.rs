use rust_decimal::Decimal;
use thiserror::Error;

use crate::report_data::RequiredField;

/// Errors raised by the estimators when their input is malformed or too thin
/// to support an estimate.
///
/// A ratio above the legal ceiling is not an error; it comes back as a
/// successful [`crate::EstimationResult`] with `is_compliant() == false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    /// Target store area was zero or negative.
    #[error("store area must be greater than zero (got {area}㎡)")]
    InvalidArea { area: Decimal },

    /// Too few comparable stores survived normalization.
    #[error("at least {required} usable comparable stores are required, found {usable}")]
    InsufficientData { usable: usize, required: usize },

    /// A prediction bound was missing or non-positive, or arithmetic overflowed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Raised when report metadata fails the completeness gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportDataError {
    #[error("required report fields are missing: {}", join_fields(.fields))]
    MissingFields { fields: Vec<RequiredField> },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to read request file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse request YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
