// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for tinybench.
//!
//! Measurement itself never fails. Errors come from writing tables to the
//! output stream and from loading benchmark plans.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for tinybench.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Plans
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }
}

/// Validation errors for benchmark plans.
/// A plan that fails validation is rejected before anything runs.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate suite name: {name}")]
    DuplicateSuiteName { name: String },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_validation_error_display() {
        let err = HardValidationError::MissingRequiredField {
            field: "workloads",
            context: "suite 'sorting'".to_string(),
        };
        assert!(err.to_string().contains("workloads"));
        assert!(err.to_string().contains("sorting"));
    }

    #[test]
    fn test_error_chain() {
        let validation_err = HardValidationError::DuplicateSuiteName {
            name: "sorting".to_string(),
        };
        let bench_err: BenchError = validation_err.into();
        assert!(matches!(bench_err, BenchError::HardValidation(_)));
    }

    #[test]
    fn test_io_error_context() {
        let source = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = BenchError::io("rendering report")(source);
        assert!(err.to_string().contains("rendering report"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
