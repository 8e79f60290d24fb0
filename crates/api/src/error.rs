// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fixture_gen::SchedulingError;
use fixture_gen_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the contract
/// with form, export and storage callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// Not every match could be placed within the requested weeks.
    ///
    /// Returned by `FixtureForm::generate_complete`.
    #[error("Scheduling failed: {0}")]
    Scheduling(SchedulingError),

    /// Writing the export failed.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },

    /// The key-value store could not be read or written.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the failure.
        message: String,
    },
}

impl ApiError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<SchedulingError> for ApiError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::InvalidInput { field, reason } => Self::invalid(field, reason),
            err @ SchedulingError::CapacityExceeded { .. } => Self::Scheduling(err),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        SchedulingError::from(err).into()
    }
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}
