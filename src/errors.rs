// ABOUTME: Structured error types for recipe service operations
// ABOUTME: Separates transport faults from parse failures with retry information
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use thiserror::Error;

/// Result type for recipe service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised by the recipe service client.
///
/// Every variant is a transport-class fault: the call did not produce a
/// usable response. A response the service itself marks as failed
/// (`success: false`) is data, not an error, and never appears here.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request could not be sent or no response arrived
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a non-success HTTP status
    #[error("recipe service returned status {status_code}: {message}")]
    Api {
        /// HTTP status code of the response
        status_code: u16,
        /// Response body, verbatim
        message: String,
        /// Whether retrying may succeed (server-side statuses)
        retryable: bool,
    },

    /// Response body could not be decoded into the expected shape
    #[error("failed to parse {field}: {source}")]
    Parse {
        /// Which payload failed to decode
        field: &'static str,
        /// Underlying deserialization error
        source: serde_json::Error,
    },
}

impl ServiceError {
    /// Check if this error is worth retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { retryable, .. } => *retryable,
            Self::Parse { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_retryable() {
        assert!(ServiceError::Network("connection refused".into()).is_retryable());
    }

    #[test]
    fn api_errors_carry_retryability() {
        let server_side = ServiceError::Api {
            status_code: 503,
            message: "unavailable".into(),
            retryable: true,
        };
        assert!(server_side.is_retryable());

        let client_side = ServiceError::Api {
            status_code: 400,
            message: "bad request".into(),
            retryable: false,
        };
        assert!(!client_side.is_retryable());
    }
}
