//! Consent engine error types.
//!
//! This module defines the errors that can abort a consent evaluation.
//!
//! Expected control-flow outcomes are deliberately *not* errors: a denied
//! request (consent required, user declined, re-authentication required) is
//! returned as a structured [`Decision`](crate::consent::Decision) with a
//! machine-readable reason. Only genuinely unexpected conditions - a missing
//! client registration, an unreachable store, corrupt data - surface through
//! this module and abort the request.

use std::fmt;

/// Errors that can occur during consent evaluation and identity assembly.
#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    /// An upstream lookup (client application or subject profile) returned
    /// nothing where a record must exist. Fatal for the request; never
    /// silently defaulted.
    #[error("Upstream lookup failed: {message}")]
    UpstreamLookup {
        /// Description of the failed lookup.
        message: String,
    },

    /// An error occurred while reading from or writing to the
    /// authorization store.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error.
        message: String,
    },

    /// An unexpected internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl ConsentError {
    /// Creates a new `UpstreamLookup` error.
    #[must_use]
    pub fn upstream_lookup(message: impl Into<String>) -> Self {
        Self::UpstreamLookup {
            message: message.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `Internal` error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns `true` if this error indicates an infrastructure failure
    /// (store unreachable, corrupt data) rather than bad request data.
    #[must_use]
    pub fn is_infrastructure_error(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UpstreamLookup { .. } => ErrorCategory::Lookup,
            Self::Storage { .. } => ErrorCategory::Infrastructure,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Returns the OAuth 2.0 error code for this error.
    ///
    /// Every variant is an unexpected server-side condition from the
    /// client application's point of view.
    #[must_use]
    pub fn oauth_error_code(&self) -> &'static str {
        "server_error"
    }
}

/// Categories of consent engine errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Upstream lookup failures (client/subject resolution).
    Lookup,
    /// Infrastructure/storage errors.
    Infrastructure,
    /// Internal errors.
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookup => write!(f, "lookup"),
            Self::Infrastructure => write!(f, "infrastructure"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsentError::upstream_lookup("client not found: c1");
        assert_eq!(err.to_string(), "Upstream lookup failed: client not found: c1");

        let err = ConsentError::storage("connection refused");
        assert_eq!(err.to_string(), "Storage error: connection refused");

        let err = ConsentError::internal("unexpected state");
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_error_predicates() {
        assert!(!ConsentError::upstream_lookup("test").is_infrastructure_error());
        assert!(ConsentError::storage("test").is_infrastructure_error());
        assert!(ConsentError::internal("test").is_infrastructure_error());
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            ConsentError::upstream_lookup("test").category(),
            ErrorCategory::Lookup
        );
        assert_eq!(
            ConsentError::storage("test").category(),
            ErrorCategory::Infrastructure
        );
        assert_eq!(
            ConsentError::internal("test").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn test_oauth_error_code() {
        assert_eq!(
            ConsentError::upstream_lookup("test").oauth_error_code(),
            "server_error"
        );
        assert_eq!(ConsentError::storage("test").oauth_error_code(), "server_error");
    }

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Lookup.to_string(), "lookup");
        assert_eq!(ErrorCategory::Infrastructure.to_string(), "infrastructure");
        assert_eq!(ErrorCategory::Internal.to_string(), "internal");
    }
}
