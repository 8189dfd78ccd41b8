// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Siteline website backend.

use thiserror::Error;

/// The primary error type used across all Siteline crates.
#[derive(Debug, Error)]
pub enum SitelineError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// User input failed a validation rule. The message is the exact
    /// user-visible string for that rule.
    #[error("validation error: {0}")]
    Validation(String),

    /// A second submission from the same email arrived inside the duplicate window.
    #[error("duplicate submission inside the rate-limit window")]
    RateLimited,

    /// Storage backend errors (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required table does not exist. Distinguished from other storage
    /// failures so the caller can report a configuration problem.
    #[error("storage schema error: missing table")]
    MissingTable,

    /// A uniqueness constraint rejected the insert.
    #[error("storage constraint error: duplicate row")]
    Duplicate,

    /// Email dispatch errors (transport failure, malformed address).
    #[error("mail error: {message}")]
    Mail {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_the_rule_message() {
        let err = SitelineError::Validation("Name must be at least 2 characters long".into());
        assert_eq!(
            err.to_string(),
            "validation error: Name must be at least 2 characters long"
        );
    }

    #[test]
    fn storage_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = SitelineError::Storage {
            source: Box::new(io),
        };
        assert!(err.to_string().contains("disk gone"));
    }

    #[test]
    fn timeout_error_mentions_duration() {
        let err = SitelineError::Timeout {
            duration: std::time::Duration::from_secs(10),
        };
        assert!(err.to_string().contains("10s"));
    }
}
