//! Error types for search-resource
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Shape every resource string is expected to follow
pub const EXPECTED_SHAPE: &str = "[collection]/[kind]";

/// The main error type for search-resource
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Resource Errors
    // ============================================================================
    #[error("{message}")]
    MalformedResource { message: String },

    #[error("Cannot specify a query in the target resource and through {key}")]
    ConflictingQuerySpecification { key: String },

    #[error("Invalid collection [{collection}] - needs to be lowercase")]
    InvalidCollectionCase { collection: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed resource error with the generic message
    pub fn malformed_resource() -> Self {
        Self::malformed(format!("invalid resource given; expecting {EXPECTED_SHAPE}"))
    }

    /// Create a malformed resource error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResource {
            message: message.into(),
        }
    }

    /// Create a conflicting query error naming the settings key
    pub fn conflicting_query(key: impl Into<String>) -> Self {
        Self::ConflictingQuerySpecification { key: key.into() }
    }

    /// Create a collection case error
    pub fn invalid_case(collection: impl Into<String>) -> Self {
        Self::InvalidCollectionCase {
            collection: collection.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error came from validating a resource string
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedResource { .. }
                | Error::ConflictingQuerySpecification { .. }
                | Error::InvalidCollectionCase { .. }
        )
    }
}

/// Result type alias for search-resource
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_resource();
        assert_eq!(
            err.to_string(),
            "invalid resource given; expecting [collection]/[kind]"
        );

        let err = Error::conflicting_query("query");
        assert_eq!(
            err.to_string(),
            "Cannot specify a query in the target resource and through query"
        );

        let err = Error::invalid_case("Logs");
        assert_eq!(
            err.to_string(),
            "Invalid collection [Logs] - needs to be lowercase"
        );

        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");
    }

    #[test]
    fn test_is_resource_error() {
        assert!(Error::malformed_resource().is_resource_error());
        assert!(Error::conflicting_query("query").is_resource_error());
        assert!(Error::invalid_case("ABC").is_resource_error());

        assert!(!Error::config("test").is_resource_error());
        assert!(!Error::file_not_found("settings.yaml").is_resource_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
