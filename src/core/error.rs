//! Typed error handling for the bazaar crate
//!
//! This module provides a typed error hierarchy so callers can handle
//! failures specifically rather than dealing with generic `anyhow::Error`
//! values.
//!
//! # Error Categories
//!
//! - [`QueryError`]: Errors related to list-engine inputs (page sizes)
//! - [`SourceError`]: Errors related to the remote data source
//! - [`ValidationError`]: Errors related to user-provided input (replies)
//! - [`ConfigError`]: Errors related to configuration parsing
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar::prelude::*;
//!
//! match view.current_page() {
//!     Ok(page) => render(page),
//!     Err(BazaarError::Query(QueryError::InvalidPageSize { size })) => {
//!         eprintln!("bad page size: {}", size);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use std::fmt;

/// The main error type for the bazaar crate
///
/// This enum encompasses all possible errors that can occur within the
/// crate. Each variant contains a more specific error type for that
/// category.
#[derive(Debug)]
pub enum BazaarError {
    /// List-engine input errors
    Query(QueryError),

    /// Remote data source errors
    Source(SourceError),

    /// User input validation errors
    Validation(ValidationError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for BazaarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BazaarError::Query(e) => write!(f, "{}", e),
            BazaarError::Source(e) => write!(f, "{}", e),
            BazaarError::Validation(e) => write!(f, "{}", e),
            BazaarError::Config(e) => write!(f, "{}", e),
            BazaarError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for BazaarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BazaarError::Query(e) => Some(e),
            BazaarError::Source(e) => Some(e),
            BazaarError::Validation(e) => Some(e),
            BazaarError::Config(e) => Some(e),
            BazaarError::Internal(_) => None,
        }
    }
}

impl BazaarError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            BazaarError::Query(e) => e.error_code(),
            BazaarError::Source(e) => e.error_code(),
            BazaarError::Validation(e) => e.error_code(),
            BazaarError::Config(_) => "CONFIG_ERROR",
            BazaarError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors related to list-engine inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Page size must be at least 1
    InvalidPageSize { size: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidPageSize { size } => {
                write!(f, "Invalid page size: {} (must be at least 1)", size)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
        }
    }
}

impl From<QueryError> for BazaarError {
    fn from(err: QueryError) -> Self {
        BazaarError::Query(err)
    }
}

// =============================================================================
// Source Errors
// =============================================================================

/// Errors related to the remote data source
///
/// Any of these leaves the owning view in its error state until the
/// surrounding application triggers a fresh mount. Fetches are not retried.
#[derive(Debug)]
pub enum SourceError {
    /// Transport-level failure (connection refused, timeout, ...)
    Http { url: String, message: String },

    /// The endpoint answered with a non-success status
    Status { url: String, status: u16 },

    /// The response body was not valid JSON
    Decode { url: String, message: String },

    /// The payload did not carry the expected collection
    MissingCollection { key: String },

    /// The endpoint requires an authentication token
    Unauthorized { path: String },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Http { url, message } => {
                write!(f, "Request to '{}' failed: {}", url, message)
            }
            SourceError::Status { url, status } => {
                write!(f, "'{}' answered with status {}", url, status)
            }
            SourceError::Decode { url, message } => {
                write!(f, "Failed to decode response from '{}': {}", url, message)
            }
            SourceError::MissingCollection { key } => {
                write!(f, "Expected an array under '{}' in the payload", key)
            }
            SourceError::Unauthorized { path } => {
                write!(f, "'{}' requires an authentication token", path)
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl SourceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Http { .. } => "SOURCE_HTTP_ERROR",
            SourceError::Status { .. } => "SOURCE_BAD_STATUS",
            SourceError::Decode { .. } => "SOURCE_DECODE_ERROR",
            SourceError::MissingCollection { .. } => "SOURCE_MISSING_COLLECTION",
            SourceError::Unauthorized { .. } => "SOURCE_UNAUTHORIZED",
        }
    }
}

impl From<SourceError> for BazaarError {
    fn from(err: SourceError) -> Self {
        BazaarError::Source(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to user-provided input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Recipient address is not a valid e-mail
    InvalidEmail { value: String },

    /// Reply body is empty or whitespace
    EmptyMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail { value } => {
                write!(f, "Invalid e-mail address: '{}'", value)
            }
            ValidationError::EmptyMessage => {
                write!(f, "Reply message must not be empty")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail { .. } => "INVALID_EMAIL",
            ValidationError::EmptyMessage => "EMPTY_MESSAGE",
        }
    }
}

impl From<ValidationError> for BazaarError {
    fn from(err: ValidationError) -> Self {
        BazaarError::Validation(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for BazaarError {
    fn from(err: ConfigError) -> Self {
        BazaarError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for BazaarError {
    fn from(err: serde_yaml::Error) -> Self {
        BazaarError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for BazaarError {
    fn from(err: std::io::Error) -> Self {
        BazaarError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<reqwest::Error> for BazaarError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        BazaarError::Source(SourceError::Http {
            url,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for bazaar operations
pub type BazaarResult<T> = Result<T, BazaarError>;

// =============================================================================
// Tests
// =============================================================================
