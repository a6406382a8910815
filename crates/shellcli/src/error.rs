//! Error types for shellcli

use shellcli_session::SessionError;
use thiserror::Error;

/// Errors raised by resource configuration accessors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required attribute has no value
    #[error("Missing resource attribute: {0}")]
    MissingAttribute(&'static str),

    /// An attribute holds a value that cannot be used
    #[error("Invalid value for resource attribute {name}: {reason}")]
    InvalidAttribute {
        /// Attribute name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Secret lookup failed in the backing store
    #[error("Secret lookup failed: {0}")]
    Secret(String),
}

/// Main error type for shellcli operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Resource configuration errors, surfaced while building descriptors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Errors from the session-opening collaborator
    #[error(transparent)]
    Session(#[from] SessionError),
}
