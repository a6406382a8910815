//! Session-specific error types

use thiserror::Error;
use std::io;

/// Errors raised while opening or driving a command-line session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Transport connection error
    #[error("Connection error: {0}")]
    Connection(String),
    
    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),
    
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    
    /// Timeout error
    #[error("Operation timed out")]
    Timeout,
    
    /// A command sent on an open session failed
    #[error("Command '{command}' failed: {message}")]
    Command {
        /// Command that was sent
        command: String,
        /// Error message
        message: String,
    },
    
    /// Every candidate transport was tried and none produced a session
    #[error("All {attempted} session candidates failed, last error: {last}")]
    AllCandidatesFailed {
        /// Number of candidates attempted
        attempted: usize,
        /// Error reported by the final candidate
        last: Box<SessionError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display() {
        let err = SessionError::Command {
            command: "no logging console".to_string(),
            message: "% Invalid input".to_string(),
        };
        assert_eq!(err.to_string(), "Command 'no logging console' failed: % Invalid input");
    }

    #[test]
    fn test_all_candidates_failed_display() {
        let err = SessionError::AllCandidatesFailed {
            attempted: 2,
            last: Box::new(SessionError::Timeout),
        };
        assert_eq!(
            err.to_string(),
            "All 2 session candidates failed, last error: Operation timed out"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err: SessionError = io_err.into();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
