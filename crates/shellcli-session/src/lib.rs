//! # shellcli session contracts
//!
//! Transport kinds, session descriptors and the contracts shared with the
//! collaborator that physically opens command-line sessions.

#![warn(missing_docs)]

/// Transport kinds known to the resolver
pub mod transport;

/// Not-yet-opened session recipes
pub mod descriptor;

/// Open session contract and post-connect hooks
pub mod connection;

/// Session-opening collaborator contract
pub mod opener;

/// Session-specific error types
pub mod error;

pub use transport::{TransportKind, SshSession, TelnetSession};
pub use descriptor::SessionDescriptor;
pub use connection::{CliSession, OnSessionStart, NoopSessionStart, StartupCommands};
pub use opener::SessionOpener;
pub use error::SessionError;
