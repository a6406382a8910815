//! Transport kinds known to the resolver

use std::fmt;

/// A registered command-line transport (SSH, Telnet, ...)
///
/// A kind never opens anything itself. It names the transport, declares the
/// port it listens on by default and whether it needs private-key material.
/// The collaborator that opens sessions matches on [`session_type`] to pick
/// the actual protocol implementation.
///
/// [`session_type`]: TransportKind::session_type
pub trait TransportKind: fmt::Debug + Send + Sync {
    /// Canonical session type name, e.g. `"SSH"`
    fn session_type(&self) -> &str;

    /// Port used when the resource configuration leaves the port unset
    fn default_port(&self) -> u16;

    /// Whether descriptors for this kind must carry a private key
    fn requires_private_key(&self) -> bool {
        false
    }

    /// Lowercased session type, used as the registry key
    fn registry_key(&self) -> String {
        self.session_type().to_lowercase()
    }
}

/// SSH transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshSession {
    key_based: bool,
}

impl SshSession {
    /// Session type name
    pub const SESSION_TYPE: &'static str = "SSH";

    /// Default SSH port
    pub const DEFAULT_PORT: u16 = 22;

    /// Password-authenticated SSH
    pub fn new() -> Self {
        Self::default()
    }

    /// SSH that authenticates with the resource's private key
    pub fn key_based() -> Self {
        Self { key_based: true }
    }
}

impl TransportKind for SshSession {
    fn session_type(&self) -> &str {
        Self::SESSION_TYPE
    }

    fn default_port(&self) -> u16 {
        Self::DEFAULT_PORT
    }

    fn requires_private_key(&self) -> bool {
        self.key_based
    }
}

/// Telnet transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelnetSession;

impl TelnetSession {
    /// Session type name
    pub const SESSION_TYPE: &'static str = "TELNET";

    /// Default Telnet port
    pub const DEFAULT_PORT: u16 = 23;

    /// Create the Telnet kind
    pub fn new() -> Self {
        Self
    }
}

impl TransportKind for TelnetSession {
    fn session_type(&self) -> &str {
        Self::SESSION_TYPE
    }

    fn default_port(&self) -> u16 {
        Self::DEFAULT_PORT
    }
}
