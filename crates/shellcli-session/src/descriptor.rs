//! Not-yet-opened session recipes

use crate::{OnSessionStart, TransportKind};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A fully parameterized recipe for one session over one transport
///
/// Descriptors are created per request, handed to the session opener in
/// attempt order, then dropped. They hold no connection.
#[derive(Clone)]
pub struct SessionDescriptor {
    /// Descriptor ID, used to correlate log lines
    id: Uuid,
    /// Transport kind to open
    kind: Arc<dyn TransportKind>,
    /// Remote hostname or IP
    host: String,
    /// Login username
    username: String,
    /// Login password
    password: String,
    /// Private key material, set by key-aware initializers
    private_key: Option<String>,
    /// Port from the resource configuration, 0 when unset
    port: u16,
    /// Hook run right after the transport connects
    on_session_start: Arc<dyn OnSessionStart>,
}

impl SessionDescriptor {
    /// Create a password-authenticated descriptor
    pub fn new(
        kind: Arc<dyn TransportKind>,
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        port: u16,
        on_session_start: Arc<dyn OnSessionStart>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            host: host.into(),
            username: username.into(),
            password: password.into(),
            private_key: None,
            port,
            on_session_start,
        }
    }

    /// Attach private key material
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Get the descriptor ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Transport kind
    pub fn kind(&self) -> &Arc<dyn TransportKind> {
        &self.kind
    }

    /// Session type of the transport kind
    pub fn session_type(&self) -> &str {
        self.kind.session_type()
    }

    /// Remote host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Login username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Private key material, if any
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    /// Configured port, forwarded unchanged
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Configured port, or the kind's default when unset
    pub fn effective_port(&self) -> u16 {
        if self.port == 0 {
            self.kind.default_port()
        } else {
            self.port
        }
    }

    /// Post-connect hook
    pub fn on_session_start(&self) -> &Arc<dyn OnSessionStart> {
        &self.on_session_start
    }
}

impl fmt::Debug for SessionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionDescriptor")
            .field("id", &self.id)
            .field("session_type", &self.kind.session_type())
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("port", &self.port)
            .field("on_session_start", &self.on_session_start)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoopSessionStart, SshSession, TelnetSession};

    fn descriptor(kind: Arc<dyn TransportKind>, port: u16) -> SessionDescriptor {
        let hook = Arc::new(NoopSessionStart);
        SessionDescriptor::new(kind, "10.0.0.1", "admin", "secret", port, hook)
    }

    #[test]
    fn test_descriptor_fields() {
        let desc = descriptor(Arc::new(SshSession::new()), 2222);
        assert_eq!(desc.session_type(), "SSH");
        assert_eq!(desc.host(), "10.0.0.1");
        assert_eq!(desc.username(), "admin");
        assert_eq!(desc.password(), "secret");
        assert_eq!(desc.private_key(), None);
        assert_eq!(desc.port(), 2222);
        assert_eq!(desc.effective_port(), 2222);
    }

    #[test]
    fn test_effective_port_falls_back_to_kind_default() {
        assert_eq!(descriptor(Arc::new(SshSession::new()), 0).effective_port(), 22);
        assert_eq!(descriptor(Arc::new(TelnetSession::new()), 0).effective_port(), 23);
        assert_eq!(descriptor(Arc::new(TelnetSession::new()), 0).port(), 0);
    }

    #[test]
    fn test_with_private_key() {
        let desc = descriptor(Arc::new(SshSession::key_based()), 22)
            .with_private_key("-----BEGIN KEY-----");
        assert_eq!(desc.private_key(), Some("-----BEGIN KEY-----"));
        assert_eq!(desc.password(), "secret");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let desc = descriptor(Arc::new(SshSession::new()), 22).with_private_key("KEYDATA");
        let rendered = format!("{:?}", desc);
        assert!(!rendered.contains("secret"));
        assert!(!rendered.contains("KEYDATA"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("10.0.0.1"));
    }

    #[test]
    fn test_descriptor_ids_are_unique() {
        let a = descriptor(Arc::new(SshSession::new()), 22);
        let b = descriptor(Arc::new(SshSession::new()), 22);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }
}
