//! Registered transports and their initializers

use crate::{ConfigError, SessionResolver};
use shellcli_session::{SessionDescriptor, SshSession, TelnetSession, TransportKind};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Connection type that always selects every registered transport
pub const AUTO_CONNECTION_TYPE: &str = "auto";

/// Custom initializer signature
pub type InitializerFn =
    dyn Fn(&SessionResolver, &Arc<dyn TransportKind>) -> Result<SessionDescriptor, ConfigError>
        + Send
        + Sync;

/// How a descriptor is built for a transport kind
#[derive(Clone)]
pub enum Initializer {
    /// Host, username, password, port and post-connect hook
    Plain,
    /// Everything `Plain` supplies plus the private key
    WithPrivateKey,
    /// Caller-supplied builder
    Custom(Arc<InitializerFn>),
}

impl Initializer {
    /// Wrap a closure as a custom initializer
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&SessionResolver, &Arc<dyn TransportKind>) -> Result<SessionDescriptor, ConfigError>
            + Send
            + Sync
            + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Default initializer for a kind with no override
    pub fn for_kind(kind: &dyn TransportKind) -> Self {
        if kind.requires_private_key() {
            Self::WithPrivateKey
        } else {
            Self::Plain
        }
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("Plain"),
            Self::WithPrivateKey => f.write_str("WithPrivateKey"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    kind: Arc<dyn TransportKind>,
    initializer: Option<Initializer>,
}

/// Ordered set of transport kinds with optional per-kind initializer overrides
///
/// Registration order is the default attempt order. A lowercased session
/// type keys the latest kind registered under it.
#[derive(Debug, Clone)]
pub struct TransportRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for TransportRegistry {
    /// SSH first, then Telnet
    fn default() -> Self {
        Self::new()
            .with_session(Arc::new(SshSession::new()))
            .with_session(Arc::new(TelnetSession::new()))
    }
}

impl TransportRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a kind with the default initializer
    pub fn with_session(mut self, kind: Arc<dyn TransportKind>) -> Self {
        self.register(kind, None);
        self
    }

    /// Register a kind with an initializer override
    pub fn with_initializer(
        mut self,
        kind: Arc<dyn TransportKind>,
        initializer: Initializer,
    ) -> Self {
        self.register(kind, Some(initializer));
        self
    }

    /// Register a kind
    ///
    /// Every registration joins the attempt order, including kinds sharing a
    /// session type. A keyed lookup picks the latest registration.
    pub fn register(&mut self, kind: Arc<dyn TransportKind>, initializer: Option<Initializer>) {
        debug!("Registered session type: {}", kind.registry_key());
        self.entries.push(RegistryEntry { kind, initializer });
    }

    /// All kinds in registration order
    pub fn kinds(&self) -> Vec<Arc<dyn TransportKind>> {
        self.entries.iter().map(|e| Arc::clone(&e.kind)).collect()
    }

    /// Look up a kind by connection type, case-insensitively
    pub fn get(&self, connection_type: &str) -> Option<&Arc<dyn TransportKind>> {
        let key = connection_type.to_lowercase();
        self.entries
            .iter()
            .rfind(|e| e.kind.registry_key() == key)
            .map(|e| &e.kind)
    }

    /// Candidate kinds for a connection type
    ///
    /// A registered type yields exactly that kind. `auto`, the empty string
    /// and unknown types all yield every kind in registration order.
    pub fn resolve(&self, connection_type: &str) -> Vec<Arc<dyn TransportKind>> {
        match self.get(connection_type) {
            Some(kind) => vec![Arc::clone(kind)],
            None => {
                if !connection_type.eq_ignore_ascii_case(AUTO_CONNECTION_TYPE) {
                    debug!(
                        "Unknown connection type '{}', trying all registered session types",
                        connection_type
                    );
                }
                self.kinds()
            }
        }
    }

    /// Initializer override registered for a kind
    ///
    /// The entry holding this exact kind wins. A kind that was never
    /// registered falls back to the latest entry with the same session type.
    pub fn initializer_for(&self, kind: &dyn TransportKind) -> Option<&Initializer> {
        let entry = match self
            .entries
            .iter()
            .find(|e| std::ptr::addr_eq(Arc::as_ptr(&e.kind), kind))
        {
            Some(entry) => Some(entry),
            None => {
                let key = kind.registry_key();
                self.entries.iter().rfind(|e| e.kind.registry_key() == key)
            }
        };
        entry.and_then(|e| e.initializer.as_ref())
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no kinds are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
