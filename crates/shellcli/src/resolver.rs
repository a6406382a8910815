//! Candidate resolution and descriptor building

use crate::{ConfigError, CredentialCache, Initializer, ResourceConfig, TransportRegistry};
use shellcli_session::{NoopSessionStart, OnSessionStart, SessionDescriptor, TransportKind};
use std::sync::Arc;
use tracing::debug;

/// Turns a resource configuration into an ordered list of session descriptors
///
/// Holds the registry, the post-connect hook and the credential cache for one
/// resource interaction. The resource configuration is treated as immutable
/// for the resolver's lifetime.
pub struct SessionResolver {
    /// Resource attributes
    config: Arc<dyn ResourceConfig>,
    /// Known transports in attempt order
    registry: TransportRegistry,
    /// Memoized password and private key
    credentials: CredentialCache,
    /// Hook forwarded in every descriptor
    on_session_start: Arc<dyn OnSessionStart>,
}

impl SessionResolver {
    /// Create a resolver with the default registry and a no-op hook
    pub fn new(config: Arc<dyn ResourceConfig>) -> Self {
        Self {
            config,
            registry: TransportRegistry::default(),
            credentials: CredentialCache::new(),
            on_session_start: Arc::new(NoopSessionStart),
        }
    }

    /// Replace the transport registry
    pub fn with_registry(mut self, registry: TransportRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the post-connect hook
    pub fn with_on_session_start(mut self, hook: Arc<dyn OnSessionStart>) -> Self {
        self.on_session_start = hook;
        self
    }

    /// Resource configuration
    pub fn resource_config(&self) -> &dyn ResourceConfig {
        self.config.as_ref()
    }

    /// Transport registry
    pub fn registry(&self) -> &TransportRegistry {
        &self.registry
    }

    /// Post-connect hook
    pub fn on_session_start(&self) -> &Arc<dyn OnSessionStart> {
        &self.on_session_start
    }

    /// Cached password
    pub fn password(&self) -> Result<&str, ConfigError> {
        self.credentials.password(self.config.as_ref())
    }

    /// Cached private key
    pub fn private_key(&self) -> Result<&str, ConfigError> {
        self.credentials.private_key(self.config.as_ref())
    }

    /// Candidate kinds for the configured connection type
    pub fn resolve(&self) -> Vec<Arc<dyn TransportKind>> {
        self.registry.resolve(self.config.cli_connection_type())
    }

    /// Build a descriptor for one kind
    ///
    /// A registered initializer override wins. Otherwise key-based kinds get
    /// the private key and everything else gets the plain initializer.
    pub fn build_descriptor(
        &self,
        kind: &Arc<dyn TransportKind>,
    ) -> Result<SessionDescriptor, ConfigError> {
        let initializer = self
            .registry
            .initializer_for(kind.as_ref())
            .cloned()
            .unwrap_or_else(|| Initializer::for_kind(kind.as_ref()));

        let descriptor = match &initializer {
            Initializer::Plain => self.plain_descriptor(kind)?,
            Initializer::WithPrivateKey => self.key_descriptor(kind)?,
            Initializer::Custom(init) => init(self, kind)?,
        };

        debug!(
            descriptor = %descriptor.id(),
            "Built {} session descriptor with {:?} initializer",
            kind.session_type(),
            initializer
        );
        Ok(descriptor)
    }

    /// Descriptor with host, username, password, port and hook
    pub fn plain_descriptor(
        &self,
        kind: &Arc<dyn TransportKind>,
    ) -> Result<SessionDescriptor, ConfigError> {
        Ok(SessionDescriptor::new(
            Arc::clone(kind),
            self.config.address(),
            self.config.user(),
            self.password()?,
            self.config.cli_tcp_port(),
            Arc::clone(&self.on_session_start),
        ))
    }

    /// Plain descriptor plus the private key
    pub fn key_descriptor(
        &self,
        kind: &Arc<dyn TransportKind>,
    ) -> Result<SessionDescriptor, ConfigError> {
        let private_key = self.private_key()?;
        Ok(self.plain_descriptor(kind)?.with_private_key(private_key))
    }

    /// Descriptors for every candidate kind, in attempt order
    pub fn list_candidates(&self) -> Result<Vec<SessionDescriptor>, ConfigError> {
        let candidates = self
            .resolve()
            .iter()
            .map(|kind| self.build_descriptor(kind))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Resolved connection type '{}' to {} session candidates for {}",
            self.config.cli_connection_type(),
            candidates.len(),
            self.config.address()
        );
        Ok(candidates)
    }
}
