//! CLI service acquisition

use crate::{ResourceConfig, Result, SessionResolver, TransportRegistry};
use shellcli_session::{OnSessionStart, SessionDescriptor, SessionOpener};
use std::sync::Arc;
use tracing::{info, info_span, Instrument, Span};

/// Obtains mode-bound CLI sessions for one resource
///
/// Owns the [`SessionResolver`] and the session opener `O`. Every call to
/// [`get_cli_service`](Self::get_cli_service) rebuilds the candidate list and
/// hands it to the opener together with the requested mode.
pub struct CliServiceConfigurator<O> {
    /// Session-opening collaborator
    cli: O,
    /// Candidate resolution for this resource
    resolver: SessionResolver,
    /// Span handed to the opener as its logger
    span: Span,
}

impl<O> CliServiceConfigurator<O> {
    /// Create a configurator with the default registry and a no-op hook
    pub fn new(config: impl ResourceConfig + 'static, cli: O) -> Self {
        Self::from_shared(Arc::new(config), cli)
    }

    /// Create a configurator over a shared resource configuration
    pub fn from_shared(config: Arc<dyn ResourceConfig>, cli: O) -> Self {
        let span = info_span!("cli", address = %config.address());
        Self {
            cli,
            resolver: SessionResolver::new(config),
            span,
        }
    }

    /// Replace the transport registry
    pub fn with_registry(mut self, registry: TransportRegistry) -> Self {
        self.resolver = self.resolver.with_registry(registry);
        self
    }

    /// Replace the post-connect hook
    pub fn with_on_session_start(mut self, hook: Arc<dyn OnSessionStart>) -> Self {
        self.resolver = self.resolver.with_on_session_start(hook);
        self
    }

    /// Replace the span handed to the opener
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Candidate resolution for this resource
    pub fn resolver(&self) -> &SessionResolver {
        &self.resolver
    }

    /// Session-opening collaborator
    pub fn cli(&self) -> &O {
        &self.cli
    }

    /// Span handed to the opener
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Ordered session descriptors for the configured connection type
    pub fn defined_sessions(&self) -> Result<Vec<SessionDescriptor>> {
        Ok(self.resolver.list_candidates()?)
    }

    /// Open a session and switch it into `mode`
    pub async fn get_cli_service<M>(&self, mode: M) -> Result<O::Handle>
    where
        O: SessionOpener<M>,
        M: Send + 'static,
    {
        let sessions = self.defined_sessions()?;
        info!(
            parent: &self.span,
            "Requesting CLI session over {} candidate transport(s)",
            sessions.len()
        );

        let handle = self
            .cli
            .get_session(sessions, mode, &self.span)
            .instrument(self.span.clone())
            .await?;
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, GenericCliConfig, CliError, Initializer};
    use async_trait::async_trait;
    use shellcli_session::{SessionError, SshSession};
    use std::sync::Mutex;

    /// Opener that records what it was asked for
    #[derive(Default)]
    struct RecordingOpener {
        calls: Mutex<Vec<(Vec<String>, &'static str)>>,
        fail: bool,
    }

    #[async_trait]
    impl SessionOpener<&'static str> for RecordingOpener {
        type Handle = String;

        async fn get_session(
            &self,
            sessions: Vec<SessionDescriptor>,
            mode: &'static str,
            _span: &Span,
        ) -> std::result::Result<String, SessionError> {
            let types = sessions.iter().map(|d| d.session_type().to_string()).collect();
            self.calls.lock().unwrap().push((types, mode));
            if self.fail {
                return Err(SessionError::Connection("connection refused".to_string()));
            }
            Ok(format!("{}@{}", mode, sessions[0].host()))
        }
    }

    fn config(connection_type: &str) -> GenericCliConfig {
        GenericCliConfig::new("10.0.0.5")
            .with_user("admin")
            .with_password("secret")
            .with_connection_type(connection_type)
    }

    #[tokio::test]
    async fn test_get_cli_service_passes_candidates_and_mode() {
        let cli = CliServiceConfigurator::new(config("auto"), RecordingOpener::default());

        let handle = cli.get_cli_service("enable").await.unwrap();
        assert_eq!(handle, "enable@10.0.0.5");

        let calls = cli.cli().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, vec!["SSH", "TELNET"]);
        assert_eq!(calls[0].1, "enable");
    }

    #[tokio::test]
    async fn test_opener_error_is_wrapped() {
        let opener = RecordingOpener { fail: true, ..Default::default() };
        let cli = CliServiceConfigurator::new(config("ssh"), opener);

        let result = cli.get_cli_service("config").await;
        assert!(matches!(result, Err(CliError::Session(SessionError::Connection(_)))));
    }

    #[tokio::test]
    async fn test_config_error_stops_before_opener() {
        let registry = TransportRegistry::new()
            .with_initializer(Arc::new(SshSession::new()), Initializer::WithPrivateKey);
        let cli = CliServiceConfigurator::new(config("ssh"), RecordingOpener::default())
            .with_registry(registry);

        let result = cli.get_cli_service("enable").await;
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::MissingAttribute("private_key")))
        ));
        assert!(cli.cli().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_span_is_replaceable() {
        let span = info_span!("switch-01");
        let cli = CliServiceConfigurator::new(config("ssh"), RecordingOpener::default())
            .with_span(span.clone());
        assert_eq!(cli.span().id(), span.id());

        let handle = tokio_test::block_on(cli.get_cli_service("config")).unwrap();
        assert_eq!(handle, "config@10.0.0.5");
    }

    #[test]
    fn test_defined_sessions() {
        let cli = CliServiceConfigurator::new(config("telnet"), RecordingOpener::default());
        let sessions = cli.defined_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].session_type(), "TELNET");
    }
}
