//! Open session contract and post-connect hooks

use crate::SessionError;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, warn, Span};

/// An open command-line session as seen by post-connect hooks
///
/// Implemented by the collaborator's SSH/Telnet sessions.
#[async_trait]
pub trait CliSession: Send {
    /// Session type of the transport this session runs over
    fn session_type(&self) -> &str;

    /// Send a command and return the device output
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError>;
}

/// Logic run right after a transport connects, before the session is handed back
#[async_trait]
pub trait OnSessionStart: fmt::Debug + Send + Sync {
    /// Run the hook against a freshly opened session, logging under `span`
    async fn on_session_start(
        &self,
        session: &mut dyn CliSession,
        span: &Span,
    ) -> Result<(), SessionError>;
}

/// Hook that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSessionStart;

#[async_trait]
impl OnSessionStart for NoopSessionStart {
    async fn on_session_start(
        &self,
        _session: &mut dyn CliSession,
        _span: &Span,
    ) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Hook that sends a fixed list of commands, e.g. `no logging console`
#[derive(Debug, Clone, Default)]
pub struct StartupCommands {
    commands: Vec<String>,
}

impl StartupCommands {
    /// Create a hook from an ordered command list
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Commands in send order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

#[async_trait]
impl OnSessionStart for StartupCommands {
    async fn on_session_start(
        &self,
        session: &mut dyn CliSession,
        span: &Span,
    ) -> Result<(), SessionError> {
        for command in &self.commands {
            debug!(
                parent: span,
                "Running startup command on {} session: {}",
                session.session_type(),
                command
            );
            if let Err(e) = session.send_command(command).await {
                warn!(parent: span, "Startup command '{}' failed: {}", command, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Session that records commands and fails on a marker
    struct RecordingSession {
        sent: Vec<String>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl CliSession for RecordingSession {
        fn session_type(&self) -> &str {
            "SSH"
        }

        async fn send_command(&mut self, command: &str) -> Result<String, SessionError> {
            self.sent.push(command.to_string());
            if self.fail_on.map_or(false, |marker| marker == command) {
                return Err(SessionError::Command {
                    command: command.to_string(),
                    message: "% Invalid input".to_string(),
                });
            }
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_noop_hook() {
        let mut session = RecordingSession { sent: Vec::new(), fail_on: None };
        NoopSessionStart.on_session_start(&mut session, &Span::none()).await.unwrap();
        assert!(session.sent.is_empty());
    }

    #[tokio::test]
    async fn test_startup_commands_in_order() {
        let hook = StartupCommands::new(["terminal length 0", "no logging console"]);
        let mut session = RecordingSession { sent: Vec::new(), fail_on: None };

        hook.on_session_start(&mut session, &Span::none()).await.unwrap();
        assert_eq!(session.sent, vec!["terminal length 0", "no logging console"]);
    }

    #[tokio::test]
    async fn test_startup_commands_stop_at_first_failure() {
        let hook = StartupCommands::new(["terminal length 0", "bogus", "no logging console"]);
        let mut session = RecordingSession { sent: Vec::new(), fail_on: Some("bogus") };

        let result = hook.on_session_start(&mut session, &Span::none()).await;
        assert!(matches!(result, Err(SessionError::Command { .. })));
        assert_eq!(session.sent, vec!["terminal length 0", "bogus"]);
    }

    #[test]
    fn test_startup_commands_log_under_span() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&logs);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || LogSink(Arc::clone(&sink)))
            .finish();

        let hook = StartupCommands::new(["no logging console"]);
        let mut session = RecordingSession { sent: Vec::new(), fail_on: None };
        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("switch_01");
            tokio_test::block_on(hook.on_session_start(&mut session, &span)).unwrap();
        });

        let output = String::from_utf8_lossy(&logs.lock().unwrap()).to_string();
        let line = output
            .lines()
            .find(|l| l.contains("Running startup command"))
            .expect("startup command was not logged");
        assert!(line.contains("switch_01"), "span missing from: {}", line);
        assert!(line.contains("no logging console"));
    }

    /// Writer appending to a shared buffer
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_startup_commands_accessor() {
        let hook = StartupCommands::new(vec!["terminal width 0".to_string()]);
        assert_eq!(hook.commands(), &["terminal width 0".to_string()]);
    }
}
