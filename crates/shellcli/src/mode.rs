//! Enable/config mode extension contract

use crate::{CliServiceConfigurator, Result};
use async_trait::async_trait;
use shellcli_session::SessionOpener;

/// Implemented by shells to say what "enable mode" and "config mode" mean
///
/// Both mode accessors are required: a shell that leaves either out does
/// not compile.
///
/// ```compile_fail
/// use shellcli::{CliServiceConfigurator, ModeConfigurator};
/// # use shellcli::session::{SessionDescriptor, SessionError, SessionOpener};
/// # use tracing::Span;
/// # struct Pool;
/// # #[async_trait::async_trait]
/// # impl SessionOpener<&'static str> for Pool {
/// #     type Handle = ();
/// #     async fn get_session(&self, _: Vec<SessionDescriptor>, _: &'static str, _: &Span)
/// #         -> Result<(), SessionError> { Ok(()) }
/// # }
/// struct EnableOnly {
///     cli: CliServiceConfigurator<Pool>,
/// }
///
/// impl ModeConfigurator for EnableOnly {
///     type Mode = &'static str;
///     type Opener = Pool;
///
///     fn enable_mode(&self) -> Self::Mode {
///         "enable"
///     }
///
///     fn cli_configurator(&self) -> &CliServiceConfigurator<Pool> {
///         &self.cli
///     }
/// }
/// ```
#[async_trait]
pub trait ModeConfigurator: Send + Sync {
    /// Operating-mode token understood by the opener
    type Mode: Send + 'static;

    /// Session opener the shell's configurator delegates to
    type Opener: SessionOpener<Self::Mode>;

    /// Mode token for enable (privileged) mode
    fn enable_mode(&self) -> Self::Mode;

    /// Mode token for configuration mode
    fn config_mode(&self) -> Self::Mode;

    /// Configurator used to acquire sessions
    fn cli_configurator(&self) -> &CliServiceConfigurator<Self::Opener>;

    /// Session in enable mode
    async fn enable_mode_service(
        &self,
    ) -> Result<<Self::Opener as SessionOpener<Self::Mode>>::Handle> {
        self.cli_configurator().get_cli_service(self.enable_mode()).await
    }

    /// Session in config mode
    async fn config_mode_service(
        &self,
    ) -> Result<<Self::Opener as SessionOpener<Self::Mode>>::Handle> {
        self.cli_configurator().get_cli_service(self.config_mode()).await
    }
}
