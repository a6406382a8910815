//! # shellcli
//!
//! Session acquisition policy for network device command-line shells.
//!
//! Given a resource configuration (address, credentials, preferred transport)
//! shellcli decides which transports to try and in which order, binds the
//! right initializer to each (password or key based), and hands the ordered
//! candidate list to the collaborator that opens the session in the
//! requested operating mode.
//!
//! ```rust,no_run
//! use shellcli::{CliServiceConfigurator, GenericCliConfig};
//! # use shellcli::session::{SessionDescriptor, SessionError, SessionOpener};
//! # use tracing::Span;
//! # struct Pool;
//! # #[async_trait::async_trait]
//! # impl SessionOpener<&'static str> for Pool {
//! #     type Handle = ();
//! #     async fn get_session(&self, _: Vec<SessionDescriptor>, _: &'static str, _: &Span)
//! #         -> Result<(), SessionError> { Ok(()) }
//! # }
//! # async fn run() -> shellcli::Result<()> {
//! let config = GenericCliConfig::new("192.168.1.1")
//!     .with_user("admin")
//!     .with_password("secret")
//!     .with_connection_type("auto");
//!
//! let cli = CliServiceConfigurator::new(config, Pool);
//! let _session = cli.get_cli_service("enable").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use shellcli_session as session;

/// Error types for shellcli
pub mod error;

/// Resource configuration accessors
pub mod config;

/// Write-once credential memoization
pub mod credentials;

/// Registered transports and their initializers
pub mod registry;

/// Candidate resolution and descriptor building
pub mod resolver;

/// CLI service acquisition
pub mod configurator;

/// Enable/config mode extension contract
pub mod mode;

pub use error::{CliError, ConfigError};
pub use config::{ResourceConfig, GenericCliConfig};
pub use credentials::CredentialCache;
pub use registry::{TransportRegistry, Initializer};
pub use resolver::SessionResolver;
pub use configurator::CliServiceConfigurator;
pub use mode::ModeConfigurator;

/// Result type alias for shellcli operations
pub type Result<T> = std::result::Result<T, CliError>;
