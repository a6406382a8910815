//! Resource configuration accessors

use crate::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

/// Read-only view of a device's CLI resource attributes
///
/// `password` and `private_key` may be expensive (a secrets-store round
/// trip), so callers go through [`CredentialCache`](crate::CredentialCache)
/// rather than reading them repeatedly.
pub trait ResourceConfig: Send + Sync {
    /// Device address
    fn address(&self) -> &str;

    /// Login username
    fn user(&self) -> &str;

    /// Login password
    fn password(&self) -> Result<String, ConfigError>;

    /// Private key material for key-based transports
    fn private_key(&self) -> Result<String, ConfigError>;

    /// CLI port, 0 when unset
    fn cli_tcp_port(&self) -> u16;

    /// Preferred connection type: `ssh`, `telnet`, `auto`, ...
    fn cli_connection_type(&self) -> &str;
}

/// Plain resource configuration record
///
/// Deserializes from either snake_case keys or the shell-standard attribute
/// names (`"User"`, `"CLI TCP Port"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenericCliConfig {
    /// Device address
    #[serde(alias = "Address")]
    pub address: String,
    /// Login username
    #[serde(default, alias = "User")]
    pub user: String,
    /// Login password
    #[serde(default, alias = "Password")]
    pub password: String,
    /// Private key material
    #[serde(default, alias = "Private Key")]
    pub private_key: Option<String>,
    /// CLI port, 0 when unset
    #[serde(default, alias = "CLI TCP Port")]
    pub cli_tcp_port: u16,
    /// Preferred connection type
    #[serde(default = "default_connection_type", alias = "CLI Connection Type")]
    pub cli_connection_type: String,
}

fn default_connection_type() -> String {
    "auto".to_string()
}

impl GenericCliConfig {
    /// Configuration for `address` with every other attribute at its default
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            user: String::new(),
            password: String::new(),
            private_key: None,
            cli_tcp_port: 0,
            cli_connection_type: default_connection_type(),
        }
    }

    /// Build from a shell attribute map such as `{"User": "admin", "CLI TCP Port": "22"}`
    ///
    /// Snake_case keys are accepted as well. Unknown attributes are ignored.
    pub fn from_attributes(attributes: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |names: [&str; 2]| names.iter().find_map(|n| attributes.get(*n));

        let address = lookup(["Address", "address"])
            .filter(|a| !a.is_empty())
            .ok_or(ConfigError::MissingAttribute("address"))?;
        let mut config = Self::new(address.as_str());

        if let Some(user) = lookup(["User", "user"]) {
            config.user = user.clone();
        }
        if let Some(password) = lookup(["Password", "password"]) {
            config.password = password.clone();
        }
        if let Some(key) = lookup(["Private Key", "private_key"]).filter(|k| !k.is_empty()) {
            config.private_key = Some(key.clone());
        }
        if let Some(port) = lookup(["CLI TCP Port", "cli_tcp_port"]) {
            let port = port.trim();
            config.cli_tcp_port = if port.is_empty() {
                0
            } else {
                port.parse().map_err(|e| ConfigError::InvalidAttribute {
                    name: "cli_tcp_port",
                    reason: format!("'{}': {}", port, e),
                })?
            };
        }
        if let Some(connection_type) = lookup(["CLI Connection Type", "cli_connection_type"]) {
            config.cli_connection_type = connection_type.clone();
        }

        Ok(config)
    }

    /// Set the username
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the private key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set the CLI port
    pub fn with_port(mut self, port: u16) -> Self {
        self.cli_tcp_port = port;
        self
    }

    /// Set the connection type
    pub fn with_connection_type(mut self, connection_type: impl Into<String>) -> Self {
        self.cli_connection_type = connection_type.into();
        self
    }
}

impl ResourceConfig for GenericCliConfig {
    fn address(&self) -> &str {
        &self.address
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn password(&self) -> Result<String, ConfigError> {
        Ok(self.password.clone())
    }

    fn private_key(&self) -> Result<String, ConfigError> {
        match self.private_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(ConfigError::MissingAttribute("private_key")),
        }
    }

    fn cli_tcp_port(&self) -> u16 {
        self.cli_tcp_port
    }

    fn cli_connection_type(&self) -> &str {
        &self.cli_connection_type
    }
}
