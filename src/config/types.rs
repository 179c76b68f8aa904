//! Core configuration types and loading.

use serde::Deserialize;
use slirc_proto::Command;
use std::path::Path;
use thiserror::Error;

use super::defaults::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REAL_NAME, default_host, default_port, default_real_name,
};
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Session configuration.
///
/// On-disk keys keep the short names of the classic client config
/// (`real`, `sys`, `user`). Missing strings deserialize as empty and are
/// reported by [`validate`] so every problem surfaces at once.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// IRC server hostname or IP address.
    #[serde(default)]
    pub server: String,
    /// Server port; 0 means [`DEFAULT_PORT`].
    #[serde(default = "default_port")]
    pub port: u16,
    /// Nickname to register.
    #[serde(default)]
    pub nick: String,
    /// Real name sent in the USER line.
    #[serde(rename = "real", default = "default_real_name")]
    pub real_name: String,
    /// Host field of the USER line. Servers ignore it from clients; this
    /// client sends `*` when it is left empty.
    #[serde(default = "default_host")]
    pub host: String,
    /// System name field of the USER line.
    #[serde(rename = "sys", default)]
    pub system_name: String,
    /// Username (ident), also used for NickServ identification.
    #[serde(rename = "user", default)]
    pub user_name: String,
    /// Channels to join, in order.
    #[serde(default)]
    pub channels: Vec<String>,
    /// NickServ password. Empty or absent skips identification.
    #[serde(default)]
    pub password: Option<String>,
    /// Accepted for compatibility; the session never reconnects on its own.
    #[serde(default)]
    pub reconnect: bool,
}

impl SessionConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Effective port.
    pub fn port(&self) -> u16 {
        if self.port == 0 {
            DEFAULT_PORT
        } else {
            self.port
        }
    }

    /// Effective real name.
    pub fn real_name(&self) -> &str {
        if self.real_name.is_empty() {
            DEFAULT_REAL_NAME
        } else {
            &self.real_name
        }
    }

    /// Effective host field.
    pub fn host(&self) -> &str {
        if self.host.is_empty() {
            DEFAULT_HOST
        } else {
            &self.host
        }
    }

    /// NickServ password, if one is configured.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// `server:port` string used for resolution.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port())
    }

    /// The USER registration command.
    pub fn userline(&self) -> Command {
        Command::USER {
            user: self.user_name.clone(),
            host: self.host().to_string(),
            system: self.system_name.clone(),
            realname: self.real_name().to_string(),
        }
    }
}
