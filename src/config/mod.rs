// file: src/config/mod.rs
// version: 2.1.0
// guid: 3e9a1f7c-5b2d-4c8e-a061-7d4f2b9c1e53

//! Configuration for hammer-dispatch
//!
//! Settings are read from TOML with `${VAR}` expansion and then overridden by
//! `HAMMER_DISPATCH_<SECTION>_<OPTION>` environment variables. See [`loader`].

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{DispatchError, Result};
use serde::{Deserialize, Serialize};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub hammer: HammerConfig,
    pub execution: ExecutionConfig,
}

/// Server under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub scheme: String,
    pub admin_username: String,
    pub admin_password: String,
    pub ssh_username: String,
    pub ssh_key: Option<String>,
    pub ssh_port: Option<u16>,
}

/// Front-end arguments placed ahead of every hammer command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HammerConfig {
    pub binary: String,
    pub verbose: bool,
    pub output: Option<OutputFormat>,
    pub locale: Option<String>,
}

/// Output formats understood by `hammer --output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Base,
    Table,
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Base => "base",
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DispatchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(OutputFormat::Base),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(DispatchError::config(format!(
                "Unknown hammer output format: {}",
                other
            ))),
        }
    }
}

/// How the hammer process is reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    pub mode: ExecutionMode,
    pub timeout_seconds: Option<u64>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Spawn hammer on this machine
    #[default]
    Local,
    /// Run hammer on the server host through the system ssh client
    Ssh,
}

impl std::str::FromStr for ExecutionMode {
    type Err = DispatchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(ExecutionMode::Local),
            "ssh" => Ok(ExecutionMode::Ssh),
            other => Err(DispatchError::config(format!(
                "Unknown execution mode: {}",
                other
            ))),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            port: None,
            scheme: "https".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "changeme".to_string(),
            ssh_username: "root".to_string(),
            ssh_key: None,
            ssh_port: None,
        }
    }
}

impl Default for HammerConfig {
    fn default() -> Self {
        Self {
            binary: "hammer".to_string(),
            verbose: true,
            output: Some(OutputFormat::Csv),
            locale: Some("en_US.UTF-8".to_string()),
        }
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Local,
            timeout_seconds: None,
            dry_run: false,
        }
    }
}

impl ServerConfig {
    /// Base URL of the deployment: `scheme://hostname[:port]`
    pub fn url(&self) -> Result<String> {
        let hostname = self
            .hostname()
            .ok_or_else(|| DispatchError::config("[server] hostname must be provided."))?;
        let scheme = if self.scheme.is_empty() {
            "https"
        } else {
            self.scheme.as_str()
        };

        // port 0 means unset
        Ok(match self.port.filter(|port| *port != 0) {
            Some(port) => format!("{}://{}:{}", scheme, hostname, port),
            None => format!("{}://{}", scheme, hostname),
        })
    }

    /// Configured hostname, treating a blank value as missing
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref().filter(|host| !host.trim().is_empty())
    }

    /// Admin credentials used for hammer authentication
    pub fn credentials(&self) -> (&str, &str) {
        (&self.admin_username, &self.admin_password)
    }
}

impl Config {
    /// Collect every configuration problem instead of stopping at the first
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.hammer.binary.trim().is_empty() {
            errors.push("[hammer] binary must not be empty.".to_string());
        }

        if !matches!(self.server.scheme.as_str(), "http" | "https") {
            errors.push(format!(
                "[server] scheme must be http or https, got '{}'.",
                self.server.scheme
            ));
        }

        if self.execution.timeout_seconds == Some(0) {
            errors.push("[execution] timeout_seconds must be greater than zero.".to_string());
        }

        if self.execution.mode == ExecutionMode::Ssh {
            if self.server.hostname().is_none() {
                errors.push("[server] hostname must be provided for ssh execution.".to_string());
            }
            if self.server.ssh_username.trim().is_empty() {
                errors.push("[server] ssh_username must not be empty.".to_string());
            }
        }

        errors
    }

    /// Fail with every problem found, if any
    pub fn validate(&self) -> Result<()> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::Validation(errors))
        }
    }
}
