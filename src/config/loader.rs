// file: src/config/loader.rs
// version: 2.1.0
// guid: 8c4f2a6d-1e7b-4d93-b5a0-2f9e6c3d8a71

//! Configuration file loading, environment variable substitution and overrides

use super::{Config, ExecutionMode, OutputFormat};
use crate::error::{DispatchError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::{debug, info};

/// Prefix of environment overrides, e.g. `HAMMER_DISPATCH_SERVER_HOSTNAME`
pub const ENV_PREFIX: &str = "HAMMER_DISPATCH";

/// Name of the per-project settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".hammer-dispatch.toml";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader that sees the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader with an explicit environment, ignoring the process one
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Set environment variable for substitution and overrides
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Load configuration from an explicit path, or discover it.
    ///
    /// Discovery order: user config directory, then the project file in the
    /// working directory, then environment overrides. Options set in a later
    /// file override the same options of an earlier one; everything else is
    /// kept. Missing files are not an error.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Config> {
        let mut merged = Table::new();

        if let Some(path) = explicit {
            let path = expand_path(path)?;
            info!("Loading configuration from: {}", path.display());
            merged = self.read_table(&path)?;
        } else {
            for path in Self::discovery_paths() {
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    merge_tables(&mut merged, self.read_table(&path)?);
                }
            }
        }

        let mut config: Config = Value::Table(merged).try_into()?;
        self.apply_env_overrides(&mut config)?;
        debug!("Final configuration: {:#?}", config.redacted());
        Ok(config)
    }

    /// Load a single TOML settings file without applying overrides
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Config> {
        Ok(Value::Table(self.read_table(path.as_ref())?).try_into()?)
    }

    fn read_table(&self, path: &Path) -> Result<Table> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DispatchError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        Ok(toml::from_str(&expanded)?)
    }

    fn discovery_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("hammer-dispatch").join("config.toml"));
        }
        paths.push(PathBuf::from(PROJECT_CONFIG_FILE));
        paths
    }

    /// Expand environment variables in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| DispatchError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let expanded = re.replace_all(content, |cap: &regex::Captures| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(cap[1].to_string());
                    cap[0].to_string()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(DispatchError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(expanded.into_owned())
    }

    fn env(&self, section: &str, option: &str) -> Option<&str> {
        let key = format!(
            "{}_{}_{}",
            ENV_PREFIX,
            section.to_ascii_uppercase(),
            option.to_ascii_uppercase()
        );
        // set but empty counts as unset
        self.env_vars
            .get(&key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Apply `HAMMER_DISPATCH_<SECTION>_<OPTION>` overrides
    fn apply_env_overrides(&self, config: &mut Config) -> Result<()> {
        let server = &mut config.server;
        if let Some(v) = self.env("server", "hostname") {
            server.hostname = Some(v.to_string());
        }
        if let Some(v) = self.env("server", "port") {
            server.port = Some(parse_override("server", "port", v)?);
        }
        if let Some(v) = self.env("server", "scheme") {
            server.scheme = v.to_string();
        }
        if let Some(v) = self.env("server", "admin_username") {
            server.admin_username = v.to_string();
        }
        if let Some(v) = self.env("server", "admin_password") {
            server.admin_password = v.to_string();
        }
        if let Some(v) = self.env("server", "ssh_username") {
            server.ssh_username = v.to_string();
        }
        if let Some(v) = self.env("server", "ssh_key") {
            server.ssh_key = Some(v.to_string());
        }
        if let Some(v) = self.env("server", "ssh_port") {
            server.ssh_port = Some(parse_override("server", "ssh_port", v)?);
        }

        let hammer = &mut config.hammer;
        if let Some(v) = self.env("hammer", "binary") {
            hammer.binary = v.to_string();
        }
        if let Some(v) = self.env("hammer", "verbose") {
            hammer.verbose = parse_override("hammer", "verbose", v)?;
        }
        if let Some(v) = self.env("hammer", "output") {
            hammer.output = Some(v.parse::<OutputFormat>()?);
        }
        if let Some(v) = self.env("hammer", "locale") {
            hammer.locale = Some(v.to_string());
        }

        let execution = &mut config.execution;
        if let Some(v) = self.env("execution", "mode") {
            execution.mode = v.parse::<ExecutionMode>()?;
        }
        if let Some(v) = self.env("execution", "timeout_seconds") {
            execution.timeout_seconds = Some(parse_override("execution", "timeout_seconds", v)?);
        }
        if let Some(v) = self.env("execution", "dry_run") {
            execution.dry_run = parse_override("execution", "dry_run", v)?;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Copy of the configuration safe to log
    pub fn redacted(&self) -> Config {
        let mut copy = self.clone();
        copy.server.admin_password = "********".to_string();
        copy
    }
}

/// Merge `overlay` into `base` one level deep: sections are combined and
/// options in `overlay` win
fn merge_tables(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match value {
            Value::Table(options) => match base.get_mut(&key) {
                Some(Value::Table(section)) => section.extend(options),
                _ => {
                    base.insert(key, Value::Table(options));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

fn parse_override<T: std::str::FromStr>(section: &str, option: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        DispatchError::config(format!(
            "Invalid value '{}' for {}_{}_{}: {}",
            value,
            ENV_PREFIX,
            section.to_ascii_uppercase(),
            option.to_ascii_uppercase(),
            e
        ))
    })
}

/// Expand `~` and `$VAR` in a user supplied path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .map_err(|e| DispatchError::config(format!("Cannot expand path {}: {}", raw, e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}
