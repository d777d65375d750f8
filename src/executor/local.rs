// file: src/executor/local.rs
// version: 2.0.0
// guid: 9e4a6c8b-0d2f-4b1e-a3c5-7f9d1b3e5a7c

//! Run hammer on this machine

use super::{wait_with_timeout, CommandExecutor, CommandLine, HammerCommand};
use crate::config::Config;
use crate::error::{DispatchError, Result};
use crate::output::InvocationResult;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Spawns hammer directly with an argument vector; no shell is involved
pub struct LocalExecutor {
    hammer: HammerCommand,
    timeout: Option<Duration>,
    dry_run: bool,
}

impl LocalExecutor {
    pub fn new(hammer: HammerCommand) -> Self {
        Self {
            hammer,
            timeout: None,
            dry_run: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(HammerCommand::new(&config.hammer, &config.server))
            .with_timeout(config.execution.timeout_seconds.map(Duration::from_secs))
            .with_dry_run(config.execution.dry_run)
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[async_trait::async_trait]
impl CommandExecutor for LocalExecutor {
    fn name(&self) -> &str {
        "local"
    }

    async fn execute(&self, command: &CommandLine) -> Result<InvocationResult> {
        let rendered = self.hammer.render(command);

        if self.dry_run {
            info!("DRY RUN: Would execute: {}", rendered);
            return Ok(InvocationResult::new(
                command.to_string(),
                Some(0),
                format!("{}\n", rendered),
                "",
            ));
        }

        let program = which::which(self.hammer.program()).map_err(|e| {
            DispatchError::spawn(
                self.hammer.program(),
                std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
            )
        })?;

        debug!("Executing local command: {}", rendered);

        let mut cmd = Command::new(&program);
        cmd.args(self.hammer.args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(locale) = self.hammer.locale() {
            cmd.env("LANG", locale);
        }

        let output = wait_with_timeout(cmd.output(), self.timeout, &rendered)
            .await?
            .map_err(|e| DispatchError::spawn(program.display().to_string(), e))?;

        let result = InvocationResult::from_output(command.to_string(), &output);
        if result.success() {
            debug!("Command completed: {}", command);
        } else {
            warn!("Command '{}' exited with {:?}", command, result.status);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HammerConfig, ServerConfig};

    fn executor_for(binary: &str) -> LocalExecutor {
        let hammer = HammerConfig {
            binary: binary.to_string(),
            verbose: false,
            output: None,
            locale: None,
        };
        let server = ServerConfig {
            admin_username: String::new(),
            ..ServerConfig::default()
        };
        LocalExecutor::new(HammerCommand::new(&hammer, &server))
    }

    #[tokio::test]
    async fn test_dry_run_spawns_nothing() {
        let executor = LocalExecutor::from_config(&Config::default()).with_dry_run(true);
        let line = CommandLine::compose::<&str>("environment", "list", &[]);

        let result = executor.execute(&line).await.unwrap();

        assert!(result.success());
        assert_eq!(result.command, "environment list");
        assert!(result.stdout.contains("--output=csv environment list"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let executor = executor_for("hammer-binary-that-does-not-exist");
        let line = CommandLine::compose::<&str>("environment", "list", &[]);

        let result = executor.execute(&line).await;

        assert!(matches!(result, Err(DispatchError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_arguments_reach_process_verbatim() {
        let executor = executor_for("echo");
        let line = CommandLine::compose("environment", "create", &["--name=dev", "a b"]);

        let result = executor.execute(&line).await.unwrap();

        assert!(result.success());
        assert_eq!(result.stdout, "environment create --name=dev a b\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_returned_unchanged() {
        let executor = executor_for("false");
        let line = CommandLine::compose::<&str>("environment", "delete", &[]);

        let result = executor.execute(&line).await.unwrap();

        assert_eq!(result.status, Some(1));
        assert!(!result.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout() {
        let executor = executor_for("sleep").with_timeout(Some(Duration::from_millis(50)));
        // base and subcommand double as sleep durations
        let line = CommandLine::compose::<&str>("5", "5", &[]);

        let result = executor.execute(&line).await;

        assert!(matches!(result, Err(DispatchError::Timeout { .. })));
    }
}
