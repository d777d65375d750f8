// file: src/executor/mod.rs
// version: 2.0.0
// guid: 7a1c3e5f-2b4d-4e6f-9a8b-0c1d2e3f4a5b

//! External process invocation
//!
//! A [`CommandExecutor`] receives a composed [`CommandLine`]
//! (`<base> <subcommand> <args...>`), prefixes it with the hammer front-end
//! arguments and runs it either on this machine ([`LocalExecutor`]) or on the
//! server host over ssh ([`SshExecutor`]).

pub mod hammer;
pub mod local;
pub mod ssh;

pub use hammer::HammerCommand;
pub use local::LocalExecutor;
pub use ssh::SshExecutor;

use crate::config::{Config, ExecutionMode};
use crate::error::{DispatchError, Result};
use crate::output::InvocationResult;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Ordered tokens of one invocation: base, subcommand, then arguments verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn compose<S: AsRef<str>>(base: &str, subcommand: &str, arguments: &[S]) -> Self {
        let mut tokens = Vec::with_capacity(arguments.len() + 2);
        tokens.push(base.to_string());
        tokens.push(subcommand.to_string());
        tokens.extend(arguments.iter().map(|a| a.as_ref().to_string()));
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn base(&self) -> &str {
        &self.tokens[0]
    }

    pub fn subcommand(&self) -> &str {
        &self.tokens[1]
    }

    pub fn arguments(&self) -> &[String] {
        &self.tokens[2..]
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Trait for running a composed command line through hammer
#[async_trait::async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Run the command and return its exit status and captured output.
    ///
    /// A non-zero exit status is a successful return; only failures to run
    /// the process at all (spawn, transport, timeout) are errors.
    async fn execute(&self, command: &CommandLine) -> Result<InvocationResult>;
}

/// Build the executor selected by `[execution] mode`
pub fn build_executor(config: &Config) -> Result<Arc<dyn CommandExecutor>> {
    let executor: Arc<dyn CommandExecutor> = match config.execution.mode {
        ExecutionMode::Local => Arc::new(LocalExecutor::from_config(config)),
        ExecutionMode::Ssh => Arc::new(SshExecutor::from_config(config)?),
    };
    Ok(executor)
}

/// Await a child process, bounded by an optional timeout
pub(crate) async fn wait_with_timeout<F, T>(
    future: F,
    timeout: Option<Duration>,
    command: &str,
) -> Result<T>
where
    F: Future<Output = T>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, future)
            .await
            .map_err(|_| DispatchError::Timeout {
                command: command.to_string(),
                seconds: limit.as_secs(),
            }),
        None => Ok(future.await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_without_arguments() {
        let line = CommandLine::compose::<&str>("environment", "list", &[]);

        assert_eq!(line.tokens().len(), 2);
        assert_eq!(line.to_string(), "environment list");
        assert!(line.arguments().is_empty());
    }

    #[test]
    fn test_compose_keeps_argument_order_and_duplicates() {
        let line = CommandLine::compose("host", "update", &["--name=a", "--name=a", "-v"]);

        assert_eq!(line.base(), "host");
        assert_eq!(line.subcommand(), "update");
        assert_eq!(line.arguments(), &["--name=a", "--name=a", "-v"]);
    }

    #[tokio::test]
    async fn test_wait_with_timeout_elapsed() {
        let result = wait_with_timeout(
            tokio::time::sleep(Duration::from_secs(5)),
            Some(Duration::from_millis(10)),
            "task progress --id=1",
        )
        .await;

        assert!(matches!(result, Err(DispatchError::Timeout { .. })));
    }

    #[tokio::test]
    async fn test_wait_without_timeout() {
        let result = wait_with_timeout(async { 7 }, None, "settings list").await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_build_executor_by_mode() {
        let mut config = Config::default();
        assert_eq!(build_executor(&config).unwrap().name(), "local");

        config.execution.mode = ExecutionMode::Ssh;
        config.server.hostname = Some("sat.example.com".to_string());
        assert_eq!(build_executor(&config).unwrap().name(), "ssh");
    }
}
