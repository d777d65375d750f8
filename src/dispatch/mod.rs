// file: src/dispatch/mod.rs
// version: 1.0.0
// guid: 6b0d2f4a-8c1e-4a3b-9d5f-2e4a6c8b0d1f

//! Command groups and subcommand dispatch
//!
//! A command group is a fixed base name such as `environment` plus the
//! subcommands documented for it. Invoking a subcommand composes
//! `<base> <subcommand> <args...>` and hands it to a shared
//! [`CommandExecutor`]; the executor's result comes back untouched.

pub mod groups;
pub mod options;
pub mod registry;

pub use groups::{GroupSpec, CATALOGUE};
pub use options::{OptionValue, Options};
pub use registry::Registry;

use crate::error::{DispatchError, Result};
use crate::executor::{CommandExecutor, CommandLine};
use crate::output::InvocationResult;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A documented subcommand of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subcommand {
    pub name: String,
    pub about: String,
}

impl Subcommand {
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
        }
    }
}

/// Capability shared by every command group
#[async_trait::async_trait]
pub trait CommandGroup: Send + Sync {
    /// Fixed base name placed first on the command line
    fn base(&self) -> &str;

    /// One-line description of the group
    fn about(&self) -> &str {
        ""
    }

    /// Documented subcommands, in documentation order
    fn subcommands(&self) -> &[Subcommand];

    /// Whether `name` is one of the documented subcommands
    fn documents(&self, name: &str) -> bool {
        self.subcommands().iter().any(|s| s.name == name)
    }

    /// Run `<base> <subcommand> <arguments...>` and return the raw result
    async fn invoke(&self, subcommand: &str, arguments: &[String]) -> Result<InvocationResult>;
}

/// Command group backed by an external executor
pub struct Dispatcher {
    base: String,
    about: String,
    subcommands: Vec<Subcommand>,
    executor: Arc<dyn CommandExecutor>,
}

impl Dispatcher {
    pub fn new(base: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            base: base.into(),
            about: String::new(),
            subcommands: Vec::new(),
            executor,
        }
    }

    /// Build a dispatcher for a catalogue entry
    pub fn from_spec(spec: &GroupSpec, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            base: spec.base.to_string(),
            about: spec.about.to_string(),
            subcommands: spec
                .subcommands
                .iter()
                .map(|(name, about)| Subcommand::new(*name, *about))
                .collect(),
            executor,
        }
    }

    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = about.into();
        self
    }

    pub fn with_subcommand(mut self, name: impl Into<String>, about: impl Into<String>) -> Self {
        self.subcommands.push(Subcommand::new(name, about));
        self
    }

    /// Render `options` into `--key=value` tokens and invoke
    pub async fn invoke_with_options(
        &self,
        subcommand: &str,
        options: &Options,
    ) -> Result<InvocationResult> {
        self.invoke(subcommand, &options.to_args()).await
    }
}

/// Subcommands are single non-empty tokens
pub fn check_subcommand(subcommand: &str) -> Result<()> {
    if subcommand.is_empty() {
        return Err(DispatchError::invalid_argument("subcommand must not be empty"));
    }
    if subcommand.chars().any(char::is_whitespace) {
        return Err(DispatchError::invalid_argument(format!(
            "subcommand must be a single token, got '{}'",
            subcommand
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl CommandGroup for Dispatcher {
    fn base(&self) -> &str {
        &self.base
    }

    fn about(&self) -> &str {
        &self.about
    }

    fn subcommands(&self) -> &[Subcommand] {
        &self.subcommands
    }

    async fn invoke(&self, subcommand: &str, arguments: &[String]) -> Result<InvocationResult> {
        check_subcommand(subcommand)?;

        if !self.documents(subcommand) {
            debug!(
                "'{}' is not a documented {} subcommand, forwarding anyway",
                subcommand, self.base
            );
        }

        let command = CommandLine::compose(&self.base, subcommand, arguments);
        debug!("Dispatching via {} executor: {}", self.executor.name(), command);
        self.executor.execute(&command).await
    }
}

/// Recording executor shared by the dispatch tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    pub(crate) struct RecordingExecutor {
        pub calls: Mutex<Vec<CommandLine>>,
        pub status: Option<i32>,
    }

    impl RecordingExecutor {
        pub fn new() -> Arc<Self> {
            Self::with_status(Some(0))
        }

        pub fn with_status(status: Option<i32>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                status,
            })
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl CommandExecutor for RecordingExecutor {
        fn name(&self) -> &str {
            "recording"
        }

        async fn execute(&self, command: &CommandLine) -> Result<InvocationResult> {
            self.calls.lock().unwrap().push(command.clone());
            Ok(InvocationResult::new(
                command.to_string(),
                self.status,
                "out",
                "err",
            ))
        }
    }
}
