// file: src/executor/ssh.rs
// version: 2.1.0
// guid: 4c8e0a2b-6d1f-4e3a-b5c7-9d0e2f4a6b8c

//! Run hammer on the server host through the system ssh client

use super::{wait_with_timeout, CommandExecutor, CommandLine, HammerCommand};
use crate::config::{loader::expand_path, Config};
use crate::error::{DispatchError, Result};
use crate::output::InvocationResult;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Exit status ssh reserves for its own connection failures
const SSH_TRANSPORT_FAILURE: i32 = 255;

/// Executes hammer remotely with `ssh -o BatchMode=yes user@host -- <command>`
pub struct SshExecutor {
    hammer: HammerCommand,
    host: String,
    username: String,
    port: Option<u16>,
    identity: Option<PathBuf>,
    timeout: Option<Duration>,
    dry_run: bool,
}

impl SshExecutor {
    pub fn new(hammer: HammerCommand, host: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            hammer,
            host: host.into(),
            username: username.into(),
            port: None,
            identity: None,
            timeout: None,
            dry_run: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let host = config.server.hostname().ok_or_else(|| {
            DispatchError::config("[server] hostname must be provided for ssh execution.")
        })?;
        let identity = match config.server.ssh_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Some(expand_path(Path::new(key))?),
            None => None,
        };

        let mut executor = Self::new(
            HammerCommand::new(&config.hammer, &config.server),
            host,
            config.server.ssh_username.clone(),
        );
        executor.port = config.server.ssh_port;
        executor.identity = identity;
        executor.timeout = config.execution.timeout_seconds.map(Duration::from_secs);
        executor.dry_run = config.execution.dry_run;
        Ok(executor)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Shell command line run on the remote host
    pub fn remote_command(&self, command: &CommandLine) -> String {
        self.quote_remote(self.hammer.argv(command))
    }

    /// Arguments passed to the local ssh client
    pub fn ssh_args(&self, command: &CommandLine) -> Vec<String> {
        self.client_args(self.remote_command(command))
    }

    /// Full ssh invocation with the password masked
    pub fn render(&self, command: &CommandLine) -> String {
        let remote = self.quote_remote(self.hammer.masked_argv(command));
        let mut argv = vec!["ssh".to_string()];
        argv.extend(self.client_args(remote));
        shell_words::join(argv)
    }

    fn quote_remote(&self, argv: Vec<String>) -> String {
        let quoted = shell_words::join(argv);
        match self.hammer.locale() {
            Some(locale) => format!("LANG={} {}", shell_words::quote(locale), quoted),
            None => quoted,
        }
    }

    fn client_args(&self, remote: String) -> Vec<String> {
        let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.identity {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push(format!("{}@{}", self.username, self.host));
        args.push("--".to_string());
        args.push(remote);
        args
    }
}

#[async_trait::async_trait]
impl CommandExecutor for SshExecutor {
    fn name(&self) -> &str {
        "ssh"
    }

    async fn execute(&self, command: &CommandLine) -> Result<InvocationResult> {
        let rendered = self.render(command);

        if self.dry_run {
            info!("DRY RUN: Would execute: {}", rendered);
            return Ok(InvocationResult::new(
                command.to_string(),
                Some(0),
                format!("{}\n", rendered),
                "",
            ));
        }

        debug!("Executing remote command: {}", rendered);

        let mut cmd = Command::new("ssh");
        cmd.args(self.ssh_args(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = wait_with_timeout(cmd.output(), self.timeout, &rendered)
            .await?
            .map_err(|e| DispatchError::spawn("ssh", e))?;

        let result = InvocationResult::from_output(command.to_string(), &output);
        match result.status {
            Some(0) => debug!("Command completed on {}: {}", self.host, command),
            Some(SSH_TRANSPORT_FAILURE) => warn!(
                "ssh to {} exited with {}, the connection may have failed",
                self.host, SSH_TRANSPORT_FAILURE
            ),
            status => warn!("Command '{}' exited with {:?} on {}", command, status, self.host),
        }

        Ok(result)
    }
}
