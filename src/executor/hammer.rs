// file: src/executor/hammer.rs
// version: 1.1.0
// guid: 2f6b8d0a-3c5e-4a7b-8d9f-1e2a3b4c5d6e

//! hammer front-end argument assembly

use super::CommandLine;
use crate::config::{HammerConfig, ServerConfig};

const PASSWORD_MASK: &str = "********";

/// The hammer program plus the global arguments placed before every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammerCommand {
    program: String,
    verbose: bool,
    credentials: Option<(String, String)>,
    output: Option<String>,
    locale: Option<String>,
}

impl HammerCommand {
    pub fn new(hammer: &HammerConfig, server: &ServerConfig) -> Self {
        let (username, password) = server.credentials();
        let credentials = if username.is_empty() {
            None
        } else {
            Some((username.to_string(), password.to_string()))
        };

        Self {
            program: hammer.binary.clone(),
            verbose: hammer.verbose,
            credentials,
            output: hammer.output.map(|format| format.as_str().to_string()),
            locale: hammer.locale.clone().filter(|l| !l.is_empty()),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Arguments after the program: global flags, then the command line verbatim
    pub fn args(&self, command: &CommandLine) -> Vec<String> {
        self.assemble(command, false)
    }

    /// Program followed by [`args`](Self::args)
    pub fn argv(&self, command: &CommandLine) -> Vec<String> {
        let mut argv = vec![self.program.clone()];
        argv.extend(self.args(command));
        argv
    }

    /// [`argv`](Self::argv) with the password masked
    pub fn masked_argv(&self, command: &CommandLine) -> Vec<String> {
        let mut argv = vec![self.program.clone()];
        argv.extend(self.assemble(command, true));
        argv
    }

    /// Printable form with the password masked
    pub fn render(&self, command: &CommandLine) -> String {
        self.masked_argv(command).join(" ")
    }

    fn assemble(&self, command: &CommandLine, mask: bool) -> Vec<String> {
        let mut args = Vec::with_capacity(command.tokens().len() + 6);
        if self.verbose {
            args.push("-v".to_string());
        }
        if let Some((username, password)) = &self.credentials {
            args.push("-u".to_string());
            args.push(username.clone());
            args.push("-p".to_string());
            args.push(if mask {
                PASSWORD_MASK.to_string()
            } else {
                password.clone()
            });
        }
        if let Some(output) = &self.output {
            args.push(format!("--output={}", output));
        }
        args.extend(command.tokens().iter().cloned());
        args
    }
}
