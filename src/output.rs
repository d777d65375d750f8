// file: src/output.rs
// version: 1.0.0
// guid: 5d2e8b4a-9f13-4c6d-8e70-1a3b5c7d9e2f

//! Captured result of one external hammer invocation and helpers that
//! interpret it. Dispatch itself never calls these; callers opt in.

use crate::error::{DispatchError, Result};
use serde::Serialize;
use std::process::Output;

/// Exit status plus captured output of one external command execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    /// Composed command line that produced this result
    pub command: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    pub fn new(
        command: impl Into<String>,
        status: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Build from a finished child process
    pub fn from_output(command: impl Into<String>, output: &Output) -> Self {
        Self::new(
            command,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        )
    }

    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Turn a non-zero exit status into [`DispatchError::ReturnCode`]
    pub fn into_success(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(DispatchError::ReturnCode {
                status: self.status,
                stderr: self.stderr,
                command: self.command,
            })
        }
    }

    /// Parse stdout produced with `--output=json`. Empty output is `null`.
    pub fn parse_json(&self) -> Result<serde_json::Value> {
        let body = self.stdout.trim();
        if body.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(body)?)
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().filter(|line| !line.trim().is_empty())
    }
}
