// file: src/error.rs
// version: 3.0.0
// guid: 0b7d5c1e-4a92-4f3b-9d1e-6c2a8f4e7b10

use thiserror::Error;

/// Result type alias for the dispatcher
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Error types for hammer command dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration is invalid:\n  {}", .0.join("\n  "))]
    Validation(Vec<String>),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown command group: {0}")]
    UnknownGroup(String),

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command timed out after {seconds}s: {command}")]
    Timeout { command: String, seconds: u64 },

    #[error("Command '{command}' returned {}: {stderr}", describe_status(.status))]
    ReturnCode {
        status: Option<i32>,
        stderr: String,
        command: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

impl DispatchError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Exit code a front-end should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReturnCode {
                status: Some(code), ..
            } => *code,
            Self::Timeout { .. } => 124,
            Self::Spawn { .. } => 127,
            Self::Config(_) | Self::Validation(_) | Self::TomlParse(_) => 78,
            Self::InvalidArgument(_) | Self::UnknownGroup(_) => 64,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lists_every_problem() {
        let err = DispatchError::Validation(vec![
            "[server] hostname must be provided.".to_string(),
            "[server] ssh_key must be provided.".to_string(),
        ]);

        let msg = err.to_string();
        assert!(msg.contains("hostname must be provided"));
        assert!(msg.contains("ssh_key must be provided"));
    }

    #[test]
    fn test_return_code_exit_code_passthrough() {
        let err = DispatchError::ReturnCode {
            status: Some(65),
            stderr: "Could not find environment".to_string(),
            command: "environment info --id=9".to_string(),
        };

        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().contains("exit code 65"));
    }

    #[test]
    fn test_signal_termination_message() {
        let err = DispatchError::ReturnCode {
            status: None,
            stderr: String::new(),
            command: "task list".to_string(),
        };

        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("no exit code"));
    }
}
