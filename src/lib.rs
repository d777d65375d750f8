// file: src/lib.rs
// version: 3.0.0
// guid: d4f6a8c0-2b3d-4e5f-9a7b-1c3e5a7c9e1b

//! # hammer-dispatch
//!
//! Command-group dispatch for the hammer administration CLI. A command group
//! (`environment`, `host`, `organization`, ...) maps a subcommand and its
//! arguments onto one hammer invocation, run locally or over ssh, and hands
//! back the raw exit status and captured output.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod logging;
pub mod output;

pub use dispatch::{CommandGroup, Dispatcher, Options, Registry};
pub use error::{DispatchError, Result};
pub use executor::{CommandExecutor, CommandLine};
pub use output::InvocationResult;

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
