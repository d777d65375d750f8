// file: src/cli/mod.rs
// version: 2.0.0
// guid: b0d2f4a6-8e9a-4b1c-8d3f-7a9c1e3b5d7f

//! Command line interface for hammer-dispatch

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::dispatch;
