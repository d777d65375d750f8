// file: src/logging/mod.rs
// version: 2.0.0
// guid: c2e4a6b8-0d1f-4c3e-9a5b-7d9f1b3d5e7a

//! Logging system for hammer-dispatch

pub mod logger;

pub use logger::{init_json_logger, init_logger};
