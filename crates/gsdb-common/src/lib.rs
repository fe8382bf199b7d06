//! Shared infrastructure for the gsdb workspace.
//!
//! Currently this hosts the logging configuration used by both the `gsdb`
//! CLI and `gsdb-server` binaries, so the two agree on environment
//! variables, file rotation, and output formats.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod logging;

// Re-export commonly used types
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
