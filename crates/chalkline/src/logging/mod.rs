//! Logging utilities.
//!
//! Centralizes logger initialization for embedding applications. Everything
//! in the crate logs through the `log` facade; the backend here is
//! `env_logger`, but embedders that install their own backend can skip this
//! module entirely.

mod init;

pub use init::{LoggingConfig, init_logging};
