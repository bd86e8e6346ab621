//! Logging utilities.
//!
//! Centralizes logger initialization so every binary built on the engine core
//! reports render progress the same way. Only the standard `log` facade is
//! imposed on the rest of the crate.

mod init;

pub use init::{init_logging, LoggingConfig};
