//! Logging utilities.
//!
//! Centralizes logger initialization. GL diagnostics are not routed through
//! here; they are written verbatim to stderr/stdout by `gl` and `shader`.

mod init;

pub use init::{init_logging, LoggingConfig};
