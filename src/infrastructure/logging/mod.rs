//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting
//! - stdout, stderr or non-blocking file output

pub mod logger;

pub use logger::{LoggerImpl, STDERR, STDOUT};
