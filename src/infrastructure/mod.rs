//! Infrastructure layer module
//!
//! Adapters around the resolution core:
//! - Configuration loading (figment)
//! - Logging setup (tracing-subscriber)
//! - Host processor count

pub mod config;
pub mod host;
pub mod logging;

pub use config::ConfigLoader;
pub use host::SystemHost;
pub use logging::LoggerImpl;
