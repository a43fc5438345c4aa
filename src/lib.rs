//! Checker configuration
//!
//! Resolves the operator-editable checker configuration document into the
//! strongly typed settings the trigger checking engine runs with: intervals
//! become durations, worker-pool limits of 0 become the host's CPU count and
//! per-trigger log level overrides become a lookup table.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): document shapes, resolved settings, errors, ports
//! - **Service Layer** (`services`): defaults and the resolution pipeline
//! - **Infrastructure Layer** (`infrastructure`): figment loading, logging, host probing
//!
//! # Example
//!
//! ```no_run
//! use checker_config::{ConfigLoader, SettingsBuilder, SystemHost};
//!
//! fn main() -> anyhow::Result<()> {
//!     let document = ConfigLoader::load(None)?;
//!     let settings = SettingsBuilder::new(&SystemHost).build(&document.checker)?;
//!     assert!(settings.max_parallel_local_checks > 0);
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    CheckerSettings, ConfigDocument, LoggerConfig, PrometheusSettings, RawCheckerSettings,
    RemoteSettings, ResolvedConfig, TriggerLogOverride, TriggersLogConfig,
};
pub use domain::ports::{FixedHost, HostConcurrency};
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::{ConfigLoader, LoggerImpl, SystemHost};
pub use services::{CheckCategory, DefaultsProvider, SettingsBuilder};
