//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Completion from built-in defaults

pub mod loader;

pub use loader::ConfigLoader;
