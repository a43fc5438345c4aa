//! Domain layer for checker configuration
//!
//! Raw document shapes, resolved settings and the ports the resolver needs.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, ConfigResult};
