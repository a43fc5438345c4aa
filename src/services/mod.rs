//! Service layer: resolution of raw configuration into checker settings

pub mod defaults;
pub mod duration_parser;
pub mod log_overrides;
pub mod parallelism;
pub mod settings_builder;

pub use defaults::DefaultsProvider;
pub use duration_parser::{parse_duration, parse_optional_duration, whole_seconds};
pub use log_overrides::compile_log_overrides;
pub use parallelism::{resolve_parallelism, CheckCategory};
pub use settings_builder::SettingsBuilder;
