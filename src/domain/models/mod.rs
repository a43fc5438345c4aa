pub mod checker;
pub mod document;
mod interval;
pub mod settings;

pub use checker::{RawCheckerSettings, TriggerLogOverride, TriggersLogConfig};
pub use document::{
    ConfigDocument, GraphiteConfig, LoggerConfig, ProfilerConfig, PrometheusConfig, RedisConfig,
    RemoteConfig, TelemetryConfig,
};
pub use settings::{CheckerSettings, PrometheusSettings, RemoteSettings, ResolvedConfig};
