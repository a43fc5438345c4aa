//! Built-in configuration used for anything the operator leaves out.

use crate::domain::models::{
    ConfigDocument, LoggerConfig, PrometheusConfig, RawCheckerSettings, RedisConfig, RemoteConfig,
    TelemetryConfig,
};

/// Supplies default documents and completes partial ones
pub struct DefaultsProvider;

impl DefaultsProvider {
    /// Default `checker` section.
    ///
    /// Parallelism limits of 0 are resolved to the CPU count. Batch size and
    /// pop delay stay unset.
    pub fn checker() -> RawCheckerSettings {
        RawCheckerSettings {
            nodata_check_interval: Some("60s".to_string()),
            check_interval: Some("5s".to_string()),
            lazy_triggers_check_interval: Some("10m".to_string()),
            stop_checking_interval: Some("30s".to_string()),
            max_parallel_checks: Some(0),
            max_parallel_remote_checks: Some(0),
            ..RawCheckerSettings::default()
        }
    }

    /// Full default document
    pub fn document() -> ConfigDocument {
        ConfigDocument {
            redis: RedisConfig::default(),
            logger: LoggerConfig::default(),
            checker: Self::checker(),
            telemetry: TelemetryConfig::default(),
            remote: RemoteConfig::default(),
            prometheus: PrometheusConfig::default(),
        }
    }

    /// Fill the holes of the `checker` section from [`Self::checker`].
    ///
    /// Other sections already carry per-field defaults from deserialization.
    pub fn complete(document: ConfigDocument) -> ConfigDocument {
        ConfigDocument {
            checker: document.checker.merge(Self::checker()),
            ..document
        }
    }
}
