use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

/// Resolved checker settings handed to the checking engine.
///
/// Built once at startup and never mutated afterwards. Serialized field names
/// match the engine's configuration contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckerSettings {
    /// Min period between re-checks of one trigger
    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,
    /// Max period between re-checks of triggers without subscriptions
    #[serde(with = "humantime_serde")]
    pub lazy_triggers_check_interval: Duration,
    /// Period of forced checks
    #[serde(with = "humantime_serde")]
    pub no_data_check_interval: Duration,
    /// Whole seconds, sub-second remainder truncated
    pub stop_checking_interval_seconds: i64,
    /// Worker-pool size for local checks
    pub max_parallel_local_checks: usize,
    /// Worker-pool size for remote checks
    pub max_parallel_remote_checks: usize,
    /// Worker-pool size for prometheus checks
    pub max_parallel_prometheus_checks: usize,
    /// Trigger id to log level, one entry per distinct id
    pub log_triggers_to_level: BTreeMap<String, String>,
    /// Metric events popped per batch, 0 when unset
    pub metric_event_pop_batch_size: i64,
    /// Pause between pops, zero when unset
    #[serde(with = "humantime_serde")]
    pub metric_event_pop_delay: Duration,
}

/// Resolved remote backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoteSettings {
    /// Remote checks are run
    pub enabled: bool,
    /// graphite-web render endpoint
    pub url: String,
    /// Min period between checks of one trigger
    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,
    /// Request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Fetch window
    #[serde(with = "humantime_serde")]
    pub metrics_ttl: Duration,
}

/// Resolved prometheus backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrometheusSettings {
    /// Prometheus checks are run
    pub enabled: bool,
    /// Prometheus API endpoint
    pub url: String,
    /// Min period between checks of one trigger
    #[serde(with = "humantime_serde")]
    pub check_interval: Duration,
    /// Request timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// Fetch window
    #[serde(with = "humantime_serde")]
    pub metrics_ttl: Duration,
    /// Attempts after the first failure
    pub retries: u32,
    /// Pause between retries
    #[serde(with = "humantime_serde")]
    pub retry_timeout: Duration,
}

/// Everything resolved from one [`super::ConfigDocument`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolvedConfig {
    /// Checking engine settings
    pub checker: CheckerSettings,
    /// Remote backend settings
    pub remote: RemoteSettings,
    /// Prometheus backend settings
    pub prometheus: PrometheusSettings,
}
