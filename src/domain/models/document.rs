use serde::{Deserialize, Serialize};

use super::checker::RawCheckerSettings;
use super::interval::interval;

/// Operator-editable checker configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigDocument {
    /// Storage connection
    #[serde(default)]
    pub redis: RedisConfig,

    /// Process log sink
    #[serde(default, rename = "log")]
    pub logger: LoggerConfig,

    /// Trigger checker settings, resolved into [`super::CheckerSettings`]
    #[serde(default)]
    pub checker: RawCheckerSettings,

    /// Metrics emission
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Remote (graphite-web) check backend
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Prometheus check backend
    #[serde(default)]
    pub prometheus: PrometheusConfig,
}

/// Redis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Comma separated `host:port` list
    pub addrs: String,
    /// Retention of stored metric points
    pub metrics_ttl: String,
    /// Connection timeout
    pub dial_timeout: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addrs: "localhost:6379".to_string(),
            metrics_ttl: "1h".to_string(),
            dial_timeout: "500ms".to_string(),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `stdout`, `stderr` or a file path
    pub log_file: String,
    /// trace, debug, info, warn, error
    pub log_level: String,
    /// Human readable output instead of JSON lines
    pub log_pretty_format: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_file: "stdout".to_string(),
            log_level: "info".to_string(),
            log_pretty_format: false,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Listen address of the telemetry HTTP endpoint
    pub listen: String,
    /// Graphite metrics export
    pub graphite: GraphiteConfig,
    /// Profiler endpoint
    pub pprof: ProfilerConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            listen: ":8092".to_string(),
            graphite: GraphiteConfig::default(),
            pprof: ProfilerConfig::default(),
        }
    }
}

/// Graphite metrics export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphiteConfig {
    /// Export metrics to graphite
    pub enabled: bool,
    /// Include process runtime statistics
    pub runtime_stats: bool,
    /// Carbon `host:port`
    pub uri: String,
    /// Metric name prefix
    pub prefix: String,
    /// Export period
    pub interval: String,
}

impl Default for GraphiteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            runtime_stats: false,
            uri: "localhost:2003".to_string(),
            prefix: "DevOps.Moira".to_string(),
            interval: "60s".to_string(),
        }
    }
}

/// Profiler endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Serve profiling data on the telemetry listener
    pub enabled: bool,
}

/// Remote check backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Run remote checks
    pub enabled: bool,
    /// graphite-web render endpoint
    pub url: String,
    /// Min period between checks of one trigger
    #[serde(deserialize_with = "interval")]
    pub check_interval: String,
    /// Request timeout
    #[serde(deserialize_with = "interval")]
    pub timeout: String,
    /// How far back metrics are fetched
    #[serde(deserialize_with = "interval")]
    pub metrics_ttl: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            check_interval: "60s".to_string(),
            timeout: "60s".to_string(),
            metrics_ttl: "7d".to_string(),
        }
    }
}

/// Prometheus check backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrometheusConfig {
    /// Run prometheus checks
    pub enabled: bool,
    /// Prometheus API endpoint
    pub url: String,
    /// Min period between checks of one trigger
    #[serde(deserialize_with = "interval")]
    pub check_interval: String,
    /// Request timeout
    #[serde(deserialize_with = "interval")]
    pub timeout: String,
    /// How far back metrics are fetched
    #[serde(deserialize_with = "interval")]
    pub metrics_ttl: String,
    /// Attempts per request after the first failure
    pub retries: u32,
    /// Pause between retries
    #[serde(deserialize_with = "interval")]
    pub retry_timeout: String,
}

impl Default for PrometheusConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            check_interval: "60s".to_string(),
            timeout: "60s".to_string(),
            metrics_ttl: "7d".to_string(),
            retries: 1,
            retry_timeout: "10s".to_string(),
        }
    }
}
