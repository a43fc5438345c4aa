use serde::{Deserialize, Serialize};

use super::interval::optional_interval;

/// The `checker` section as written by the operator.
///
/// Every field may be absent; absent fields are filled from the defaults
/// with [`RawCheckerSettings::merge`] before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawCheckerSettings {
    /// Period for every trigger to perform a forced check on
    #[serde(
        default,
        deserialize_with = "optional_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub nodata_check_interval: Option<String>,

    /// Period after which a forced check is cancelled if no metrics were received
    #[serde(
        default,
        deserialize_with = "optional_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_checking_interval: Option<String>,

    /// Min period to perform trigger re-checks
    #[serde(
        default,
        deserialize_with = "optional_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_interval: Option<String>,

    /// Max period to re-check triggers without subscriptions.
    ///
    /// The engine picks a random delay between half of this value and the value itself.
    #[serde(
        default,
        deserialize_with = "optional_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub lazy_triggers_check_interval: Option<String>,

    /// Max concurrent local checks, 0 means the number of CPUs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_checks: Option<i64>,

    /// Max concurrent remote checks, 0 means the number of CPUs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_remote_checks: Option<i64>,

    /// Max concurrent prometheus checks, 0 means the number of CPUs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_prometheus_checks: Option<i64>,

    /// Per-trigger log level overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_log_level: Option<TriggersLogConfig>,

    /// Metric event pop operation batch size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_event_pop_batch_size: Option<i64>,

    /// Metric event pop operation delay
    #[serde(
        default,
        deserialize_with = "optional_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub metric_event_pop_delay: Option<String>,
}

impl RawCheckerSettings {
    /// Fill the holes of `self` from `defaults`.
    ///
    /// A value present in `self` always wins; `defaults` only supplies absent
    /// fields. `set_log_level` is one field, so a present override list
    /// replaces the default list whole.
    #[must_use]
    pub fn merge(self, defaults: Self) -> Self {
        Self {
            nodata_check_interval: self.nodata_check_interval.or(defaults.nodata_check_interval),
            stop_checking_interval: self
                .stop_checking_interval
                .or(defaults.stop_checking_interval),
            check_interval: self.check_interval.or(defaults.check_interval),
            lazy_triggers_check_interval: self
                .lazy_triggers_check_interval
                .or(defaults.lazy_triggers_check_interval),
            max_parallel_checks: self.max_parallel_checks.or(defaults.max_parallel_checks),
            max_parallel_remote_checks: self
                .max_parallel_remote_checks
                .or(defaults.max_parallel_remote_checks),
            max_parallel_prometheus_checks: self
                .max_parallel_prometheus_checks
                .or(defaults.max_parallel_prometheus_checks),
            set_log_level: self.set_log_level.or(defaults.set_log_level),
            metric_event_pop_batch_size: self
                .metric_event_pop_batch_size
                .or(defaults.metric_event_pop_batch_size),
            metric_event_pop_delay: self
                .metric_event_pop_delay
                .or(defaults.metric_event_pop_delay),
        }
    }

    /// Override entries in document order
    pub fn log_overrides(&self) -> &[TriggerLogOverride] {
        self.set_log_level
            .as_ref()
            .map(|config| config.triggers.as_slice())
            .unwrap_or_default()
    }
}

/// `set_log_level` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggersLogConfig {
    /// Overrides in document order, later entries win
    #[serde(default)]
    pub triggers: Vec<TriggerLogOverride>,
}

/// Log level override for a single trigger.
///
/// `level` is kept verbatim; the checking engine decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerLogOverride {
    /// Trigger id
    pub id: String,
    /// Level name, e.g. `debug`
    pub level: String,
}

impl TriggerLogOverride {
    /// Override for trigger `id`
    pub fn new(id: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level: level.into(),
        }
    }
}
