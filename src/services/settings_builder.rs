//! Raw document sections to resolved, typed settings.

use tracing::debug;

use crate::domain::models::{
    CheckerSettings, ConfigDocument, PrometheusConfig, PrometheusSettings, RawCheckerSettings,
    RemoteConfig, RemoteSettings, ResolvedConfig,
};
use crate::domain::ports::HostConcurrency;
use crate::domain::{ConfigError, ConfigResult};
use crate::services::duration_parser::{parse_duration, parse_optional_duration, whole_seconds};
use crate::services::log_overrides::compile_log_overrides;
use crate::services::parallelism::{resolve_parallelism, CheckCategory};

/// Resolves raw configuration sections against a host.
///
/// Resolution is a one-shot pure computation apart from the informational
/// log records; it either returns complete settings or the first error.
pub struct SettingsBuilder<'a> {
    host: &'a dyn HostConcurrency,
}

impl<'a> SettingsBuilder<'a> {
    /// Builder sizing unset worker pools from `host`
    pub fn new(host: &'a dyn HostConcurrency) -> Self {
        Self { host }
    }

    /// Resolve every section of a completed document
    pub fn resolve(&self, document: &ConfigDocument) -> ConfigResult<ResolvedConfig> {
        Ok(ResolvedConfig {
            checker: self.build(&document.checker)?,
            remote: self.remote(&document.remote)?,
            prometheus: self.prometheus(&document.prometheus)?,
        })
    }

    /// Resolve the `checker` section.
    ///
    /// Log overrides are reported first, then parallelism substitutions.
    /// Unset fields resolve to zero values, so `raw` is expected to be merged
    /// with [`crate::services::DefaultsProvider::checker`] beforehand.
    pub fn build(&self, raw: &RawCheckerSettings) -> ConfigResult<CheckerSettings> {
        let log_triggers_to_level = compile_log_overrides(raw.log_overrides());

        let max_parallel_local_checks = self.limit(CheckCategory::Local, raw.max_parallel_checks)?;
        let max_parallel_remote_checks =
            self.limit(CheckCategory::Remote, raw.max_parallel_remote_checks)?;
        let max_parallel_prometheus_checks =
            self.limit(CheckCategory::Prometheus, raw.max_parallel_prometheus_checks)?;

        let settings = CheckerSettings {
            check_interval: parse_optional_duration(
                "checker.check_interval",
                raw.check_interval.as_deref(),
            )?,
            lazy_triggers_check_interval: parse_optional_duration(
                "checker.lazy_triggers_check_interval",
                raw.lazy_triggers_check_interval.as_deref(),
            )?,
            no_data_check_interval: parse_optional_duration(
                "checker.nodata_check_interval",
                raw.nodata_check_interval.as_deref(),
            )?,
            stop_checking_interval_seconds: whole_seconds(parse_optional_duration(
                "checker.stop_checking_interval",
                raw.stop_checking_interval.as_deref(),
            )?),
            max_parallel_local_checks,
            max_parallel_remote_checks,
            max_parallel_prometheus_checks,
            log_triggers_to_level,
            metric_event_pop_batch_size: raw.metric_event_pop_batch_size.unwrap_or_default(),
            metric_event_pop_delay: parse_optional_duration(
                "checker.metric_event_pop_delay",
                raw.metric_event_pop_delay.as_deref(),
            )?,
        };

        debug!(?settings, "checker settings resolved");
        Ok(settings)
    }

    /// Resolve the `remote` section
    pub fn remote(&self, raw: &RemoteConfig) -> ConfigResult<RemoteSettings> {
        Ok(RemoteSettings {
            enabled: raw.enabled,
            url: raw.url.clone(),
            check_interval: parse_duration("remote.check_interval", &raw.check_interval)?,
            timeout: parse_duration("remote.timeout", &raw.timeout)?,
            metrics_ttl: parse_duration("remote.metrics_ttl", &raw.metrics_ttl)?,
        })
    }

    /// Resolve the `prometheus` section
    pub fn prometheus(&self, raw: &PrometheusConfig) -> ConfigResult<PrometheusSettings> {
        Ok(PrometheusSettings {
            enabled: raw.enabled,
            url: raw.url.clone(),
            check_interval: parse_duration("prometheus.check_interval", &raw.check_interval)?,
            timeout: parse_duration("prometheus.timeout", &raw.timeout)?,
            metrics_ttl: parse_duration("prometheus.metrics_ttl", &raw.metrics_ttl)?,
            retries: raw.retries,
            retry_timeout: parse_duration("prometheus.retry_timeout", &raw.retry_timeout)?,
        })
    }

    /// Resolved worker-pool limit, rejected unless strictly positive.
    ///
    /// Catches negative configured values as well as a host reporting no CPUs.
    fn limit(&self, category: CheckCategory, configured: Option<i64>) -> ConfigResult<usize> {
        let value = resolve_parallelism(category, configured.unwrap_or_default(), self.host);
        usize::try_from(value)
            .ok()
            .filter(|&limit| limit > 0)
            .ok_or_else(|| ConfigError::InvalidParallelism {
                field: category.field().to_string(),
                value,
            })
    }
}
