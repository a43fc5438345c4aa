//! Worker-pool limits where 0 means "one worker per logical CPU".

use std::fmt;

use tracing::info;

use crate::domain::ports::HostConcurrency;

/// Category of concurrent checks with its own worker-pool limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Checks against the local metric store
    Local,
    /// Checks against a graphite-web backend
    Remote,
    /// Checks against a Prometheus backend
    Prometheus,
}

impl CheckCategory {
    /// Every category, in resolution order
    pub const ALL: [Self; 3] = [Self::Local, Self::Remote, Self::Prometheus];

    /// Document field holding the limit
    pub const fn field(self) -> &'static str {
        match self {
            Self::Local => "checker.max_parallel_checks",
            Self::Remote => "checker.max_parallel_remote_checks",
            Self::Prometheus => "checker.max_parallel_prometheus_checks",
        }
    }

    const fn setting_name(self) -> &'static str {
        match self {
            Self::Local => "MaxParallelChecks",
            Self::Remote => "MaxParallelRemoteChecks",
            Self::Prometheus => "MaxParallelPrometheusChecks",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.setting_name())
    }
}

/// Resolve the configured limit for `category`.
///
/// Exactly 0 becomes the host's logical CPU count and is logged once. Any
/// other value, negative included, is returned unchanged.
pub fn resolve_parallelism(
    category: CheckCategory,
    configured: i64,
    host: &dyn HostConcurrency,
) -> i64 {
    if configured != 0 {
        return configured;
    }

    let cpus = i64::try_from(host.logical_cpus()).unwrap_or(i64::MAX);
    info!(
        category = %category,
        number_of_cpu = cpus,
        "{category} is not configured, set it to the number of CPU"
    );
    cpus
}
