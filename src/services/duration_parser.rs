//! Interval strings ("60s", "10m", "1h30m", "1500ms", "7d") to [`Duration`].

use std::time::Duration;

use crate::domain::{ConfigError, ConfigResult};

/// Parse an interval configured under `field`.
///
/// Units may be combined (`1h 30m`, `2m30s`). A value that does not follow
/// that notation is an error naming the field and the raw value; it is never
/// replaced by a default.
pub fn parse_duration(field: &str, value: &str) -> ConfigResult<Duration> {
    humantime::parse_duration(value.trim()).map_err(|source| ConfigError::MalformedDuration {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

/// Like [`parse_duration`], but an unset or blank value means zero.
pub fn parse_optional_duration(field: &str, value: Option<&str>) -> ConfigResult<Duration> {
    match value.map(str::trim) {
        None | Some("") => Ok(Duration::ZERO),
        Some(value) => parse_duration(field, value),
    }
}

/// Whole seconds of `duration`, the fractional part dropped
pub fn whole_seconds(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}
