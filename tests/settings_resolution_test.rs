mod common;

use std::collections::HashSet;
use std::time::Duration;

use checker_config::services::{parse_duration, resolve_parallelism, whole_seconds};
use checker_config::{
    CheckCategory, ConfigError, ConfigLoader, DefaultsProvider, FixedHost, RawCheckerSettings,
    SettingsBuilder, TriggerLogOverride, TriggersLogConfig,
};
use common::CapturedLogs;
use proptest::prelude::*;

fn with_overrides(overrides: Vec<TriggerLogOverride>) -> RawCheckerSettings {
    RawCheckerSettings {
        set_log_level: Some(TriggersLogConfig {
            triggers: overrides,
        }),
        ..DefaultsProvider::checker()
    }
}

fn limit_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![Just(0_i64), 1_i64..100_000]
}

proptest! {
    /// Property: a limit of 0 becomes the host CPU count, anything else is kept
    #[test]
    fn prop_parallelism_zero_means_host_cpus(
        cpus in 1usize..512,
        local in limit_strategy(),
        remote in limit_strategy(),
        prometheus in limit_strategy(),
    ) {
        let raw = RawCheckerSettings {
            max_parallel_checks: Some(local),
            max_parallel_remote_checks: Some(remote),
            max_parallel_prometheus_checks: Some(prometheus),
            ..DefaultsProvider::checker()
        };

        let settings = SettingsBuilder::new(&FixedHost(cpus)).build(&raw).unwrap();

        let expected = |configured: i64| {
            if configured == 0 { cpus } else { usize::try_from(configured).unwrap() }
        };
        prop_assert_eq!(settings.max_parallel_local_checks, expected(local));
        prop_assert_eq!(settings.max_parallel_remote_checks, expected(remote));
        prop_assert_eq!(settings.max_parallel_prometheus_checks, expected(prometheus));
    }

    /// Property: the resolver itself passes every nonzero value through, negatives included
    #[test]
    fn prop_resolver_passes_nonzero_through(
        cpus in 1usize..512,
        configured in any::<i64>().prop_filter("nonzero", |v| *v != 0),
    ) {
        for category in CheckCategory::ALL {
            prop_assert_eq!(resolve_parallelism(category, configured, &FixedHost(cpus)), configured);
        }
    }

    /// Property: formatting a parsed duration and parsing it again is lossless
    #[test]
    fn prop_duration_round_trip(secs in 0u64..10_000_000, millis in 0u64..1000) {
        let duration = Duration::from_secs(secs) + Duration::from_millis(millis);
        let formatted = humantime::format_duration(duration).to_string();

        let parsed = parse_duration("checker.check_interval", &formatted).unwrap();

        prop_assert_eq!(parsed, duration);
        prop_assert_eq!(whole_seconds(parsed), i64::try_from(secs).unwrap());
    }

    /// Property: each distinct id keeps the level of its last entry
    #[test]
    fn prop_overrides_last_write_wins(
        entries in prop::collection::vec(("[a-e]", "(debug|info|warn|error)"), 0..20),
    ) {
        let overrides: Vec<TriggerLogOverride> = entries
            .iter()
            .map(|(id, level)| TriggerLogOverride::new(id.as_str(), level.as_str()))
            .collect();

        let settings = SettingsBuilder::new(&FixedHost(1))
            .build(&with_overrides(overrides))
            .unwrap();

        let distinct: HashSet<&String> = entries.iter().map(|(id, _)| id).collect();
        prop_assert_eq!(settings.log_triggers_to_level.len(), distinct.len());
        for id in distinct {
            let last = entries.iter().rev().find(|(entry_id, _)| entry_id == id).unwrap();
            prop_assert_eq!(&settings.log_triggers_to_level[id], &last.1);
        }
    }
}

#[test]
fn test_override_example_table() {
    let settings = SettingsBuilder::new(&FixedHost(2))
        .build(&with_overrides(vec![
            TriggerLogOverride::new("A", "warn"),
            TriggerLogOverride::new("B", "error"),
            TriggerLogOverride::new("A", "debug"),
        ]))
        .unwrap();

    assert_eq!(settings.log_triggers_to_level.len(), 2);
    assert_eq!(settings.log_triggers_to_level["A"], "debug");
    assert_eq!(settings.log_triggers_to_level["B"], "error");
}

#[test]
fn test_stop_checking_interval_truncates() {
    let raw = RawCheckerSettings {
        stop_checking_interval: Some("1500ms".to_string()),
        ..DefaultsProvider::checker()
    };

    let settings = SettingsBuilder::new(&FixedHost(2)).build(&raw).unwrap();

    assert_eq!(settings.stop_checking_interval_seconds, 1);
}

#[test]
fn test_malformed_duration_aborts_resolution() {
    let document = ConfigLoader::load_from_str("checker:\n  nodata_check_interval: abc\n").unwrap();

    let result = SettingsBuilder::new(&FixedHost(2)).resolve(&document);

    match result {
        Err(ConfigError::MalformedDuration { field, value, .. }) => {
            assert_eq!(field, "checker.nodata_check_interval");
            assert_eq!(value, "abc");
        }
        other => panic!("Expected MalformedDuration, got {other:?}"),
    }
}

#[test]
fn test_no_document_resolves_to_defaults() {
    let builder = SettingsBuilder::new(&FixedHost(6));

    let checker_vars: Vec<String> = std::env::vars_os()
        .filter_map(|(key, _)| key.into_string().ok())
        .filter(|key| key.starts_with(ConfigLoader::ENV_PREFIX))
        .collect();
    let loaded = temp_env::with_vars_unset(&checker_vars, || ConfigLoader::load(None).unwrap());

    let from_loader = builder.resolve(&loaded).unwrap();
    let from_defaults = builder.resolve(&DefaultsProvider::document()).unwrap();
    assert_eq!(from_loader, from_defaults);

    let checker = &from_defaults.checker;
    assert_eq!(checker.no_data_check_interval, Duration::from_secs(60));
    assert_eq!(checker.check_interval, Duration::from_secs(5));
    assert_eq!(checker.lazy_triggers_check_interval, Duration::from_secs(600));
    assert_eq!(checker.stop_checking_interval_seconds, 30);
    assert_eq!(checker.max_parallel_local_checks, 6);
    assert_eq!(checker.max_parallel_remote_checks, 6);
    assert_eq!(checker.max_parallel_prometheus_checks, 6);
}

#[test]
fn test_overrides_reported_before_parallelism() {
    let logs = CapturedLogs::default();
    let raw = with_overrides(vec![
        TriggerLogOverride::new("A", "warn"),
        TriggerLogOverride::new("A", "debug"),
    ]);

    logs.capture(|| SettingsBuilder::new(&FixedHost(3)).build(&raw).unwrap());

    let lines = logs.lines();
    let overrides_at = lines
        .iter()
        .position(|line| line.contains("Found dynamic log rules"))
        .expect("override count should be logged");
    assert!(lines[overrides_at].contains("number_of_triggers=1"));

    let substitutions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains("is not configured, set it to the number of CPU"))
        .map(|(index, _)| index)
        .collect();
    // Defaults leave all three limits at 0 or unset
    assert_eq!(substitutions.len(), 3);
    assert!(substitutions.iter().all(|&index| index > overrides_at));
    assert!(lines[substitutions[0]].contains("MaxParallelChecks"));
    assert!(lines[substitutions[0]].contains("number_of_cpu=3"));
}

#[test]
fn test_configured_limits_are_not_reported() {
    let logs = CapturedLogs::default();
    let raw = RawCheckerSettings {
        max_parallel_checks: Some(4),
        max_parallel_remote_checks: Some(4),
        max_parallel_prometheus_checks: Some(4),
        ..DefaultsProvider::checker()
    };

    logs.capture(|| SettingsBuilder::new(&FixedHost(3)).build(&raw).unwrap());

    let contents = logs.contents();
    assert!(!contents.contains("number_of_cpu"));
    assert!(contents.contains("number_of_triggers=0"));
}
