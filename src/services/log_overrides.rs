//! Per-trigger log level table.

use std::collections::BTreeMap;

use tracing::info;

use crate::domain::models::TriggerLogOverride;

/// Compile override entries into a trigger id to level table.
///
/// Last write wins: when an id appears more than once, the level of its last
/// entry in `overrides` is kept. Levels are not validated here.
pub fn compile_log_overrides(overrides: &[TriggerLogOverride]) -> BTreeMap<String, String> {
    let table = overrides
        .iter()
        .fold(BTreeMap::new(), |mut table, entry| {
            table.insert(entry.id.clone(), entry.level.clone());
            table
        });

    info!(
        number_of_triggers = table.len(),
        "Found dynamic log rules in config for some triggers"
    );
    table
}
