use crate::pins::PinStore;
use crate::record::{AppRecord, RawActivity, UNUSED_AFTER_MS};
use crate::usage::UsageSource;
use log::warn;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

/// Assembles the drawer list from the current inventory, usage, and pin
/// snapshots, using the system clock for the staleness check.
///
/// Permission is passed in per call and never cached here; the caller
/// re-queries the platform each time since the grant can change while the
/// launcher is backgrounded.
pub fn assemble(
    raw: &[RawActivity],
    usage: &dyn UsageSource,
    pins: &dyn PinStore,
    usage_permission_granted: bool,
) -> Vec<AppRecord> {
    assemble_at(now_ms(), raw, usage, pins, usage_permission_granted)
}

/// Deterministic core of [`assemble`]: same inputs, same output.
///
/// A failed usage lookup degrades to "no usage data" for this call, which is
/// observably identical to the permission being absent; the list is always
/// returned.
pub fn assemble_at(
    now_ms: u64,
    raw: &[RawActivity],
    usage: &dyn UsageSource,
    pins: &dyn PinStore,
    usage_permission_granted: bool,
) -> Vec<AppRecord> {
    let stale_before = now_ms.saturating_sub(UNUSED_AFTER_MS);

    let mut usage_map = HashMap::new();
    let mut usage_available = false;
    if usage_permission_granted {
        match usage.lookup(stale_before, now_ms) {
            Ok(map) => {
                usage_map = map;
                usage_available = true;
            }
            Err(err) => warn!("usage lookup failed, rendering without usage data: {err}"),
        }
    }

    let pin_set = pins.read();

    let mut records = Vec::with_capacity(raw.len());
    let mut seen = HashSet::with_capacity(raw.len());
    for activity in raw {
        // first entry per package wins
        if !seen.insert(activity.package_id.clone()) {
            continue;
        }
        let last_used_ms = usage_map
            .get(&activity.package_id)
            .copied()
            .unwrap_or_default();
        records.push(AppRecord {
            label: activity.label.clone(),
            package_id: activity.package_id.clone(),
            is_pinned: pin_set.contains(&activity.package_id),
            is_unused: usage_available && last_used_ms < stale_before,
            last_used_ms,
        });
    }

    records.sort_by(compare_records);
    records
}

/// Three-key drawer order: pinned first, then most recently used, then
/// case-insensitive label.
fn compare_records(a: &AppRecord, b: &AppRecord) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then(b.last_used_ms.cmp(&a.last_used_ms))
        .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
}

/// Case-insensitive substring filter the presentation layer applies to an
/// assembled list. An empty query keeps everything; relative order is
/// preserved.
pub fn filter_by_label(records: &[AppRecord], query: &str) -> Vec<AppRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
