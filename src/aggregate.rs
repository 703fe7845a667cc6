use crate::models::Entry;
use indexmap::IndexMap;

/// Per-date mean of entry diffs, keyed by the literal date string.
/// Keys keep the order in which each date was first seen, so a chart fed
/// from appended-in-order entries stays chronological.
pub fn daily_averages(entries: &[Entry]) -> IndexMap<String, f64> {
    let mut sums: IndexMap<String, (i64, u32)> = IndexMap::new();
    for entry in entries {
        let slot = sums.entry(entry.date.clone()).or_insert((0, 0));
        slot.0 += entry.diff;
        slot.1 += 1;
    }

    sums.into_iter()
        .map(|(date, (sum, count))| (date, sum as f64 / f64::from(count)))
        .collect()
}

/// Display rounding for averages: nearest integer, halves away from zero.
pub fn round_average(avg: f64) -> i64 {
    avg.round() as i64
}
