//! Persisted frequency and recency ledgers.
//!
//! `FrequencyLedger` tracks how often each card key was shown today and
//! which keys the user already acted on; it is cleared once per local
//! calendar day. `RecencyLedger` is a bounded FIFO of recently shown tip
//! ids used to avoid short-term repeats in the fallback rotation.
//!
//! Both serialize to JSON and round-trip through the durable key-value
//! store. A missing or corrupt stored value loads as an empty ledger; the
//! next successful write reconciles storage with memory.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage key for the frequency ledger.
pub const FREQUENCY_LEDGER_KEY: &str = "frequency_ledger";
/// Storage key for the recency ledger.
pub const RECENCY_LEDGER_KEY: &str = "recency_ledger";

/// Per-day show counts and acted-upon set, keyed by stable card key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyLedger {
    #[serde(default)]
    pub show_counts: HashMap<String, u32>,
    #[serde(default)]
    pub acted_upon: HashSet<String>,
    /// Local calendar date of the last daily reset. `None` on first run,
    /// which counts as "needs reset" so the first evaluation stamps it.
    #[serde(default)]
    pub last_reset: Option<NaiveDate>,
}

impl FrequencyLedger {
    /// Parse a ledger from stored JSON, falling back to empty on corruption.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Record one show of the given card key.
    pub fn record_shown(&mut self, key: &str) {
        *self.show_counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Number of times the key was shown since the last reset.
    pub fn shows(&self, key: &str) -> u32 {
        self.show_counts.get(key).copied().unwrap_or(0)
    }

    /// Suppress the key for the rest of the day after the user engaged.
    pub fn mark_acted_upon(&mut self, key: &str) {
        self.acted_upon.insert(key.to_string());
    }

    pub fn is_acted_upon(&self, key: &str) -> bool {
        self.acted_upon.contains(key)
    }

    /// Whether the daily reset is due for the given local date.
    pub fn needs_reset(&self, today: NaiveDate) -> bool {
        self.last_reset != Some(today)
    }

    /// Clear all counters and stamp the reset date. Idempotent.
    pub fn reset_for(&mut self, today: NaiveDate) {
        self.show_counts.clear();
        self.acted_upon.clear();
        self.last_reset = Some(today);
    }
}

/// Bounded FIFO of recently shown tip ids, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecencyLedger {
    #[serde(default)]
    pub recent_tip_ids: VecDeque<u32>,
}

impl RecencyLedger {
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// Append a tip id, evicting the oldest entries beyond `capacity`.
    pub fn push(&mut self, id: u32, capacity: usize) {
        self.recent_tip_ids.push_back(id);
        while self.recent_tip_ids.len() > capacity {
            self.recent_tip_ids.pop_front();
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.recent_tip_ids.contains(&id)
    }

    /// The `n` most recently pushed ids, newest last.
    pub fn most_recent(&self, n: usize) -> Vec<u32> {
        let skip = self.recent_tip_ids.len().saturating_sub(n);
        self.recent_tip_ids.iter().skip(skip).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.recent_tip_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent_tip_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_counts_and_acted_upon() {
        let mut ledger = FrequencyLedger::default();
        assert_eq!(ledger.shows("almost_there"), 0);

        ledger.record_shown("almost_there");
        ledger.record_shown("almost_there");
        assert_eq!(ledger.shows("almost_there"), 2);

        assert!(!ledger.is_acted_upon("welcome_back"));
        ledger.mark_acted_upon("welcome_back");
        assert!(ledger.is_acted_upon("welcome_back"));
    }

    #[test]
    fn test_reset_clears_everything_and_stamps_date() {
        let mut ledger = FrequencyLedger::default();
        ledger.record_shown("almost_there");
        ledger.mark_acted_upon("welcome_back");

        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert!(ledger.needs_reset(today));

        ledger.reset_for(today);
        assert!(ledger.show_counts.is_empty());
        assert!(ledger.acted_upon.is_empty());
        assert_eq!(ledger.last_reset, Some(today));
        assert!(!ledger.needs_reset(today));

        // Idempotent
        ledger.reset_for(today);
        assert!(!ledger.needs_reset(today));
    }

    #[test]
    fn test_needs_reset_on_first_run_and_day_change() {
        let ledger = FrequencyLedger::default();
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert!(ledger.needs_reset(today), "fresh ledger must reset");

        let mut stamped = ledger.clone();
        stamped.reset_for(today.pred_opt().unwrap());
        assert!(stamped.needs_reset(today), "yesterday's stamp must reset");
    }

    #[test]
    fn test_frequency_survives_json_roundtrip() {
        let mut ledger = FrequencyLedger::default();
        ledger.record_shown("evening_nudge");
        ledger.mark_acted_upon("try_watch_sync");
        ledger.reset_for(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        ledger.record_shown("evening_nudge");

        let json = serde_json::to_string(&ledger).unwrap();
        let back = FrequencyLedger::from_json(&json);
        assert_eq!(back.shows("evening_nudge"), 1);
        assert_eq!(back.last_reset, ledger.last_reset);
    }

    #[test]
    fn test_corrupt_json_loads_empty() {
        let ledger = FrequencyLedger::from_json("{not json");
        assert!(ledger.show_counts.is_empty());
        assert!(ledger.last_reset.is_none());

        let recency = RecencyLedger::from_json("[1, 2, oops");
        assert!(recency.is_empty());
    }

    #[test]
    fn test_recency_fifo_eviction() {
        let mut recency = RecencyLedger::default();
        for id in 1..=30 {
            recency.push(id, 25);
        }
        assert_eq!(recency.len(), 25);
        // Ids 1-5 evicted, 6 is now the oldest.
        assert!(!recency.contains(5));
        assert!(recency.contains(6));
        assert!(recency.contains(30));
    }

    #[test]
    fn test_most_recent_returns_tail() {
        let mut recency = RecencyLedger::default();
        for id in 1..=20 {
            recency.push(id, 25);
        }
        assert_eq!(recency.most_recent(3), vec![18, 19, 20]);
        assert_eq!(recency.most_recent(50).len(), 20);
    }
}
