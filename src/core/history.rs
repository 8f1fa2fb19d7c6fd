//! Transition log for running machine instances.
//!
//! Provides immutable, in-memory tracking of the transitions an instance
//! has taken, surfaced through the snapshot diagnostic dump.

use super::value::StateValue;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single fired transition.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state value transitioned from.
    pub from: StateValue,
    /// The state value transitioned to. Internal transitions record the
    /// unchanged value here.
    pub to: StateValue,
    /// The event name that triggered the transition.
    pub event: String,
    /// When the transition fired.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of fired transitions.
///
/// The log is immutable: `record` returns a new log with the entry
/// appended, leaving the receiver untouched.
///
/// # Example
///
/// ```rust
/// use statescope::core::{StateValue, TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: StateValue::from("inactive"),
///     to: StateValue::from("active"),
///     event: "TOGGLE".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![&StateValue::from("inactive"), &StateValue::from("active")]);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        TransitionLog {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        TransitionLog { records }
    }

    /// All recorded transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The most recent record, if any transitions fired.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// The path of state values traversed: the first record's source,
    /// then each record's target in order. Empty when nothing fired.
    pub fn path(&self) -> Vec<&StateValue> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Wall-clock span between the first and last record.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(last.timestamp - first.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, event: &str) -> TransitionRecord {
        TransitionRecord {
            from: StateValue::from(from),
            to: StateValue::from(to),
            event: event.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn record_is_pure() {
        let log = TransitionLog::new();
        let grown = log.record(record("inactive", "active", "TOGGLE"));

        assert!(log.is_empty());
        assert_eq!(grown.len(), 1);
    }

    #[test]
    fn path_starts_at_first_source() {
        let log = TransitionLog::new()
            .record(record("green", "yellow", "NEXT"))
            .record(record("yellow", "red", "NEXT"));

        let path = log.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &StateValue::from("green"));
        assert_eq!(path[2], &StateValue::from("red"));
    }

    #[test]
    fn empty_log_has_empty_path_and_no_duration() {
        let log = TransitionLog::new();
        assert!(log.path().is_empty());
        assert!(log.duration().is_none());
        assert!(log.last().is_none());
    }

    #[test]
    fn preserves_order_and_events() {
        let log = TransitionLog::new()
            .record(record("a", "b", "FIRST"))
            .record(record("b", "c", "SECOND"));

        let events: Vec<&str> = log.records().iter().map(|r| r.event.as_str()).collect();
        assert_eq!(events, vec!["FIRST", "SECOND"]);
        assert_eq!(log.last().unwrap().event, "SECOND");
    }

    #[test]
    fn duration_is_non_negative_for_ordered_records() {
        let log = TransitionLog::new()
            .record(record("a", "b", "GO"))
            .record(record("b", "c", "GO"));

        assert!(log.duration().unwrap() >= Duration::zero());
    }

    #[test]
    fn log_round_trips_through_serde() {
        let log = TransitionLog::new().record(record("inactive", "active", "TOGGLE"));
        let json = serde_json::to_string(&log).unwrap();
        let back: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), log.len());
        assert_eq!(back.records()[0].event, "TOGGLE");
    }
}
