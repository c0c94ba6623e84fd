//! Process models.
//!
//! A process moves through three shapes during a simulation run:
//!
//! | Shape | Produced by | Meaning |
//! |-------|-------------|---------|
//! | `ProcessInput` | process table / JSON | Raw, user-editable row |
//! | `ProcessRecord` | validator | Parsed, range-checked row |
//! | `ProcessResult` | FCFS engine | Record plus completion metrics |
//!
//! All times are in abstract time units relative to t=0.

use serde::{Deserialize, Deserializer, Serialize};

/// A raw process row as entered in the process table.
///
/// Arrival and burst are kept as text so that malformed values can be
/// reported by the validator. An empty (or whitespace-only) field is unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Process identifier (PID).
    #[serde(alias = "pid")]
    pub id: String,
    /// Arrival time text.
    #[serde(default, deserialize_with = "field_text")]
    pub arrival: String,
    /// Burst time text.
    #[serde(default, deserialize_with = "field_text")]
    pub burst: String,
}

impl ProcessInput {
    /// Creates a row with both time fields unset.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival: String::new(),
            burst: String::new(),
        }
    }

    /// Creates a row with both time fields filled.
    pub fn new(id: impl Into<String>, arrival: impl ToString, burst: impl ToString) -> Self {
        Self {
            id: id.into(),
            arrival: arrival.to_string(),
            burst: burst.to_string(),
        }
    }

    /// Sets the arrival text.
    pub fn with_arrival(mut self, arrival: impl Into<String>) -> Self {
        self.arrival = arrival.into();
        self
    }

    /// Sets the burst text.
    pub fn with_burst(mut self, burst: impl Into<String>) -> Self {
        self.burst = burst.into();
        self
    }

    /// Whether the arrival field is unset.
    #[inline]
    pub fn arrival_unset(&self) -> bool {
        self.arrival.trim().is_empty()
    }

    /// Whether the burst field is unset.
    #[inline]
    pub fn burst_unset(&self) -> bool {
        self.burst.trim().is_empty()
    }

    /// Whether neither time field has been entered yet.
    pub fn is_blank(&self) -> bool {
        self.arrival_unset() && self.burst_unset()
    }
}

/// Accepts a JSON string, number or null for a time field.
///
/// Integers keep their digits. Any JSON float, even an integral one such as
/// `2.0` or `1e2`, keeps a fractional or exponent part, so it fails the
/// integer check like the typed text `"2.0"` would.
fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        UInt(u64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => String::new(),
        Some(Raw::Int(n)) => n.to_string(),
        Some(Raw::UInt(n)) => n.to_string(),
        Some(Raw::Float(f)) => format!("{f:?}"),
        Some(Raw::Text(s)) => s,
    })
}

/// A validated process, ready for scheduling.
///
/// # Invariants
/// `0 <= arrival <= MAX` and `1 <= burst <= MAX`, where `MAX` is the
/// configured time unit limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier, trimmed.
    pub id: String,
    /// Arrival time.
    pub arrival: i64,
    /// CPU time required once dispatched.
    pub burst: i64,
}

impl ProcessRecord {
    /// Creates a record.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }
}

/// Per-process outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time.
    pub burst: i64,
    /// Dispatch time: `max(arrival, cpu free time)`.
    pub start: i64,
    /// Completion time: `start + burst`.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
}

impl ProcessResult {
    /// Builds the result of running `record` from `start` to completion.
    ///
    /// Completion saturates at `i64::MAX`; validated records never get there.
    pub fn dispatched(record: &ProcessRecord, start: i64) -> Self {
        let completion = start.saturating_add(record.burst);
        let turnaround = completion - record.arrival;
        Self {
            id: record.id.clone(),
            arrival: record.arrival,
            burst: record.burst,
            start,
            completion,
            turnaround,
            waiting: turnaround - record.burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        let row = ProcessInput::blank("P1");
        assert!(row.is_blank());
        assert!(row.arrival_unset());
        assert!(row.burst_unset());
    }

    #[test]
    fn test_whitespace_is_unset() {
        let row = ProcessInput::blank("P1").with_arrival("  ").with_burst("3");
        assert!(row.arrival_unset());
        assert!(!row.burst_unset());
        assert!(!row.is_blank());
    }

    #[test]
    fn test_input_from_json_mixed_fields() {
        let rows: Vec<ProcessInput> = serde_json::from_str(
            r#"[
                {"id": "P1", "arrival": 0, "burst": "5"},
                {"pid": "P2", "arrival": null},
                {"id": "P3", "arrival": 1.5, "burst": 2}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows[0], ProcessInput::new("P1", 0, 5));
        assert_eq!(rows[1], ProcessInput::blank("P2"));
        assert_eq!(rows[2].arrival, "1.5");
        assert_eq!(rows[2].burst, "2");
    }

    #[test]
    fn test_integral_floats_stay_fractional() {
        let rows: Vec<ProcessInput> = serde_json::from_str(
            r#"[
                {"id": "P1", "arrival": 2.0, "burst": 1e2},
                {"id": "P2", "arrival": 18446744073709551615, "burst": -3}
            ]"#,
        )
        .unwrap();

        assert_eq!(rows[0].arrival, "2.0");
        assert_eq!(rows[0].burst, "100.0");
        assert_eq!(rows[1].arrival, "18446744073709551615");
        assert_eq!(rows[1].burst, "-3");
    }

    #[test]
    fn test_result_dispatched() {
        let record = ProcessRecord::new("P2", 1, 3);
        let r = ProcessResult::dispatched(&record, 5);
        assert_eq!(r.start, 5);
        assert_eq!(r.completion, 8);
        assert_eq!(r.turnaround, 7);
        assert_eq!(r.waiting, 4);
    }

    #[test]
    fn test_dispatched_saturates() {
        let record = ProcessRecord::new("P1", 0, i64::MAX);
        let r = ProcessResult::dispatched(&record, 10);
        assert_eq!(r.completion, i64::MAX);
        assert_eq!(r.turnaround, i64::MAX);
    }
}
