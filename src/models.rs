use serde::{Deserialize, Serialize};

/// One activity record from the upstream feed. Timestamps arrive as RFC 3339
/// strings; `end_time` and `duration_seconds` are both optional and the end
/// instant is derived in `grid::resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_id: Option<String>,
}

/// The upstream activities document: either a bare array of intervals or an
/// object wrapping them in a `timeslices` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ActivityFeed {
    List(Vec<Interval>),
    Document { timeslices: Vec<Interval> },
}

impl ActivityFeed {
    pub fn into_intervals(self) -> Vec<Interval> {
        match self {
            Self::List(intervals) => intervals,
            Self::Document { timeslices } => timeslices,
        }
    }
}

/// One day column of the grid. `date` is the `YYYY-MM-DD` key, `label` the
/// short display form, e.g. `MON 6/3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub label: String,
    pub date: String,
}

/// Coarse recurrence classification of a single interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatabilityTier {
    Low,
    Medium,
    High,
}

/// An interval placed in a grid cell, annotated with its tier.
#[derive(Debug, Clone, Serialize)]
pub struct GridEntry {
    #[serde(flatten)]
    pub interval: Interval,
    pub repeatability: RepeatabilityTier,
}

/// One grid row: a fixed 30-minute slot with one cell per day column.
#[derive(Debug, Serialize)]
pub struct GridRow {
    pub slot: String,
    pub cells: Vec<Vec<GridEntry>>,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub days: Vec<DayEntry>,
    pub rows: Vec<GridRow>,
    /// Records matching the target activity, before timestamp resolution.
    pub matched_count: usize,
    /// Matched records dropped for malformed timestamps.
    pub skipped_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feed_accepts_bare_array() {
        let document = json!([
            { "start_time": "2024-06-03T10:00:00Z", "activity_id": "a" },
            { "start_time": "2024-06-04T10:00:00Z" }
        ]);
        let feed: ActivityFeed = serde_json::from_value(document).unwrap();
        let intervals = feed.into_intervals();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].activity_id.as_deref(), Some("a"));
        assert!(intervals[1].activity_id.is_none());
    }

    #[test]
    fn feed_accepts_timeslices_document() {
        let document = json!({
            "timeslices": [
                { "start_time": "2024-06-03T10:00:00Z", "note": "standup" }
            ],
            "next_cursor": null
        });
        let feed: ActivityFeed = serde_json::from_value(document).unwrap();
        let intervals = feed.into_intervals();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].note.as_deref(), Some("standup"));
    }
}
