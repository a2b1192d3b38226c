use crate::models::{DayEntry, GridEntry, GridResponse, GridRow, Interval};
use crate::pattern::PatternTables;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};
use tracing::warn;

pub const SLOT_COUNT: usize = 17;
const SLOT_LENGTH_MINUTES: u32 = 30;
const FIRST_SLOT_HOUR: u32 = 9;
const DEFAULT_DURATION_SECONDS: i64 = 1800;
const MAX_DAYS: usize = 5;
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The 17 fixed slot labels, "9:00" through "17:00" at 30-minute steps.
pub fn time_slots() -> Vec<String> {
    (0..SLOT_COUNT)
        .map(|i| {
            let hour = FIRST_SLOT_HOUR + i as u32 / 2;
            let minute = (i as u32 % 2) * SLOT_LENGTH_MINUTES;
            format!("{hour}:{minute:02}")
        })
        .collect()
}

/// Keeps only records tagged with the target activity, in input order.
pub fn filter_by_activity(intervals: &[Interval], activity_id: &str) -> Vec<Interval> {
    intervals
        .iter()
        .filter(|interval| interval.activity_id.as_deref() == Some(activity_id))
        .cloned()
        .collect()
}

/// An interval whose timestamps parsed, with its end instant derived.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub interval: Interval,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Resolved {
    pub fn day_key(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn time_key(&self) -> String {
        format!("{}:{:02}", self.start.hour(), self.start.minute())
    }

    pub fn day_time_key(&self) -> String {
        format!(
            "{}-{}",
            self.start.weekday().num_days_from_sunday(),
            self.time_key()
        )
    }

    pub fn activity_key(&self) -> &str {
        activity_key(&self.interval)
    }

    fn start_minutes(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    // Time-of-day of the end instant, ignoring its day. An interval that
    // crosses midnight is judged by its end clock time only.
    fn end_minutes(&self) -> u32 {
        self.end.hour() * 60 + self.end.minute()
    }
}

/// Grouping key for recurrence counting: stable id first, free text second.
pub fn activity_key(interval: &Interval) -> &str {
    interval
        .activity_id
        .as_deref()
        .or(interval.note.as_deref())
        .unwrap_or("unnamed")
}

/// Parses timestamps once for the whole batch. Records with a malformed
/// `start_time` or `end_time` are dropped here so that the day axis, the
/// analyzer, and the slot mapper all see the same set.
pub fn resolve(intervals: &[Interval]) -> Vec<Resolved> {
    let mut resolved = Vec::with_capacity(intervals.len());
    for interval in intervals {
        let Some(start) = parse_instant(&interval.start_time) else {
            warn!("dropping record with malformed start_time {:?}", interval.start_time);
            continue;
        };
        let end = match interval.end_time.as_deref() {
            Some(raw) => match parse_instant(raw) {
                Some(end) => end,
                None => {
                    warn!("dropping record with malformed end_time {raw:?}");
                    continue;
                }
            },
            None => {
                let seconds = interval.duration_seconds.unwrap_or(DEFAULT_DURATION_SECONDS);
                start + Duration::seconds(seconds)
            }
        };
        resolved.push(Resolved {
            interval: interval.clone(),
            start,
            end,
        });
    }
    resolved
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

/// Up to 5 day columns: the distinct UTC dates present in the resolved set,
/// ascending. An empty set yields a fixed placeholder week so the grid
/// skeleton still renders.
pub fn day_axis(resolved: &[Resolved]) -> Vec<DayEntry> {
    if resolved.is_empty() {
        return fallback_days();
    }

    let mut keys: Vec<String> = resolved.iter().map(Resolved::day_key).collect();
    keys.sort();
    keys.dedup();
    keys.truncate(MAX_DAYS);
    keys.into_iter().map(day_entry).collect()
}

fn fallback_days() -> Vec<DayEntry> {
    (1..=MAX_DAYS as u32)
        .filter_map(|day| NaiveDate::from_ymd_opt(2024, 6, day))
        .map(|date| DayEntry {
            label: day_label(date),
            date: date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}

fn day_entry(key: String) -> DayEntry {
    let label = NaiveDate::parse_from_str(&key, "%Y-%m-%d")
        .map(day_label)
        .unwrap_or_else(|_| key.clone());
    DayEntry { label, date: key }
}

fn day_label(date: NaiveDate) -> String {
    let name = DAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!("{} {}/{}", name, date.month(), date.day())
}

/// All resolved intervals overlapping the given slot on the given day.
/// Half-open on both sides: an interval ending exactly at a slot's start does
/// not overlap it.
pub fn intervals_for_slot<'a>(
    resolved: &'a [Resolved],
    day_key: &str,
    slot: &str,
) -> Vec<&'a Resolved> {
    let Some(slot_start) = slot_minutes(slot) else {
        return Vec::new();
    };
    let slot_end = slot_start + SLOT_LENGTH_MINUTES;

    resolved
        .iter()
        .filter(|entry| {
            entry.day_key() == day_key
                && entry.start_minutes() < slot_end
                && entry.end_minutes() > slot_start
        })
        .collect()
}

fn slot_minutes(label: &str) -> Option<u32> {
    let (hour, minute) = label.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    Some(hour * 60 + minute)
}

/// Runs the whole pipeline for one feed: filter, resolve, derive the day
/// axis, analyze patterns, and place every interval in its overlapping cells.
pub fn build_grid(intervals: &[Interval], activity_id: &str) -> GridResponse {
    let filtered = filter_by_activity(intervals, activity_id);
    let resolved = resolve(&filtered);
    let days = day_axis(&resolved);
    let tables = PatternTables::analyze(&resolved);

    let rows = time_slots()
        .into_iter()
        .map(|slot| {
            let cells = days
                .iter()
                .map(|day| {
                    intervals_for_slot(&resolved, &day.date, &slot)
                        .into_iter()
                        .map(|entry| GridEntry {
                            interval: entry.interval.clone(),
                            repeatability: tables.classify(entry),
                        })
                        .collect()
                })
                .collect();
            GridRow { slot, cells }
        })
        .collect();

    GridResponse {
        days,
        rows,
        matched_count: filtered.len(),
        skipped_count: filtered.len() - resolved.len(),
    }
}
