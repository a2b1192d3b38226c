use crate::grid::Resolved;
use crate::models::RepeatabilityTier;
use std::collections::HashMap;

/// Frequency tables over one resolved interval set: occurrences per activity
/// key, per start time of day, and per (weekday, time of day) pair. Rebuilt
/// from scratch for every feed; pure values with no link back to the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTables {
    pub by_activity: HashMap<String, u32>,
    pub by_time_of_day: HashMap<String, u32>,
    pub by_day_time: HashMap<String, u32>,
}

impl PatternTables {
    pub fn analyze(resolved: &[Resolved]) -> Self {
        let mut tables = Self::default();
        for entry in resolved {
            bump(&mut tables.by_activity, entry.activity_key().to_string());
            bump(&mut tables.by_time_of_day, entry.time_key());
            bump(&mut tables.by_day_time, entry.day_time_key());
        }
        tables
    }

    /// Tier rules, first match wins. Always returns a value; a key missing
    /// from a table counts as 1, which cannot happen when the tables were
    /// built over a set containing the interval but keeps the lookup total.
    pub fn classify(&self, entry: &Resolved) -> RepeatabilityTier {
        let activity = count(&self.by_activity, entry.activity_key());
        let time_slot = count(&self.by_time_of_day, &entry.time_key());
        let day_time = count(&self.by_day_time, &entry.day_time_key());
        let total = activity + time_slot + day_time;

        if activity >= 3 && time_slot >= 2 {
            return RepeatabilityTier::High;
        }
        if total >= 8 {
            return RepeatabilityTier::High;
        }
        if total >= 5 || activity >= 2 {
            return RepeatabilityTier::Medium;
        }
        RepeatabilityTier::Low
    }
}

fn bump(table: &mut HashMap<String, u32>, key: String) {
    *table.entry(key).or_insert(0) += 1;
}

fn count(table: &HashMap<String, u32>, key: &str) -> u32 {
    table.get(key).copied().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::resolve;
    use crate::models::Interval;

    fn interval(start: &str, activity: Option<&str>, note: Option<&str>) -> Interval {
        Interval {
            id: None,
            start_time: start.to_string(),
            end_time: None,
            duration_seconds: None,
            note: note.map(String::from),
            activity_id: activity.map(String::from),
        }
    }

    #[test]
    fn analyze_counts_all_three_dimensions() {
        let resolved = resolve(&[
            interval("2024-06-03T10:00:00Z", Some("focus"), None),
            interval("2024-06-04T10:00:00Z", Some("focus"), None),
            interval("2024-06-10T10:00:00Z", Some("focus"), None),
        ]);
        let tables = PatternTables::analyze(&resolved);

        assert_eq!(tables.by_activity.get("focus"), Some(&3));
        assert_eq!(tables.by_time_of_day.get("10:00"), Some(&3));
        // 2024-06-03 and 2024-06-10 are both Mondays.
        assert_eq!(tables.by_day_time.get("1-10:00"), Some(&2));
        assert_eq!(tables.by_day_time.get("2-10:00"), Some(&1));
    }

    #[test]
    fn activity_key_falls_back_to_note_then_unnamed() {
        let resolved = resolve(&[
            interval("2024-06-03T10:00:00Z", None, Some("standup")),
            interval("2024-06-03T11:00:00Z", None, None),
        ]);
        let tables = PatternTables::analyze(&resolved);
        assert_eq!(tables.by_activity.get("standup"), Some(&1));
        assert_eq!(tables.by_activity.get("unnamed"), Some(&1));
    }

    #[test]
    fn analyze_is_pure() {
        let resolved = resolve(&[
            interval("2024-06-03T10:00:00Z", Some("focus"), None),
            interval("2024-06-04T14:30:00Z", Some("review"), None),
        ]);
        assert_eq!(
            PatternTables::analyze(&resolved),
            PatternTables::analyze(&resolved)
        );
    }

    #[test]
    fn same_activity_and_time_on_three_days_is_high() {
        let resolved = resolve(&[
            interval("2024-06-03T10:00:00Z", Some("focus"), None),
            interval("2024-06-04T10:00:00Z", Some("focus"), None),
            interval("2024-06-05T10:00:00Z", Some("focus"), None),
        ]);
        let tables = PatternTables::analyze(&resolved);
        assert_eq!(tables.by_activity.get("focus"), Some(&3));
        assert_eq!(tables.by_time_of_day.get("10:00"), Some(&3));
        for entry in &resolved {
            assert_eq!(tables.classify(entry), RepeatabilityTier::High);
        }
    }

    #[test]
    fn singleton_interval_is_low() {
        let resolved = resolve(&[interval("2024-06-03T10:00:00Z", Some("focus"), None)]);
        let tables = PatternTables::analyze(&resolved);
        assert_eq!(tables.classify(&resolved[0]), RepeatabilityTier::Low);
    }

    #[test]
    fn repeated_activity_at_different_times_is_medium() {
        let resolved = resolve(&[
            interval("2024-06-03T10:00:00Z", Some("focus"), None),
            interval("2024-06-04T15:30:00Z", Some("focus"), None),
        ]);
        let tables = PatternTables::analyze(&resolved);
        assert_eq!(tables.classify(&resolved[0]), RepeatabilityTier::Medium);
        assert_eq!(tables.classify(&resolved[1]), RepeatabilityTier::Medium);
    }

    #[test]
    fn classify_defaults_missing_keys_to_one() {
        let tables = PatternTables::default();
        let resolved = resolve(&[interval("2024-06-03T10:00:00Z", Some("focus"), None)]);
        assert_eq!(tables.classify(&resolved[0]), RepeatabilityTier::Low);
    }
}
