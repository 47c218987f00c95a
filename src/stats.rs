use crate::models::{MoodEntry, StatsResponse};
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeSet;

pub fn build_stats(entries: &[MoodEntry]) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), &Local, entries)
}

pub fn build_stats_at<Tz: TimeZone>(today: NaiveDate, tz: &Tz, entries: &[MoodEntry]) -> StatsResponse {
    let current_streak = current_streak(today, tz, entries);
    StatsResponse {
        total_count: total_count(entries),
        current_streak,
        streak_label: streak_label(current_streak),
    }
}

pub fn total_count(entries: &[MoodEntry]) -> usize {
    entries.len()
}

/// Number of consecutive calendar days with at least one entry, counted back
/// from the most recent logged day. The run only counts while its newest day
/// is today or yesterday.
pub fn current_streak<Tz: TimeZone>(today: NaiveDate, tz: &Tz, entries: &[MoodEntry]) -> u32 {
    let days: BTreeSet<NaiveDate> = entries
        .iter()
        .map(|entry| entry.timestamp.with_timezone(tz).date_naive())
        .collect();

    let mut newest_first = days.into_iter().rev();
    let Some(latest) = newest_first.next() else {
        return 0;
    };

    if let Some(yesterday) = today.pred_opt() {
        if latest < yesterday {
            return 0;
        }
    }

    let mut streak = 1;
    let mut anchor = latest;
    for day in newest_first {
        if anchor.pred_opt() != Some(day) {
            break;
        }
        streak += 1;
        anchor = day;
    }
    streak
}

pub fn streak_label(streak: u32) -> String {
    if streak == 1 {
        format!("{streak} Day")
    } else {
        format!("{streak} Days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MOODS, MoodEntry};
    use chrono::{Duration, FixedOffset, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn entry_on(id: u64, day: NaiveDate, hour: u32) -> MoodEntry {
        let ts = day.and_hms_opt(hour, 15, 0).unwrap().and_utc();
        MoodEntry::new(id, &MOODS[0], "", ts)
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn empty_list_has_no_streak() {
        assert_eq!(current_streak(today(), &Utc, &[]), 0);
        assert_eq!(build_stats_at(today(), &Utc, &[]).total_count, 0);
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let entries = vec![
            entry_on(3, days_ago(0), 8),
            entry_on(2, days_ago(1), 22),
            entry_on(1, days_ago(2), 1),
        ];
        assert_eq!(current_streak(today(), &Utc, &entries), 3);
    }

    #[test]
    fn same_day_entries_count_once() {
        let entries = vec![entry_on(2, days_ago(0), 18), entry_on(1, days_ago(0), 7)];
        assert_eq!(current_streak(today(), &Utc, &entries), 1);
    }

    #[test]
    fn streak_may_end_yesterday() {
        let entries = vec![entry_on(2, days_ago(1), 9), entry_on(1, days_ago(2), 9)];
        assert_eq!(current_streak(today(), &Utc, &entries), 2);
    }

    #[test]
    fn skipped_day_truncates_to_recent_run() {
        let entries = vec![
            entry_on(5, days_ago(0), 9),
            entry_on(4, days_ago(1), 9),
            entry_on(3, days_ago(3), 9),
            entry_on(2, days_ago(4), 9),
            entry_on(1, days_ago(5), 9),
        ];
        assert_eq!(current_streak(today(), &Utc, &entries), 2);
    }

    #[test]
    fn stale_history_breaks_streak() {
        let entries = vec![
            entry_on(3, days_ago(2), 9),
            entry_on(2, days_ago(3), 9),
            entry_on(1, days_ago(4), 9),
        ];
        assert_eq!(current_streak(today(), &Utc, &entries), 0);
    }

    #[test]
    fn unordered_input_is_bucketed_by_day() {
        let entries = vec![
            entry_on(1, days_ago(2), 9),
            entry_on(2, days_ago(0), 9),
            entry_on(3, days_ago(1), 9),
            entry_on(4, days_ago(0), 23),
        ];
        assert_eq!(current_streak(today(), &Utc, &entries), 3);
    }

    #[test]
    fn days_follow_the_observer_timezone() {
        // 23:30 UTC on Jan 3 is already Jan 4 at UTC+2.
        let late = days_ago(2).and_hms_opt(23, 30, 0).unwrap().and_utc();
        let entries = vec![
            entry_on(2, days_ago(0), 10),
            MoodEntry::new(1, &MOODS[1], "", late),
        ];
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(current_streak(today(), &Utc, &entries), 1);
        assert_eq!(current_streak(today(), &plus_two, &entries), 2);
    }

    #[test]
    fn scenario_with_gap_before_fourth_day() {
        let entries = vec![
            entry_on(4, days_ago(0), 9),
            entry_on(3, days_ago(1), 9),
            entry_on(2, days_ago(2), 9),
            entry_on(1, days_ago(4), 9),
        ];
        let stats = build_stats_at(today(), &Utc, &entries);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.total_count, 4);
        assert_eq!(stats.streak_label, "3 Days");
    }

    #[test]
    fn streak_label_pluralizes() {
        assert_eq!(streak_label(0), "0 Days");
        assert_eq!(streak_label(1), "1 Day");
        assert_eq!(streak_label(12), "12 Days");
    }
}
