//! Projects the entry list and its statistics into what the page draws.

use crate::models::{DashboardView, HistoryItem, MoodEntry, StatsResponse};
use chrono::{DateTime, Local, TimeZone, Utc};

pub const EMPTY_MESSAGE: &str = "No mood logs yet. Start tracking!";
const FALLBACK_COLOR: &str = "#fff";

pub fn dashboard(entries: &[MoodEntry], stats: StatsResponse) -> DashboardView {
    project(entries, stats, Utc::now(), &Local)
}

pub fn project<Tz: TimeZone>(
    entries: &[MoodEntry],
    stats: StatsResponse,
    now: DateTime<Utc>,
    tz: &Tz,
) -> DashboardView
where
    Tz::Offset: std::fmt::Display,
{
    DashboardView {
        date_heading: date_heading(now, tz),
        entries: entries.iter().map(|entry| history_item(entry, tz)).collect(),
        total_count: stats.total_count,
        current_streak: stats.current_streak,
        streak_label: stats.streak_label,
        empty_message: entries.is_empty().then(|| EMPTY_MESSAGE.to_string()),
    }
}

pub fn date_heading<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.with_timezone(tz).format("%A, %B %-d, %Y").to_string()
}

fn history_item<Tz: TimeZone>(entry: &MoodEntry, tz: &Tz) -> HistoryItem
where
    Tz::Offset: std::fmt::Display,
{
    let local = entry.timestamp.with_timezone(tz);
    let color = if entry.color.is_empty() {
        FALLBACK_COLOR.to_string()
    } else {
        entry.color.clone()
    };
    let text = if entry.note.is_empty() {
        entry.label.clone()
    } else {
        entry.note.clone()
    };

    HistoryItem {
        id: entry.id,
        emoji: entry.emoji.clone(),
        color,
        date_label: local.format("%b %-d").to_string(),
        time_label: local.format("%I:%M %p").to_string(),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MOODS;
    use crate::stats::build_stats_at;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, hour, minute, 0).unwrap()
    }

    #[test]
    fn empty_history_shows_placeholder() {
        let stats = build_stats_at(at(9, 0).date_naive(), &Utc, &[]);
        let view = project(&[], stats, at(9, 0), &Utc);

        assert_eq!(view.date_heading, "Sunday, October 18, 2026");
        assert!(view.entries.is_empty());
        assert_eq!(view.empty_message.as_deref(), Some(EMPTY_MESSAGE));
        assert_eq!(view.streak_label, "0 Days");
    }

    #[test]
    fn items_keep_order_and_format_time() {
        let entries = vec![
            MoodEntry::new(2, &MOODS[0], "finished the report", at(14, 5)),
            MoodEntry::new(1, &MOODS[3], "", at(7, 45)),
        ];
        let stats = build_stats_at(at(15, 0).date_naive(), &Utc, &entries);
        let view = project(&entries, stats, at(15, 0), &Utc);

        assert_eq!(view.empty_message, None);
        assert_eq!(view.total_count, 2);
        assert_eq!(view.current_streak, 1);
        assert_eq!(view.streak_label, "1 Day");

        let first = &view.entries[0];
        assert_eq!(first.id, 2);
        assert_eq!(first.date_label, "Oct 18");
        assert_eq!(first.time_label, "02:05 PM");
        assert_eq!(first.text, "finished the report");

        let second = &view.entries[1];
        assert_eq!(second.time_label, "07:45 AM");
        assert_eq!(second.text, "Bad");
    }

    #[test]
    fn missing_color_falls_back() {
        let mut entry = MoodEntry::new(1, &MOODS[1], "", at(10, 0));
        entry.color.clear();
        let stats = build_stats_at(at(10, 0).date_naive(), &Utc, std::slice::from_ref(&entry));
        let view = project(&[entry], stats, at(10, 0), &Utc);

        assert_eq!(view.entries[0].color, "#fff");
    }
}
