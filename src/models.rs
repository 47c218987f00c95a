use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mood {
    pub mood: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

pub const MOODS: [Mood; 5] = [
    Mood {
        mood: "great",
        emoji: "😄",
        color: "#4ade80",
        label: "Great",
    },
    Mood {
        mood: "good",
        emoji: "🙂",
        color: "#60a5fa",
        label: "Good",
    },
    Mood {
        mood: "okay",
        emoji: "😐",
        color: "#facc15",
        label: "Okay",
    },
    Mood {
        mood: "bad",
        emoji: "😔",
        color: "#fb923c",
        label: "Bad",
    },
    Mood {
        mood: "awful",
        emoji: "😢",
        color: "#f87171",
        label: "Awful",
    },
];

impl Mood {
    /// Looks up a catalog mood by its code, ignoring case and surrounding whitespace.
    pub fn find(code: &str) -> Option<Mood> {
        let code = code.trim();
        MOODS
            .iter()
            .copied()
            .find(|mood| mood.mood.eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: EntryId,
    pub mood: String,
    pub emoji: String,
    pub color: String,
    pub label: String,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub fn new(id: EntryId, mood: &Mood, note: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            mood: mood.mood.to_string(),
            emoji: mood.emoji.to_string(),
            color: mood.color.to_string(),
            label: mood.label.to_string(),
            note: note.trim().to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub total_count: usize,
    pub current_streak: u32,
    pub streak_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub id: EntryId,
    pub emoji: String,
    pub color: String,
    pub date_label: String,
    pub time_label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub date_heading: String,
    pub entries: Vec<HistoryItem>,
    pub total_count: usize,
    pub current_streak: u32,
    pub streak_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}
