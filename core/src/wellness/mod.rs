//! Wellness logs
//!
//! Daily mood tracking and quick journal entries. Both are append-only,
//! in-memory logs with no relation to chat sessions.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Five-point mood scale, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful,
    Low,
    Neutral,
    Good,
    Great,
}

impl Mood {
    /// All moods in scale order
    pub const ALL: [Mood; 5] = [
        Mood::Awful,
        Mood::Low,
        Mood::Neutral,
        Mood::Good,
        Mood::Great,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Low => "low",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    /// Emoji used on the TUI mood scale
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Awful => "😞",
            Mood::Low => "😕",
            Mood::Neutral => "😐",
            Mood::Good => "🙂",
            Mood::Great => "😄",
        }
    }

    /// Mood for a 1-based scale position (the TUI's keys 1..5)
    pub fn from_scale(position: u8) -> Option<Mood> {
        match position {
            1..=5 => Some(Mood::ALL[(position - 1) as usize]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One logged mood
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Day the mood was logged, "%Y-%m-%d"
    pub date: String,
    pub mood: Mood,
}

/// One journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Entry time, "%Y-%m-%d %H:%M"
    pub date: String,
    pub entry: String,
}

/// In-memory mood + journal logs for one user session
#[derive(Debug, Default)]
pub struct WellnessLog {
    moods: Vec<MoodEntry>,
    journal: Vec<JournalEntry>,
}

impl WellnessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    /// Log today's mood
    pub fn log_mood(&mut self, mood: Mood) {
        self.log_mood_at(mood, Local::now());
    }

    pub(crate) fn log_mood_at(&mut self, mood: Mood, now: DateTime<Local>) {
        self.moods.push(MoodEntry {
            date: now.format("%Y-%m-%d").to_string(),
            mood,
        });
    }

    /// Append a journal entry
    pub fn log_journal(&mut self, entry: impl Into<String>) {
        self.log_journal_at(entry, Local::now());
    }

    pub(crate) fn log_journal_at(&mut self, entry: impl Into<String>, now: DateTime<Local>) {
        self.journal.push(JournalEntry {
            date: now.format("%Y-%m-%d %H:%M").to_string(),
            entry: entry.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn moods_are_ordinal() {
        assert!(Mood::Awful < Mood::Low);
        assert!(Mood::Good < Mood::Great);
        assert_eq!(Mood::from_scale(1), Some(Mood::Awful));
        assert_eq!(Mood::from_scale(5), Some(Mood::Great));
        assert_eq!(Mood::from_scale(0), None);
        assert_eq!(Mood::from_scale(6), None);
    }

    #[test]
    fn logs_are_append_only_and_dated() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 21, 15, 0).unwrap();
        let mut log = WellnessLog::new();
        log.log_mood_at(Mood::Neutral, now);
        log.log_mood_at(Mood::Good, now);
        log.log_journal_at("long day, feeling better tonight", now);

        assert_eq!(log.moods().len(), 2);
        assert_eq!(log.moods()[0].date, "2024-03-09");
        assert_eq!(log.moods()[1].mood, Mood::Good);
        assert_eq!(log.journal().len(), 1);
        assert_eq!(log.journal()[0].date, "2024-03-09 21:15");
    }
}
