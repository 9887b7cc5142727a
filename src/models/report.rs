//! Named result records returned by the analytics queries.
//!
//! Every query has its own record type so callers get the shape at compile time. Raw counts
//! are kept numeric; the `formatted` helpers apply the short-form formatter for display.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::format::{format_average, format_count};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub count: u64,
}

/// Headline numbers for a message selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_messages: u64,
    pub total_words: u64,
    pub media_messages: u64,
    pub links: u64,
    pub characters: u64,
    pub average_words: u64,
    /// `None` when the selection is empty
    pub longest_message: Option<u64>,
    /// `None` when the selection is empty
    pub shortest_message: Option<u64>,
    pub most_active_day: Option<WeekdayCount>,
    pub active_days: u64,
    pub longest_streak: u64,
    pub longest_gap: u64,
}

/// [`SummaryStats`] rendered through the short-form formatter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSummary {
    pub total_messages: String,
    pub total_words: String,
    pub media_messages: String,
    pub links: String,
    pub characters: String,
    pub average_words: String,
    pub longest_message: String,
    pub shortest_message: String,
    pub most_active_day: String,
    pub active_days: String,
    pub longest_streak: String,
    pub longest_gap: String,
}

const NOT_AVAILABLE: &str = "-";

impl SummaryStats {
    pub fn formatted(&self) -> FormattedSummary {
        let optional = |value: Option<u64>| value.map_or_else(|| NOT_AVAILABLE.to_string(), format_count);
        FormattedSummary {
            total_messages: format_count(self.total_messages),
            total_words: format_count(self.total_words),
            media_messages: format_count(self.media_messages),
            links: format_count(self.links),
            characters: format_count(self.characters),
            average_words: format_count(self.average_words),
            longest_message: optional(self.longest_message),
            shortest_message: optional(self.shortest_message),
            most_active_day: self
                .most_active_day
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.weekday.clone()),
            active_days: format_count(self.active_days),
            longest_streak: format_count(self.longest_streak),
            longest_gap: format_count(self.longest_gap),
        }
    }
}

/// Mean message count per bucket, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityAverages {
    pub per_month: f64,
    pub per_day_of_month: f64,
    pub per_week: f64,
    pub per_hour: f64,
}

impl ActivityAverages {
    /// Short-formatted values in `[month, day-of-month, week, hour]` order
    pub fn formatted(&self) -> [String; 4] {
        [
            format_average(self.per_month),
            format_average(self.per_day_of_month),
            format_average(self.per_week),
            format_average(self.per_hour),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantShare {
    pub participant: String,
    pub messages: u64,
    /// Share of the selection's messages, in percent with 2 decimals
    pub percent: f64,
}

/// One row of a grouped histogram (month, weekday, week, hour)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u64,
}

/// Weekday × hour message counts
///
/// Rows are always Monday through Sunday. Columns are the hour labels present in the data,
/// in clock order. Every cell is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<u64>>,
}

impl ActivityHeatmap {
    pub fn get(&self, row: &str, column: &str) -> Option<u64> {
        let r = self.rows.iter().position(|x| x == row)?;
        let c = self.columns.iter().position(|x| x == column)?;
        Some(self.cells[r][c])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: u64,
}

/// Most frequent words and emojis for one participant, comma-joined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantLexicon {
    pub participant: String,
    pub top_words: String,
    pub top_emojis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mood {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Positive => "Positive",
            Mood::Neutral => "Neutral",
            Mood::Negative => "Negative",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub participant: String,
    pub positive_percent: f64,
    pub neutral_percent: f64,
    pub negative_percent: f64,
    pub mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentionCount {
    pub participant: String,
    pub mentions: u64,
}

/// Every query result for one participant selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub selection: String,
    pub summary: SummaryStats,
    pub averages: ActivityAverages,
    pub timeline: Vec<DateCount>,
    pub busiest_participants: Vec<ParticipantShare>,
    pub busiest_months: Vec<LabeledCount>,
    pub busiest_weekdays: Vec<LabeledCount>,
    pub busiest_weeks: Vec<LabeledCount>,
    pub busiest_hours: Vec<LabeledCount>,
    pub heatmap: ActivityHeatmap,
    pub top_terms: Vec<ParticipantLexicon>,
    pub word_frequencies: Vec<TermCount>,
    pub emoji_frequencies: Vec<TermCount>,
    pub sentiment: Vec<SentimentBreakdown>,
    pub mentions: Vec<MentionCount>,
}
