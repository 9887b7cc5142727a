//! Data models for parsed WhatsApp transcripts and analysis results.
//!
//! - [`Message`] - One parsed chat message with cached calendar fields
//! - [`Transcript`] - The ordered, immutable message sequence of one export
//! - [`report`] - Named result records returned by the analytics queries

pub mod message;
pub mod report;
pub mod transcript;

pub use message::{
    CalendarFields, MEDIA_PLACEHOLDER, Meridiem, Message, SYSTEM_SENDER, hour_label, weekday_name,
};
pub use report::{
    ActivityAverages, ActivityHeatmap, AnalysisReport, DateCount, FormattedSummary, LabeledCount,
    MentionCount, Mood, ParticipantLexicon, ParticipantShare, SentimentBreakdown, SummaryStats,
    TermCount, WeekdayCount,
};
pub use transcript::Transcript;
