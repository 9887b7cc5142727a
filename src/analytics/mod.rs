//! Read-only queries over a message selection
//!
//! Every query is a pure function of a `&[&Message]` selection (see
//! [`crate::filters::apply_selector`]) and returns a named record from
//! [`crate::models::report`]. None of them mutate their input, and all of them accept an
//! empty selection:
//!
//! - **Counts and averages** divide only after checking for zero messages or buckets.
//! - **Max/min style results** (longest message, most active weekday) are `Option`s that
//!   are `None` on an empty selection.
//! - **Tables** (timeline, histograms, frequency tables) are simply empty, except the
//!   heatmap, which always has its seven weekday rows.
//!
//! [`Analyzer`] bundles the queries and runs independent groups of them in parallel.

pub mod analyzer;
pub mod calendar;
pub mod histograms;
pub mod lexical;
pub mod mentions;
pub mod sentiment;
pub mod summary;
pub mod tally;

pub use analyzer::{AnalysisConfig, Analyzer};
pub use calendar::{
    active_dates, active_day_count, daily_timeline, longest_inactive_gap, longest_streak,
    most_active_weekday,
};
pub use histograms::{
    activity_averages, activity_heatmap, busiest_hours, busiest_months, busiest_participants,
    busiest_weekdays, busiest_weeks,
};
pub use lexical::{emoji_frequencies, top_terms_by_participant, word_frequencies};
pub use mentions::most_mentioned;
pub use sentiment::{SentimentThresholds, overall_mood, sentiment_by_participant};
pub use summary::{count_links, summary_stats};
