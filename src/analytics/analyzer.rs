use serde::Serialize;
use tracing::debug;

use super::calendar::daily_timeline;
use super::histograms::{
    activity_averages, activity_heatmap, busiest_hours, busiest_months, busiest_participants,
    busiest_weekdays, busiest_weeks,
};
use super::lexical::{emoji_frequencies, top_terms_by_participant, word_frequencies};
use super::mentions::most_mentioned;
use super::sentiment::{SentimentThresholds, sentiment_by_participant};
use super::summary::summary_stats;
use crate::filters::{ParticipantSelector, apply_selector};
use crate::lexicon::Lexicon;
use crate::models::{AnalysisReport, Transcript};

/// Tunable sizes and cut-offs for the lexical and social queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisConfig {
    pub top_words: usize,
    pub top_emojis: usize,
    pub top_mentions: usize,
    pub sentiment: SentimentThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 5,
            top_emojis: 5,
            top_mentions: 10,
            sentiment: SentimentThresholds::default(),
        }
    }
}

/// Runs every query over a transcript for one participant selection
///
/// # Examples
///
/// ```
/// use whatsapp_chat_analyzer::analytics::Analyzer;
/// use whatsapp_chat_analyzer::filters::ParticipantSelector;
/// use whatsapp_chat_analyzer::parse_transcript;
///
/// let raw = "1/2/24, 10:30 AM - Alice: Hello there\n1/2/24, 10:31 AM - Bob: Hi Alice!\n";
/// let transcript = parse_transcript(raw)?;
/// let report = Analyzer::default().analyze(&transcript, &ParticipantSelector::All);
/// assert_eq!(report.summary.total_words, 4);
/// # Ok::<(), whatsapp_chat_analyzer::TranscriptError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, config: AnalysisConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Filter the transcript and run every query on the selection
    ///
    /// The queries are independent, so the expensive groups run in parallel. Mentions are
    /// matched against every participant of the transcript, not just the selection.
    pub fn analyze(&self, transcript: &Transcript, selector: &ParticipantSelector) -> AnalysisReport {
        let selection = apply_selector(transcript.messages(), selector);
        let participants = transcript.participants();
        debug!(selector = %selector, messages = selection.len(), "Analyzing selection");

        let lexicon = &self.lexicon;
        let config = &self.config;
        let messages = selection.as_slice();

        let ((summary, averages, timeline), (temporal, (lexical, social))) = rayon::join(
            || (summary_stats(messages), activity_averages(messages), daily_timeline(messages)),
            || {
                rayon::join(
                    || {
                        (
                            busiest_participants(messages),
                            busiest_months(messages),
                            busiest_weekdays(messages),
                            busiest_weeks(messages),
                            busiest_hours(messages),
                            activity_heatmap(messages),
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                (
                                    top_terms_by_participant(
                                        messages,
                                        lexicon,
                                        config.top_words,
                                        config.top_emojis,
                                    ),
                                    word_frequencies(messages, lexicon),
                                    emoji_frequencies(messages, lexicon),
                                )
                            },
                            || {
                                (
                                    sentiment_by_participant(
                                        messages,
                                        lexicon.polarity.as_ref(),
                                        config.sentiment,
                                    ),
                                    most_mentioned(messages, &participants, config.top_mentions),
                                )
                            },
                        )
                    },
                )
            },
        );

        let (
            busiest_participants,
            busiest_months,
            busiest_weekdays,
            busiest_weeks,
            busiest_hours,
            heatmap,
        ) = temporal;
        let (top_terms, word_frequencies, emoji_frequencies) = lexical;
        let (sentiment, mentions) = social;

        AnalysisReport {
            selection: selector.to_string(),
            summary,
            averages,
            timeline,
            busiest_participants,
            busiest_months,
            busiest_weekdays,
            busiest_weeks,
            busiest_hours,
            heatmap,
            top_terms,
            word_frequencies,
            emoji_frequencies,
            sentiment,
            mentions,
        }
    }
}
