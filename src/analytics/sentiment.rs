use rayon::prelude::*;
use serde::Serialize;

use super::tally::group_by_sender;
use crate::lexicon::PolarityScorer;
use crate::models::{Message, Mood, SYSTEM_SENDER, SentimentBreakdown};
use crate::utils::format::round2;

/// Compound-score cut-offs separating positive, neutral and negative messages
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentThresholds {
    /// Scores at or above this are positive
    pub positive: f64,
    /// Scores at or below this are negative
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self { positive: 0.05, negative: -0.05 }
    }
}

impl SentimentThresholds {
    pub fn classify(&self, compound: f64) -> Mood {
        if compound >= self.positive {
            Mood::Positive
        } else if compound <= self.negative {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }
}

/// Majority mood; equal counts resolve in the order positive, neutral, negative
pub fn overall_mood(positive: u64, neutral: u64, negative: u64) -> Mood {
    let top = positive.max(neutral).max(negative);
    if positive == top {
        Mood::Positive
    } else if neutral == top {
        Mood::Neutral
    } else {
        Mood::Negative
    }
}

/// Sentiment breakdown for every human sender in the selection
///
/// The system sender and media placeholders are skipped. Senders left with no scored
/// message do not appear in the result.
pub fn sentiment_by_participant(
    messages: &[&Message],
    scorer: &dyn PolarityScorer,
    thresholds: SentimentThresholds,
) -> Vec<SentimentBreakdown> {
    let groups: Vec<_> = group_by_sender(messages)
        .into_iter()
        .filter(|(sender, _)| *sender != SYSTEM_SENDER)
        .collect();

    groups
        .par_iter()
        .filter_map(|(participant, own)| {
            let (mut positive, mut neutral, mut negative) = (0u64, 0u64, 0u64);
            for message in own.iter().filter(|m| !m.is_media()) {
                match thresholds.classify(scorer.compound(&message.text)) {
                    Mood::Positive => positive += 1,
                    Mood::Neutral => neutral += 1,
                    Mood::Negative => negative += 1,
                }
            }

            let total = positive + neutral + negative;
            if total == 0 {
                return None;
            }

            let percent = |count: u64| round2(count as f64 / total as f64 * 100.0);
            Some(SentimentBreakdown {
                participant: participant.to_string(),
                positive_percent: percent(positive),
                neutral_percent: percent(neutral),
                negative_percent: percent(negative),
                mood: overall_mood(positive, neutral, negative),
            })
        })
        .collect()
}
