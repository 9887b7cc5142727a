use rayon::prelude::*;

use super::tally::{Tally, group_by_sender};
use crate::lexicon::Lexicon;
use crate::models::{Message, ParticipantLexicon, TermCount};

/// Lower-cased words of a message with punctuation removed and stopwords dropped
pub fn word_tokens<'a>(text: &'a str, lexicon: &'a Lexicon) -> impl Iterator<Item = String> + 'a {
    text.split_whitespace()
        .map(|token| token.chars().filter(|c| c.is_alphanumeric()).collect::<String>().to_lowercase())
        .filter(move |word| !word.is_empty() && !lexicon.stopwords.is_stopword(word))
}

/// Emoji characters of a message, in order
pub fn emoji_chars<'a>(text: &'a str, lexicon: &'a Lexicon) -> impl Iterator<Item = char> + 'a {
    text.chars().filter(move |&c| lexicon.emojis.is_emoji(c))
}

fn lexical_messages<'a>(messages: &'a [&'a Message]) -> impl Iterator<Item = &'a Message> + 'a {
    messages.iter().copied().filter(|m| !m.is_media())
}

/// Full word frequency table for a selection, most frequent first
///
/// This is the token table a word-cloud renderer consumes. Media placeholders are skipped.
pub fn word_frequencies(messages: &[&Message], lexicon: &Lexicon) -> Vec<TermCount> {
    let tally: Tally<String> =
        lexical_messages(messages).flat_map(|m| word_tokens(&m.text, lexicon)).collect();
    into_term_counts(tally.ranked())
}

/// Full emoji frequency table for a selection, most frequent first
pub fn emoji_frequencies(messages: &[&Message], lexicon: &Lexicon) -> Vec<TermCount> {
    let tally: Tally<char> =
        lexical_messages(messages).flat_map(|m| emoji_chars(&m.text, lexicon)).collect();
    tally.ranked().into_iter().map(|(c, count)| TermCount { term: c.to_string(), count }).collect()
}

/// Most frequent words and emojis for every sender in the selection
///
/// Includes the system sender. Each list is comma-joined; ties keep first-seen order.
pub fn top_terms_by_participant(
    messages: &[&Message],
    lexicon: &Lexicon,
    top_words: usize,
    top_emojis: usize,
) -> Vec<ParticipantLexicon> {
    let groups: Vec<_> = group_by_sender(messages).into_iter().collect();

    groups
        .par_iter()
        .map(|(participant, own)| {
            let words: Tally<String> =
                lexical_messages(own).flat_map(|m| word_tokens(&m.text, lexicon)).collect();
            let emojis: Tally<char> =
                lexical_messages(own).flat_map(|m| emoji_chars(&m.text, lexicon)).collect();

            ParticipantLexicon {
                participant: participant.to_string(),
                top_words: join_terms(words.most_common(top_words).into_iter().map(|(w, _)| w)),
                top_emojis: join_terms(
                    emojis.most_common(top_emojis).into_iter().map(|(c, _)| c.to_string()),
                ),
            }
        })
        .collect()
}

fn into_term_counts(ranked: Vec<(String, u64)>) -> Vec<TermCount> {
    ranked.into_iter().map(|(term, count)| TermCount { term, count }).collect()
}

fn join_terms(terms: impl Iterator<Item = String>) -> String {
    terms.collect::<Vec<_>>().join(", ")
}
