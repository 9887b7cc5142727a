use once_cell::sync::Lazy;
use regex::Regex;

use super::calendar::{active_dates, longest_inactive_gap, longest_streak, most_active_weekday};
use crate::models::{Message, SummaryStats};

/// Scheme or `www.` URLs, plus bare hostnames ending in a country-code or common generic TLD
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"']+|\b(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:online|store|cloud|email|info|tech|blog|club|live|news|link|page|shop|site|com|org|net|edu|gov|mil|int|biz|app|dev|xyz|top|pro|art|io|ai|[a-z]{2})\b(?:/[^\s<>"']*)?"#,
    )
    .expect("url pattern is valid")
});

/// Number of URLs in a message body
///
/// Hostnames touching an `@` are parts of e-mail addresses and are not counted.
pub fn count_links(text: &str) -> u64 {
    URL_PATTERN
        .find_iter(text)
        .filter(|m| !text[..m.start()].ends_with('@') && !text[m.end()..].starts_with('@'))
        .count() as u64
}

/// Headline statistics for a selection
///
/// Safe on an empty selection: counts are zero and the max/min fields are `None`.
pub fn summary_stats(messages: &[&Message]) -> SummaryStats {
    let total_messages = messages.len() as u64;
    let total_words: u64 = messages.iter().map(|m| m.text.split_whitespace().count() as u64).sum();
    let media_messages = messages.iter().filter(|m| m.is_media()).count() as u64;
    let links = messages.iter().map(|m| count_links(&m.text)).sum();

    let lengths: Vec<u64> = messages.iter().map(|m| m.text.chars().count() as u64).collect();
    let characters = lengths.iter().sum();
    let average_words = total_words.checked_div(total_messages).unwrap_or(0);

    let dates = active_dates(messages);

    SummaryStats {
        total_messages,
        total_words,
        media_messages,
        links,
        characters,
        average_words,
        longest_message: lengths.iter().max().copied(),
        shortest_message: lengths.iter().min().copied(),
        most_active_day: most_active_weekday(messages),
        active_days: dates.len() as u64,
        longest_streak: longest_streak(&dates),
        longest_gap: longest_inactive_gap(&dates),
    }
}
