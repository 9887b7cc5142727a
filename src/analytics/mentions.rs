use std::collections::HashMap;

use crate::models::{MentionCount, Message, SYSTEM_SENDER};

/// Who gets mentioned most, by raw mention count
///
/// Messages are scanned in order and split on whitespace. A token mentions a participant
/// when it contains that participant's name, ignoring case, as a substring (so `@alice,`
/// and `alice's` both count). Senders never mention themselves. `participants` is the
/// full list of known names; the system sender is ignored.
pub fn most_mentioned(
    messages: &[&Message],
    participants: &[String],
    top: usize,
) -> Vec<MentionCount> {
    let candidates: Vec<(&str, String)> = participants
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty() && *name != SYSTEM_SENDER)
        .map(|name| (name, name.to_lowercase()))
        .collect();

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for message in messages {
        for token in message.text.split_whitespace() {
            let token = token.to_lowercase();
            for (name, lowered) in &candidates {
                if *name != message.sender && token.contains(lowered.as_str()) {
                    *counts.entry(*name).or_default() += 1;
                }
            }
        }
    }

    let mut ranked: Vec<MentionCount> = counts
        .into_iter()
        .map(|(participant, mentions)| MentionCount {
            participant: participant.to_string(),
            mentions,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.mentions.cmp(&a.mentions).then_with(|| a.participant.cmp(&b.participant))
    });
    ranked.truncate(top);
    ranked
}
