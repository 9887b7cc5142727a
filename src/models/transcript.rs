use std::collections::BTreeSet;

use serde::Serialize;

use super::message::Message;
use crate::filters::ALL_PARTICIPANTS;

/// Parsed chat export, in transcript order
///
/// Built once by the parser and never mutated afterwards. Queries borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Distinct senders, sorted, including the system sender when present
    pub fn participants(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|m| m.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Values a user may pick from: `"All"` followed by every participant
    pub fn selector_options(&self) -> Vec<String> {
        let participants = self.participants();
        let mut options = Vec::with_capacity(participants.len() + 1);
        options.push(ALL_PARTICIPANTS.to_string());
        options.extend(participants);
        options
    }
}
