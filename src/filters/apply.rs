use super::selector::ParticipantSelector;
use crate::models::Message;

/// Restrict messages to a participant selection, preserving order
///
/// Returns borrowed views; the parsed sequence itself is never modified. An unknown name
/// yields an empty selection.
pub fn apply_selector<'a>(messages: &'a [Message], selector: &ParticipantSelector) -> Vec<&'a Message> {
    if selector.is_all() {
        return messages.iter().collect();
    }

    messages.iter().filter(|message| selector.matches(&message.sender)).collect()
}
