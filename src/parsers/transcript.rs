use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::timestamp::{normalize_spaces, parse_stamp};
use crate::error::TranscriptError;
use crate::models::{Message, SYSTEM_SENDER, Transcript};

/// Timestamp plus separator that opens every message: `1/2/24, 10:30 AM - `
static MESSAGE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}/\d{1,2}/\d{1,2},\s\d{1,2}:\d{1,2}\s[AP]M\s-\s")
        .expect("message boundary pattern is valid")
});

/// `sender: text`, where the sender holds no colon or newline and the text may span lines
static SENDER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^([^\n:]+): (.+)$").expect("sender pattern is valid"));

/// Parse a WhatsApp chat export into messages, in file order
///
/// Text before the first timestamp is ignored. Input without any timestamp yields an
/// empty transcript.
///
/// # Errors
///
/// Returns [`TranscriptError::InvalidTimestamp`] if any timestamp matches the boundary
/// pattern but is not a valid `M/D/YY, H:MM AM|PM` date. One bad timestamp rejects the
/// whole transcript.
///
/// # Examples
///
/// ```
/// use whatsapp_chat_analyzer::parse_transcript;
///
/// let raw = "1/2/24, 10:30 AM - Alice: Hello there\n1/2/24, 10:31 AM - Bob: Hi Alice!\n";
/// let transcript = parse_transcript(raw)?;
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.messages()[1].sender, "Bob");
/// # Ok::<(), whatsapp_chat_analyzer::TranscriptError>(())
/// ```
pub fn parse_transcript(raw: &str) -> Result<Transcript, TranscriptError> {
    let text = normalize_spaces(raw);
    let boundaries: Vec<_> = MESSAGE_BOUNDARY.find_iter(&text).collect();

    if let Some(first) = boundaries.first()
        && first.start() > 0
    {
        debug!(bytes = first.start(), "Discarding text before the first timestamp");
    }

    let mut messages = Vec::with_capacity(boundaries.len());
    for (index, boundary) in boundaries.iter().enumerate() {
        let timestamp = parse_stamp(boundary.as_str()).map_err(|source| {
            TranscriptError::InvalidTimestamp { index, raw: boundary.as_str().to_string(), source }
        })?;

        let body_end = boundaries.get(index + 1).map_or(text.len(), |next| next.start());
        let body = strip_trailing_newline(&text[boundary.end()..body_end]);
        let (sender, content) = split_sender(body);

        messages.push(Message::new(sender, timestamp, content));
    }

    debug!(messages = messages.len(), "Parsed transcript");
    Ok(Transcript::new(messages))
}

/// Remove the single line break left between a body and the next timestamp
fn strip_trailing_newline(body: &str) -> &str {
    body.strip_suffix("\r\n").or_else(|| body.strip_suffix('\n')).unwrap_or(body)
}

/// Split `sender: text`; bodies without a sender prefix belong to the system sender
fn split_sender(body: &str) -> (&str, &str) {
    match SENDER_PREFIX.captures(body) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(sender), Some(text)) => (sender.as_str(), text.as_str()),
            _ => (SYSTEM_SENDER, body),
        },
        None => (SYSTEM_SENDER, body),
    }
}
