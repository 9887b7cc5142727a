use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("message {index}: timestamp {raw:?} does not match the WhatsApp export format: {source}")]
    InvalidTimestamp {
        index: usize,
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl TranscriptError {
    /// One-line message suitable for showing to the person who supplied the file
    pub fn user_message(&self) -> &'static str {
        match self {
            TranscriptError::InvalidTimestamp { .. } => {
                "The uploaded file does not match the expected WhatsApp chat export format"
            }
        }
    }
}
