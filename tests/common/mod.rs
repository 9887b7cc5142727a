//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Builder for WhatsApp export transcripts
pub struct TranscriptBuilder {
    lines: Vec<String>,
}

impl TranscriptBuilder {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a raw line verbatim (headers, continuation lines, malformed stamps)
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a `sender: text` message at the given export timestamp, e.g. `"1/2/24, 10:30 AM"`
    pub fn message(self, stamp: &str, sender: &str, text: &str) -> Self {
        self.raw(&format!("{} - {}: {}", stamp, sender, text))
    }

    /// Add a service line without a sender prefix
    pub fn notice(self, stamp: &str, text: &str) -> Self {
        self.raw(&format!("{} - {}", stamp, text))
    }

    /// Render the transcript with a trailing newline, as WhatsApp exports it
    pub fn build(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Write the transcript to a temporary file
    pub fn write(&self) -> NamedTempFile {
        write_transcript(&self.build())
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write arbitrary content to a temporary `.txt` file
pub fn write_transcript(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("Failed to create temp transcript");
    file.write_all(content.as_bytes()).expect("Failed to write transcript");
    file.flush().expect("Failed to flush transcript");
    file
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// A small but realistic group chat spanning several days
///
/// - Jan 1 2024 (Monday) through Jan 3, then Jan 5 (Friday)
/// - Alice 4 messages, Bob 3, Carol 1, plus 2 system notices
/// - One media message, two links, a multi-line message and some emojis
pub fn realistic_chat() -> TranscriptBuilder {
    TranscriptBuilder::new()
        .notice(
            "1/1/24, 9:00 AM",
            "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
        )
        .notice("1/1/24, 9:01 AM", "Alice created group \"Weekend\"")
        .message("1/1/24, 9:15 AM", "Alice", "Good morning everyone 😀")
        .message("1/1/24, 9:20 AM", "Bob", "Morning Alice! Pizza tonight? 🍕🍕")
        .message("1/2/24, 7:45 PM", "Carol", "check https://example.com/menu")
        .message("1/2/24, 8:00 PM", "Alice", "I love that place, it is wonderful")
        .raw("see you all at eight")
        .message("1/3/24, 11:30 PM", "Bob", "<Media omitted>")
        .message("1/5/24, 12:05 AM", "Alice", "@bob the photo was terrible")
        .message("1/5/24, 12:10 AM", "Bob", "haha sorry www.photos.net 😂")
        .message("1/5/24, 1:00 PM", "Alice", "Pizza again?")
}
