//! Parser for exported WhatsApp chat transcripts
//!
//! # Error Handling Strategy
//!
//! A transcript has a single fixed timestamp layout. A timestamp that matches the boundary
//! pattern but does not parse means the export format is not supported:
//!
//! - **Bad timestamps**: fatal for the whole transcript. No partial results are returned.
//!
//! - **Bodies without a sender prefix**: recovered locally by assigning the system sender
//!   (join notices, encryption banners, subject changes).
//!
//! - **No timestamps at all**: an empty transcript, not an error.

pub mod timestamp;
pub mod transcript;

pub use timestamp::{TIMESTAMP_FORMAT, parse_stamp};
pub use transcript::parse_transcript;
