//! WhatsApp Chat Analyzer - Statistics and text analysis for exported WhatsApp chats
//!
//! This library turns a WhatsApp "Export chat" transcript into typed messages and runs a
//! set of read-only queries over them. It supports:
//!
//! - Parsing `M/D/YY, H:MM AM - Sender: text` transcripts, including multi-line messages
//!   and system notices
//! - Restricting the analysis to one participant or the whole chat
//! - Summary statistics, activity streaks, time histograms and a weekday × hour heatmap
//! - Word and emoji frequency, lexicon-based sentiment and mention counting
//!
//! # Example
//!
//! ```
//! use whatsapp_chat_analyzer::{Analyzer, ParticipantSelector, parse_transcript};
//!
//! let raw = "1/2/24, 10:30 AM - Alice: Hello there\n1/2/24, 10:31 AM - Bob: Hi Alice!\n";
//! let transcript = parse_transcript(raw)?;
//! let report = Analyzer::default().analyze(&transcript, &ParticipantSelector::All);
//! println!("{} messages", report.summary.total_messages);
//! # Ok::<(), whatsapp_chat_analyzer::TranscriptError>(())
//! ```

pub mod analytics;
pub mod cli;
pub mod error;
pub mod filters;
pub mod lexicon;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use analytics::{AnalysisConfig, Analyzer};
pub use error::TranscriptError;
pub use filters::{ParticipantSelector, apply_selector};
pub use lexicon::Lexicon;
pub use models::{AnalysisReport, Message, Transcript};
pub use parsers::parse_transcript;
pub use utils::format::format_count;
