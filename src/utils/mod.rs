pub mod files;
pub mod format;

pub use files::{read_transcript, validate_file_size};
pub use format::{format_average, format_count, round2};
