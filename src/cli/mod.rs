pub mod commands;

pub use commands::{Cli, Commands, load_transcript, run};
