use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::StopwordList;

/// Built-in English and Hinglish stopword list, one word per line
const DEFAULT_STOPWORDS: &str = include_str!("../../resources/stopwords.txt");

/// Case-insensitive stopword set
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The embedded default list
    pub fn builtin() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }

    /// Parse a newline-separated list; blank lines and lines starting with `#` are ignored
    pub fn from_list(list: &str) -> Self {
        let words = list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Load a stopword list from a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let list = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword list: {}", path.display()))?;
        let stopwords = Self::from_list(&list);
        debug!(path = %path.display(), words = stopwords.len(), "Loaded stopword list");
        Ok(stopwords)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordList for Stopwords {
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
