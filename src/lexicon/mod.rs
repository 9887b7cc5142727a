//! Read-only lexical resources used by the word, emoji and sentiment queries
//!
//! Each resource sits behind a trait so the analytics layer never depends on a concrete
//! dictionary. A [`Lexicon`] is built once at startup and shared (it is cheap to clone).

pub mod emoji;
pub mod polarity;
pub mod stopwords;

use std::sync::Arc;

pub use emoji::UnicodeEmojiTable;
pub use polarity::VaderScorer;
pub use stopwords::Stopwords;

pub trait StopwordList: Send + Sync {
    /// Case-insensitive membership test
    fn is_stopword(&self, word: &str) -> bool;
}

pub trait EmojiClassifier: Send + Sync {
    fn is_emoji(&self, c: char) -> bool;
}

pub trait PolarityScorer: Send + Sync {
    /// Normalised polarity in `[-1.0, 1.0]`
    fn compound(&self, text: &str) -> f64;
}

#[derive(Clone)]
pub struct Lexicon {
    pub stopwords: Arc<dyn StopwordList>,
    pub emojis: Arc<dyn EmojiClassifier>,
    pub polarity: Arc<dyn PolarityScorer>,
}

impl Lexicon {
    pub fn new(
        stopwords: Arc<dyn StopwordList>,
        emojis: Arc<dyn EmojiClassifier>,
        polarity: Arc<dyn PolarityScorer>,
    ) -> Self {
        Self { stopwords, emojis, polarity }
    }

    /// Built-in stopwords, the Unicode emoji table and VADER
    pub fn builtin() -> Self {
        Self::with_stopwords(Stopwords::builtin())
    }

    /// Default resources with a custom stopword list
    pub fn with_stopwords(stopwords: Stopwords) -> Self {
        Self::new(Arc::new(stopwords), Arc::new(UnicodeEmojiTable), Arc::new(VaderScorer::new()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon").finish_non_exhaustive()
    }
}
