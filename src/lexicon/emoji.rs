use super::EmojiClassifier;

/// Emoji lookup backed by the Unicode emoji table of the `emojis` crate
///
/// Classification is per character, so a ZWJ sequence counts each component emoji and
/// modifiers such as U+FE0F are not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiTable;

impl EmojiClassifier for UnicodeEmojiTable {
    fn is_emoji(&self, c: char) -> bool {
        // Every emoji in the table contains at least one non-ASCII scalar
        if c.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        emojis::get(c.encode_utf8(&mut buf)).is_some()
    }
}
