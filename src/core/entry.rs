//! Word/clue entries
//!
//! A `WordEntry` is one row of the stored word corpus: the word to guess and
//! the clue shown to the player.

/// One word/clue pair drawn for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The word to guess. Uppercase-normalized at use time, not here.
    pub word: String,
    /// The clue shown to the player before guessing.
    pub clue: String,
}

impl WordEntry {
    /// Create an entry from a word and its clue.
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }

    /// The sentinel entry handed out when the word table has no rows.
    ///
    /// Masking and scoring both tolerate the empty word, so a round over
    /// this entry produces an empty display and a score of zero.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            word: String::new(),
            clue: String::new(),
        }
    }

    /// True for the sentinel returned on an empty word table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.clue.is_empty()
    }
}
