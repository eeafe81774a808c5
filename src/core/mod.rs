//! Core domain types and rules
//!
//! Pure game logic with zero external dependencies: the word/clue entry,
//! masked-display rendering and positional scoring.

mod entry;
mod mask;
mod score;

pub use entry::WordEntry;
pub use mask::{REVEAL_POSITIONS, mask_word};
pub use score::{MATCH_POINTS, MISS_PENALTY, score_guess};
