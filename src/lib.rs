//! Asah Otak
//!
//! A single-player terminal word-guessing game backed by an embedded SQLite
//! store. Each round draws a random word/clue pair, shows the clue and a
//! partially revealed word, and scores the guess position by position; a
//! round's points can be saved under a player name.
//!
//! # Quick Start
//!
//! ```rust
//! use asah_otak::core::{mask_word, score_guess};
//!
//! // The letters at positions 2 and 6 are revealed, the rest are masked.
//! assert_eq!(mask_word("lemari"), "_ _ M _ _ _");
//!
//! // +10 per letter in the right place, -2 per miss.
//! assert_eq!(score_guess("LEMARI", "LEXARJ"), 36);
//! ```

// Core domain types
pub mod core;

// SQLite persistence
pub mod storage;

// Interactive game loop
pub mod session;

// Terminal output formatting
pub mod output;
