//! Masked word rendering
//!
//! The display reveals the letters at two fixed positions and hides every
//! other letter behind a placeholder.

/// 0-indexed positions revealed in the masked display.
///
/// Fixed regardless of word length or content; words too short to reach a
/// position simply reveal fewer letters.
pub const REVEAL_POSITIONS: [usize; 2] = [2, 6];

/// Placeholder shown for a hidden letter.
const PLACEHOLDER: char = '_';

/// Render the masked display for a word.
///
/// The word is uppercased first. One slot per letter, slots separated by
/// single spaces with no trailing space; an empty word yields an empty
/// display.
///
/// # Examples
/// ```
/// use asah_otak::core::mask_word;
///
/// assert_eq!(mask_word("lemari"), "_ _ M _ _ _");
/// assert_eq!(mask_word(""), "");
/// ```
#[must_use]
pub fn mask_word(word: &str) -> String {
    let slots: Vec<String> = word
        .to_uppercase()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if REVEAL_POSITIONS.contains(&i) {
                ch.to_string()
            } else {
                PLACEHOLDER.to_string()
            }
        })
        .collect();

    slots.join(" ")
}
