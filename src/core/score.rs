//! Positional guess scoring
//!
//! A guess is compared to the target letter by letter; every position of the
//! target either matches and earns points or misses and loses them.

/// Points earned for a letter in the right position.
pub const MATCH_POINTS: i32 = 10;

/// Points lost for a mismatch or a missing position.
pub const MISS_PENALTY: i32 = 2;

/// Score a guess against the target word.
///
/// Both strings are uppercased, then each position of the *target* is
/// checked: a matching guess letter earns [`MATCH_POINTS`], anything else
/// (wrong letter, or a guess shorter than the position) loses
/// [`MISS_PENALTY`]. Guess letters past the target's length are ignored,
/// and the total may be negative.
///
/// # Examples
/// ```
/// use asah_otak::core::score_guess;
///
/// // L-E-.-A-R-. match: 4 * 10 - 2 * 2
/// assert_eq!(score_guess("LEMARI", "LEXARJ"), 36);
/// assert_eq!(score_guess("", "ANYTHING"), 0);
/// ```
#[must_use]
pub fn score_guess(target: &str, guess: &str) -> i32 {
    let guess: Vec<char> = guess.to_uppercase().chars().collect();

    target
        .to_uppercase()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if guess.get(i) == Some(&ch) {
                MATCH_POINTS
            } else {
                -MISS_PENALTY
            }
        })
        .sum()
}
