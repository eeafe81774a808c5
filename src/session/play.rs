//! Line-oriented play loop
//!
//! One round per iteration: fetch a word, show the clue and masked display,
//! score the guess, offer to save, offer to replay. Anything other than the
//! affirmative token at a Y/N prompt takes the "no" branch.

use crate::core::{mask_word, score_guess};
use crate::output::{print_round, print_saved, print_score};
use crate::storage::GameStore;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// The single letter that selects the "yes" branch of a Y/N prompt.
const AFFIRMATIVE: &str = "Y";

/// Run rounds until the player declines to continue.
///
/// # Errors
///
/// Returns an error if reading input fails or a storage operation
/// (random fetch, score insert) fails. The storage handle and stdin are
/// released by scope exit on every path.
pub fn run_session(store: &GameStore) -> Result<()> {
    loop {
        let entry = store.random_entry().context("failed to fetch a word")?;
        let word = entry.word.to_uppercase();

        print_round(&entry.clue, &mask_word(&word));

        let guess = prompt("Enter your guess")?.to_uppercase();
        let points = score_guess(&word, &guess);
        print_score(points);

        if is_affirmative(&prompt("Do you want to save your score? (Y/N)")?) {
            let name = prompt("Enter your name")?;
            store
                .save_score(&name, points)
                .context("failed to save score")?;
            print_saved(&name);
        }

        if !is_affirmative(&prompt("Do you want to play again? (Y/N)")?) {
            break;
        }
    }

    Ok(())
}

/// Case-insensitive exact match against the affirmative token.
///
/// `"Y"` and `"y"` are yes; anything else, `"yes"` and the empty line
/// included, is no.
fn is_affirmative(input: &str) -> bool {
    input.eq_ignore_ascii_case(AFFIRMATIVE)
}

/// Print a prompt and read one trimmed line from stdin.
fn prompt(text: &str) -> Result<String> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_accepts_both_cases_of_the_token() {
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("y"));
    }

    #[test]
    fn affirmative_rejects_everything_else() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("YES"));
        assert!(!is_affirmative("Y "));
        assert!(!is_affirmative("ya"));
    }
}
