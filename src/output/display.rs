//! Display functions for the game loop

use colored::Colorize;

/// Print the welcome banner.
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Asah Otak - Word Guessing Game                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the word behind the clue. Letters in the right place earn");
    println!("points, everything else costs you a little.\n");
}

/// Print a round's clue and masked word.
pub fn print_round(clue: &str, masked: &str) {
    println!("{}", "─".repeat(60).cyan());
    println!("Clue: {clue}");
    println!("Word: {}", masked.bright_yellow().bold());
}

/// Print the score for a round, green when non-negative and red otherwise.
pub fn print_score(points: i32) {
    let rendered = if points >= 0 {
        points.to_string().green().bold()
    } else {
        points.to_string().red().bold()
    };
    println!("Your score: {rendered}");
}

/// Confirm that a score was persisted.
pub fn print_saved(name: &str) {
    if name.is_empty() {
        println!("{}", "Score saved.".green());
    } else {
        println!("{}", format!("Score saved for {name}.").green());
    }
}

/// Print the farewell message.
pub fn print_goodbye() {
    println!("\n👋 Thanks for playing!\n");
}
