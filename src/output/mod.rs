//! Terminal output formatting
//!
//! Display utilities for the interactive game loop.

pub mod display;

pub use display::{print_banner, print_goodbye, print_round, print_saved, print_score};
