//! Interactive game session
//!
//! The line-oriented play loop and its Y/N prompt handling.

pub mod play;

pub use play::run_session;
