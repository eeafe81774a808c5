//! Database location resolution
//!
//! The store lives next to the executable so repeated runs reuse the same
//! file. When the executable path cannot be resolved, the store falls back
//! to the current working directory instead of aborting.

use std::env;
use std::path::PathBuf;

/// File name of the on-disk store.
pub const DB_FILE_NAME: &str = "asah_otak.db";

/// Resolve the database path once at startup.
///
/// Prefers `<exe-dir>/asah_otak.db`; on failure warns on stderr and returns
/// a path relative to the current working directory.
#[must_use]
pub fn resolve_db_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(DB_FILE_NAME),
            None => fallback_path("executable has no parent directory"),
        },
        Err(err) => fallback_path(&err.to_string()),
    }
}

fn fallback_path(reason: &str) -> PathBuf {
    eprintln!("warning: could not resolve the executable directory ({reason}); using the current directory");
    PathBuf::from(DB_FILE_NAME)
}
