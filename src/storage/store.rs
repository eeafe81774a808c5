//! SQLite-backed game store
//!
//! Owns the connection for the program's lifetime. Schema bootstrap, sample
//! seeding, random word fetches and score inserts all go through here; each
//! statement is its own implicit unit of work.

use crate::core::WordEntry;
use crate::storage::samples::SAMPLE_WORDS;
use rand::Rng;
use rusqlite::{Connection, params};
use std::path::Path;

/// Long-lived handle to the SQLite store.
///
/// Access is strictly sequential; the connection is owned by the program's
/// single thread and released on drop.
pub struct GameStore {
    conn: Connection,
}

impl GameStore {
    /// Open (or create) the store at `path` and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the tables cannot
    /// be created.
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a store backed by an in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be created.
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Create the word and score tables when absent. Re-runnable.
    fn ensure_schema(&self) -> rusqlite::Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS master_kata \
             (id INTEGER PRIMARY KEY AUTOINCREMENT, kata TEXT, clue TEXT)",
            [],
        )?;
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS point_game \
             (id_point INTEGER PRIMARY KEY AUTOINCREMENT, nama_user TEXT, total_point INTEGER)",
            [],
        )?;
        Ok(())
    }

    /// Insert the embedded sample words and return how many were inserted.
    ///
    /// Runs unconditionally, so repeated runs duplicate rows; the first
    /// failed insert aborts the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn seed_samples(&self) -> rusqlite::Result<usize> {
        let mut stmt = self
            .conn
            .prepare("INSERT INTO master_kata (kata, clue) VALUES (?1, ?2)")?;

        for (word, clue) in SAMPLE_WORDS {
            stmt.execute(params![word, clue])?;
        }

        Ok(SAMPLE_WORDS.len())
    }

    /// Number of word rows currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    pub fn word_count(&self) -> rusqlite::Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM master_kata", [], |row| row.get(0))
    }

    /// Fetch one word/clue pair uniformly at random.
    ///
    /// An empty word table yields the sentinel entry rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn random_entry(&self) -> rusqlite::Result<WordEntry> {
        let count = self.word_count()?;
        if count == 0 {
            return Ok(WordEntry::empty());
        }

        let offset = rand::rng().random_range(0..count);
        self.conn.query_row(
            "SELECT kata, clue FROM master_kata LIMIT 1 OFFSET ?1",
            [offset],
            |row| {
                Ok(WordEntry {
                    word: row.get(0)?,
                    clue: row.get(1)?,
                })
            },
        )
    }

    /// Record a round's points under a player name.
    ///
    /// Always an insert; the name is stored as given, empty included, and
    /// the points may be negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save_score(&self, name: &str, points: i32) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO point_game (nama_user, total_point) VALUES (?1, ?2)",
            params![name, points],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::samples::SAMPLE_COUNT;

    fn saved_scores(store: &GameStore) -> Vec<(String, i32)> {
        let mut stmt = store
            .conn
            .prepare("SELECT nama_user, total_point FROM point_game ORDER BY id_point")
            .unwrap();
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap();
        rows.collect::<rusqlite::Result<_>>().unwrap()
    }

    #[test]
    fn schema_bootstrap_is_rerunnable() {
        let store = GameStore::open_in_memory().unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.word_count().unwrap(), 0);
    }

    #[test]
    fn seeding_inserts_every_sample() {
        let store = GameStore::open_in_memory().unwrap();
        let inserted = store.seed_samples().unwrap();
        assert_eq!(inserted, SAMPLE_COUNT);
        assert_eq!(store.word_count().unwrap(), SAMPLE_COUNT as i64);
    }

    #[test]
    fn reseeding_duplicates_rows() {
        let store = GameStore::open_in_memory().unwrap();
        store.seed_samples().unwrap();
        store.seed_samples().unwrap();
        assert_eq!(store.word_count().unwrap(), 2 * SAMPLE_COUNT as i64);
    }

    #[test]
    fn random_entry_on_empty_table_is_the_sentinel() {
        let store = GameStore::open_in_memory().unwrap();
        let entry = store.random_entry().unwrap();
        assert!(entry.is_empty());
        assert_eq!(entry, WordEntry::empty());
    }

    #[test]
    fn random_entry_comes_from_seeded_words() {
        let store = GameStore::open_in_memory().unwrap();
        store.seed_samples().unwrap();

        for _ in 0..20 {
            let entry = store.random_entry().unwrap();
            assert!(
                SAMPLE_WORDS
                    .iter()
                    .any(|&(word, clue)| word == entry.word && clue == entry.clue),
                "fetched entry '{}' is not a seeded word",
                entry.word
            );
        }
    }

    #[test]
    fn save_score_keeps_name_and_points_as_given() {
        let store = GameStore::open_in_memory().unwrap();
        store.save_score("BUDI", 36).unwrap();
        store.save_score("", -8).unwrap();

        assert_eq!(
            saved_scores(&store),
            vec![("BUDI".to_string(), 36), (String::new(), -8)]
        );
    }

    #[test]
    fn save_score_never_deduplicates() {
        let store = GameStore::open_in_memory().unwrap();
        store.save_score("SARI", 20).unwrap();
        store.save_score("SARI", 20).unwrap();
        assert_eq!(saved_scores(&store).len(), 2);
    }
}
