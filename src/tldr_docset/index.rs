use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Filename of the search index inside Contents/Resources/
pub const INDEX_FILENAME: &str = "docSet.dsidx";

/// Every record in the index is a command; docset viewers use this label
/// to pick the category icon.
const COMMAND_TYPE: &str = "Command";

/// The docset search index: a single SQLite table mapping a display name
/// to the page that documents it.
pub struct SearchIndex {
    conn: Connection,
}

impl SearchIndex {
    /// Open the index file and reset the table, so the index reflects
    /// exactly one run of the generator.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "DROP TABLE IF EXISTS searchIndex;
             CREATE TABLE searchIndex(id INTEGER PRIMARY KEY, name TEXT, type TEXT, path TEXT);
             CREATE UNIQUE INDEX anchor ON searchIndex (name, type, path);",
        )?;
        Ok(Self { conn })
    }

    /// Idempotent insert: a (name, path) pair already present is left
    /// alone. Returns whether a new record was added.
    pub fn insert(&self, name: &str, path: &str) -> Result<bool> {
        let added = self.conn.execute(
            "INSERT OR IGNORE INTO searchIndex(name, type, path) VALUES (?1, ?2, ?3)",
            (name, COMMAND_TYPE, path),
        )?;
        Ok(added > 0)
    }

    pub fn record_count(&self) -> Result<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM searchIndex", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Finalize the index file at the end of a run.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
