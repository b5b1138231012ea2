//! Database schema and connection management

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Connection to the draft ledger.
pub struct DraftLedger {
    pub(crate) conn: Connection,
}

impl DraftLedger {
    /// Open (or create) the ledger at `path` and ensure tables exist.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Opening draft ledger at {}", path.display());
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory ledger, used by tests.
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut ledger = Self { conn };
        ledger.initialize_schema()?;
        Ok(ledger)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // name_key is the lower-cased, trimmed name; players are matched on it
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                name_key TEXT NOT NULL UNIQUE,
                position TEXT NOT NULL,
                team TEXT NOT NULL,
                rank INTEGER NOT NULL,
                tier INTEGER NOT NULL,
                position_rank INTEGER,
                auction_value REAL NOT NULL,
                espn_id INTEGER,
                projected_points REAL NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS roster (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL UNIQUE,
                purchase_price REAL NOT NULL,
                roster_slot TEXT,
                drafted_at INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS targets (
                player_id INTEGER PRIMARY KEY,
                priority INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_position_rank
             ON players(position, rank)",
            [],
        )?;

        Ok(())
    }
}
