pub mod draw_store;
pub mod ledger_store;

pub use draw_store::DrawStore;
pub use ledger_store::LedgerStore;

use crate::error::{LuckyDrawError, Result};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use tokio::sync::Mutex;

pub struct Storage {
    conn: Mutex<Connection>,
}

impl Storage {
    pub async fn new(db_path: &Path) -> Result<Self> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                LuckyDrawError::internal(format!("Failed to create directory: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)?;
        Self::with_connection(conn).await
    }

    /// Private database that lives as long as this value.
    pub async fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn).await
    }

    async fn with_connection(conn: Connection) -> Result<Self> {
        let storage = Self {
            conn: Mutex::new(conn),
        };

        storage.init_schema().await?;
        Ok(storage)
    }

    async fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().await;

        // Ledger table, append-only
        conn.execute(
            "CREATE TABLE IF NOT EXISTS ledger_entries (
                id TEXT PRIMARY KEY,
                amount_minor INTEGER NOT NULL,
                status TEXT NOT NULL CHECK (status IN ('pending', 'approved')),
                created_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_ledger_entries_status
             ON ledger_entries (status)",
            [],
        )?;

        // Draw config, at most one row
        conn.execute(
            "CREATE TABLE IF NOT EXISTS draw_config (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                winning_number INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    pub async fn get_connection(&self) -> tokio::sync::MutexGuard<'_, Connection> {
        self.conn.lock().await
    }

    /// Runs `f` inside an immediate transaction while holding the connection
    /// lock. Commits only when `f` returns `Ok`; any other exit rolls back.
    pub async fn with_transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> std::result::Result<T, E>,
        E: From<LuckyDrawError>,
    {
        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(LuckyDrawError::from)?;

        let value = f(&tx)?;

        tx.commit().map_err(LuckyDrawError::from)?;
        Ok(value)
    }
}
