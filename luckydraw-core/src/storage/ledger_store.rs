use crate::error::{LuckyDrawError, Result};
use crate::types::{from_minor_units, to_minor_units, EntryStatus, LedgerEntry};
use chrono::DateTime;
use rust_decimal::Decimal;
use rusqlite::{params, Connection};
use uuid::Uuid;

/// Ledger queries over a borrowed connection, so the same calls work on a
/// plain connection and inside a transaction.
pub struct LedgerStore<'a> {
    conn: &'a Connection,
}

impl<'a> LedgerStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Sum of all approved entries, zero for an empty ledger.
    pub fn approved_balance(&self) -> Result<Decimal> {
        let units: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount_minor), 0) FROM ledger_entries WHERE status = ?1",
            params![EntryStatus::Approved.as_str()],
            |row| row.get(0),
        )?;

        Ok(from_minor_units(units))
    }

    pub fn insert_entry(&self, entry: &LedgerEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO ledger_entries (id, amount_minor, status, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.id.to_string(),
                to_minor_units(entry.amount)?,
                entry.status.as_str(),
                entry.created_at.timestamp_millis(),
            ],
        )?;

        Ok(())
    }

    /// Creates and stores a new entry. No business validation happens here;
    /// the amount is stored rounded to two decimal places.
    pub fn append(&self, amount: Decimal, status: EntryStatus) -> Result<LedgerEntry> {
        let mut entry = LedgerEntry::new(amount, status);
        self.insert_entry(&entry)?;

        // reflect what was persisted
        entry.amount = from_minor_units(to_minor_units(amount)?);
        Ok(entry)
    }

    /// All entries in insertion order.
    pub fn list_entries(&self) -> Result<Vec<LedgerEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, amount_minor, status, created_at
             FROM ledger_entries ORDER BY rowid ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let amount_minor: i64 = row.get(1)?;
            let status: String = row.get(2)?;
            let created_at: i64 = row.get(3)?;
            Ok((id, amount_minor, status, created_at))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, amount_minor, status, created_at) = row?;
            entries.push(LedgerEntry {
                id: Uuid::parse_str(&id)
                    .map_err(|e| LuckyDrawError::internal(format!("Invalid entry id: {}", e)))?,
                amount: from_minor_units(amount_minor),
                status: status.parse()?,
                created_at: DateTime::from_timestamp_millis(created_at).ok_or_else(|| {
                    LuckyDrawError::internal(format!("Invalid entry timestamp: {}", created_at))
                })?,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    #[tokio::test]
    async fn test_corrupt_timestamp_is_an_error() {
        let storage = Storage::in_memory().await.unwrap();
        let conn = storage.get_connection().await;
        conn.execute(
            "INSERT INTO ledger_entries (id, amount_minor, status, created_at)
             VALUES (?1, 100, 'approved', ?2)",
            params![Uuid::new_v4().to_string(), i64::MAX],
        )
        .unwrap();

        let err = LedgerStore::new(&conn).list_entries().unwrap_err();
        assert!(matches!(err, LuckyDrawError::Internal(msg) if msg.contains("timestamp")));
    }

    #[tokio::test]
    async fn test_sub_cent_amounts_are_rounded() {
        let storage = Storage::in_memory().await.unwrap();
        let conn = storage.get_connection().await;
        let store = LedgerStore::new(&conn);

        let entry = store
            .append(Decimal::new(4, 3), EntryStatus::Approved)
            .unwrap();
        assert_eq!(entry.amount, Decimal::ZERO);
        assert_eq!(store.approved_balance().unwrap(), Decimal::ZERO);
    }
}
