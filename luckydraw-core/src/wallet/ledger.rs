use crate::error::{LuckyDrawError, Result};
use crate::storage::{LedgerStore, Storage};
use crate::types::{EntryStatus, LedgerEntry};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Append-only wallet ledger. The balance is always derived from the
/// approved entries, never stored.
#[derive(Clone)]
pub struct Ledger {
    storage: Arc<Storage>,
}

impl Ledger {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn get_balance(&self) -> Result<Decimal> {
        let conn = self.storage.get_connection().await;
        let balance = LedgerStore::new(&conn).approved_balance()?;

        tracing::debug!("Wallet balance: {}", balance);
        Ok(balance)
    }

    /// Appends an entry. Amounts are stored at two decimal places, so any
    /// further fractional digits are rounded away; callers that accept
    /// user input check `fits_amount_scale` first.
    pub async fn append_entry(&self, amount: Decimal, status: EntryStatus) -> Result<LedgerEntry> {
        let conn = self.storage.get_connection().await;
        let entry = LedgerStore::new(&conn).append(amount, status)?;

        tracing::info!(
            "Appended ledger entry {}: {} ({})",
            entry.id,
            entry.amount,
            entry.status
        );
        Ok(entry)
    }

    pub async fn entries(&self) -> Result<Vec<LedgerEntry>> {
        let conn = self.storage.get_connection().await;
        LedgerStore::new(&conn).list_entries()
    }

    /// Runs `f` with exclusive access to the ledger inside one transaction.
    /// Nothing `f` wrote is kept unless it returns `Ok`.
    pub async fn atomically<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&LedgerStore<'_>) -> std::result::Result<T, E>,
        E: From<LuckyDrawError>,
    {
        self.storage
            .with_transaction(|tx| f(&LedgerStore::new(tx)))
            .await
    }
}
