//! Lucky Draw core - wallet ledger and draw configuration
//!
//! This library holds the append-only wallet ledger, its SQLite storage and
//! the lookup of the administrator-set winning number used by settlement.

pub mod config;
pub mod draw;
pub mod error;
pub mod storage;
pub mod types;
pub mod wallet;

pub use config::GameConfig;
pub use draw::{DrawConfigSource, StaticDrawConfig, StoredDrawConfig};
pub use error::{LuckyDrawError, Result};
pub use storage::{DrawStore, LedgerStore, Storage};
pub use types::{DrawConfig, EntryStatus, LedgerEntry, MAX_AMOUNT};
pub use wallet::Ledger;

pub use rust_decimal::Decimal;

use std::path::Path;
use std::sync::Arc;

/// Opens (or creates) the database inside `data_dir`.
pub async fn open_storage(data_dir: &Path) -> Result<Arc<Storage>> {
    let db_path = data_dir.join("luckydraw.db");
    let storage = Storage::new(&db_path).await?;

    tracing::info!("Opened database at {}", db_path.display());
    Ok(Arc::new(storage))
}
