//! Lookup of the administrator-set winning number.

use crate::error::Result;
use crate::storage::{DrawStore, Storage};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Where settlement reads the winning number from.
///
/// The raw stored value is returned unchecked so that the caller can tell a
/// missing value apart from an out-of-range one.
#[async_trait]
pub trait DrawConfigSource: Send + Sync {
    async fn winning_number(&self) -> Result<Option<i64>>;
}

/// Winning number persisted in the `draw_config` table.
pub struct StoredDrawConfig {
    storage: Arc<Storage>,
}

impl StoredDrawConfig {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl DrawConfigSource for StoredDrawConfig {
    async fn winning_number(&self) -> Result<Option<i64>> {
        let config = DrawStore::new(&self.storage).load().await?;
        Ok(config.map(|config| config.winning_number))
    }
}

/// In-process winning number.
#[derive(Debug, Default)]
pub struct StaticDrawConfig {
    winning_number: RwLock<Option<i64>>,
}

impl StaticDrawConfig {
    pub fn new(winning_number: Option<i64>) -> Self {
        Self {
            winning_number: RwLock::new(winning_number),
        }
    }

    pub fn set(&self, winning_number: Option<i64>) {
        *self.winning_number.write() = winning_number;
    }
}

#[async_trait]
impl DrawConfigSource for StaticDrawConfig {
    async fn winning_number(&self) -> Result<Option<i64>> {
        Ok(*self.winning_number.read())
    }
}
