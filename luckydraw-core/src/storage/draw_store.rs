use crate::error::Result;
use crate::storage::Storage;
use crate::types::DrawConfig;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

pub struct DrawStore<'a> {
    storage: &'a Storage,
}

impl<'a> DrawStore<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub async fn load(&self) -> Result<Option<DrawConfig>> {
        let conn = self.storage.get_connection().await;

        let winning_number: Option<i64> = conn
            .query_row(
                "SELECT winning_number FROM draw_config WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        Ok(winning_number.map(|winning_number| DrawConfig { winning_number }))
    }

    /// Stores the value as given; range checks are up to the caller.
    pub async fn set_winning_number(&self, winning_number: i64) -> Result<()> {
        let conn = self.storage.get_connection().await;

        conn.execute(
            "INSERT OR REPLACE INTO draw_config (id, winning_number, updated_at)
             VALUES (1, ?1, ?2)",
            params![winning_number, Utc::now().timestamp_millis()],
        )?;

        tracing::info!("Winning number set to {}", winning_number);
        Ok(())
    }

    /// Returns whether a value was removed.
    pub async fn clear(&self) -> Result<bool> {
        let conn = self.storage.get_connection().await;
        let removed = conn.execute("DELETE FROM draw_config WHERE id = 1", [])?;

        if removed > 0 {
            tracing::info!("Winning number cleared");
        }
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_single_row_config() {
        let storage = Storage::in_memory().await.unwrap();
        let store = DrawStore::new(&storage);

        assert_eq!(store.load().await.unwrap(), None);

        store.set_winning_number(7).await.unwrap();
        store.set_winning_number(15).await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some(DrawConfig { winning_number: 15 })
        );

        assert!(store.clear().await.unwrap());
        assert!(!store.clear().await.unwrap());
        assert_eq!(store.load().await.unwrap(), None);
    }
}
