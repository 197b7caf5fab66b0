//! Lucky Draw settlement
//!
//! A player picks a number on the board and stakes part of their wallet.
//! The pick is compared against the administrator-set winning number; a hit
//! pays twice the stake, and the stake itself is always debited.

pub mod error;
pub mod settlement;
pub mod spin;

pub use error::{Result, SpinError};
pub use settlement::DrawSettlement;
pub use spin::{SpinRequest, SpinResult, LOSE_MESSAGE, WIN_MESSAGE};

use luckydraw_core::{GameConfig, Ledger, Storage, StoredDrawConfig};
use std::sync::Arc;

/// Settlement wired to the ledger and draw config of one database.
pub fn settlement_for(storage: Arc<Storage>, game_config: GameConfig) -> Result<DrawSettlement> {
    DrawSettlement::new(
        Ledger::new(storage.clone()),
        Arc::new(StoredDrawConfig::new(storage)),
        game_config,
    )
}
