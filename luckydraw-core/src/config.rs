use crate::error::{LuckyDrawError, Result};
use crate::types::{AMOUNT_SCALE, MAX_AMOUNT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_NUMBER: i64 = 12;

/// A winning spin pays back twice the stake.
pub const PAYOUT_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Largest stake whose payout still fits in one ledger entry (49,999,999.99).
pub const DEFAULT_MAX_BET: Decimal = Decimal::from_parts(705_032_703, 1, 0, false, AMOUNT_SCALE);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Numbers on the board run from 1 to `max_number`.
    pub max_number: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_bet: Decimal,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
            max_bet: DEFAULT_MAX_BET,
        }
    }
}

impl GameConfig {
    pub fn new(max_number: i64) -> Self {
        Self {
            max_number,
            ..Self::default()
        }
    }

    pub fn is_valid_number(&self, number: i64) -> bool {
        (1..=self.max_number).contains(&number)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_number < 1 {
            return Err(LuckyDrawError::config("Max number must be at least 1"));
        }

        if self.max_bet <= Decimal::ZERO {
            return Err(LuckyDrawError::config("Max bet must be greater than 0"));
        }

        // the payout of an accepted bet must be storable
        let max_payout = self.max_bet.checked_mul(PAYOUT_MULTIPLIER);
        if max_payout.map_or(true, |payout| payout > MAX_AMOUNT) {
            return Err(LuckyDrawError::config(format!(
                "Max bet cannot exceed {}",
                DEFAULT_MAX_BET
            )));
        }

        Ok(())
    }
}
