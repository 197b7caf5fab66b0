use crate::error::{LuckyDrawError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fractional digits kept for every persisted amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Largest absolute amount a single ledger entry may carry (99,999,999.99).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, AMOUNT_SCALE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Pending,
    Approved,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = LuckyDrawError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(EntryStatus::Pending),
            "approved" => Ok(EntryStatus::Approved),
            other => Err(LuckyDrawError::internal(format!(
                "Unknown entry status: {}",
                other
            ))),
        }
    }
}

/// One immutable record in the wallet ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal, // +ve for credits, -ve for debits
    pub status: EntryStatus,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(amount: Decimal, status: EntryStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == EntryStatus::Approved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub winning_number: i64,
}

/// True when `amount` has no more fractional digits than the ledger stores.
pub fn fits_amount_scale(amount: Decimal) -> bool {
    amount.round_dp(AMOUNT_SCALE) == amount
}

/// Converts an amount to the integer minor units stored in SQLite.
/// Amounts with more than two fractional digits are rounded half-even.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    let rounded = amount.round_dp(AMOUNT_SCALE);
    if rounded.abs() > MAX_AMOUNT {
        return Err(LuckyDrawError::AmountOutOfRange(amount));
    }

    rounded
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|units| units.to_i64())
        .ok_or(LuckyDrawError::AmountOutOfRange(amount))
}

pub fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, AMOUNT_SCALE)
}
