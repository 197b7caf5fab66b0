use crate::{Result, SpinError};
use luckydraw_core::types::{fits_amount_scale, AMOUNT_SCALE};
use luckydraw_core::GameConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const WIN_MESSAGE: &str = "Congratulations! You won!";
pub const LOSE_MESSAGE: &str = "Sorry, try again!";

pub use luckydraw_core::config::PAYOUT_MULTIPLIER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRequest {
    pub chosen_number: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub bet_amount: Decimal,
}

impl SpinRequest {
    pub fn new(chosen_number: i64, bet_amount: Decimal) -> Self {
        Self {
            chosen_number,
            bet_amount,
        }
    }

    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        if !config.is_valid_number(self.chosen_number) {
            return Err(SpinError::validation(format!(
                "chosen_number must be between 1 and {}",
                config.max_number
            )));
        }

        if self.bet_amount <= Decimal::ZERO {
            return Err(SpinError::validation("bet_amount must be greater than 0"));
        }

        if !fits_amount_scale(self.bet_amount) {
            return Err(SpinError::validation(format!(
                "bet_amount cannot have more than {} decimal places",
                AMOUNT_SCALE
            )));
        }

        if self.bet_amount > config.max_bet {
            return Err(SpinError::validation(format!(
                "bet_amount cannot exceed {}",
                config.max_bet
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub winning_number: i64,
    pub is_winner: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub bet_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
    pub message: String,
}

impl SpinResult {
    /// Compares the guess with the winning number. Pure; touches no ledger.
    pub fn evaluate(chosen_number: i64, winning_number: i64, bet_amount: Decimal) -> Self {
        let is_winner = chosen_number == winning_number;
        let final_amount = if is_winner {
            bet_amount * PAYOUT_MULTIPLIER
        } else {
            Decimal::ZERO
        };

        Self {
            winning_number,
            is_winner,
            bet_amount,
            final_amount,
            message: if is_winner { WIN_MESSAGE } else { LOSE_MESSAGE }.to_string(),
        }
    }
}
