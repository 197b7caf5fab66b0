use crate::spin::{SpinRequest, SpinResult};
use crate::{Result, SpinError};
use luckydraw_core::{DrawConfigSource, EntryStatus, GameConfig, Ledger};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Settles spins against the wallet ledger.
///
/// Each spin runs its balance check and ledger writes inside a single
/// ledger transaction, so two concurrent spins cannot both spend the same
/// funds.
pub struct DrawSettlement {
    ledger: Ledger,
    draw_config: Arc<dyn DrawConfigSource>,
    game_config: GameConfig,
}

impl DrawSettlement {
    pub fn new(
        ledger: Ledger,
        draw_config: Arc<dyn DrawConfigSource>,
        game_config: GameConfig,
    ) -> Result<Self> {
        game_config.validate()?;

        Ok(Self {
            ledger,
            draw_config,
            game_config,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.game_config
    }

    pub async fn spin(&self, chosen_number: i64, bet_amount: Decimal) -> Result<SpinResult> {
        self.settle(SpinRequest::new(chosen_number, bet_amount))
            .await
    }

    /// Validate, check funds, resolve the winning number, then record the
    /// stake and any payout. Failures before the final step leave the
    /// ledger untouched.
    pub async fn settle(&self, request: SpinRequest) -> Result<SpinResult> {
        request.validate(&self.game_config)?;

        let spin_id = Uuid::new_v4();
        let configured = self.draw_config.winning_number().await?;
        let max_number = self.game_config.max_number;

        let result = self
            .ledger
            .atomically(|store| -> Result<SpinResult> {
                let available = store.approved_balance()?;
                if request.bet_amount > available {
                    return Err(SpinError::InsufficientFunds {
                        need: request.bet_amount,
                        available,
                    });
                }

                let winning_number = match configured {
                    None => return Err(SpinError::MissingWinningNumber),
                    Some(value) if !(1..=max_number).contains(&value) => {
                        return Err(SpinError::InvalidWinningNumber {
                            value,
                            max: max_number,
                        })
                    }
                    Some(value) => value,
                };

                let result = SpinResult::evaluate(
                    request.chosen_number,
                    winning_number,
                    request.bet_amount,
                );

                // payout and stake stay separate entries
                if result.is_winner {
                    store.append(result.final_amount, EntryStatus::Approved)?;
                }
                store.append(-result.bet_amount, EntryStatus::Approved)?;

                Ok(result)
            })
            .await;

        match &result {
            Ok(result) => tracing::info!(
                "Spin {} settled: chose {}, winning {}, bet {}, paid {}",
                spin_id,
                request.chosen_number,
                result.winning_number,
                result.bet_amount,
                result.final_amount
            ),
            Err(SpinError::InsufficientFunds { need, available }) => tracing::info!(
                "Spin {} rejected: bet {} exceeds balance {}",
                spin_id,
                need,
                available
            ),
            Err(e) if e.is_configuration() => {
                tracing::warn!("Spin {} failed on draw configuration: {:?}", spin_id, e)
            }
            Err(e) => tracing::error!("Spin {} failed: {}", spin_id, e),
        }

        result
    }
}
