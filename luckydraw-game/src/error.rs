use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpinError>;

#[derive(Error, Debug)]
pub enum SpinError {
    #[error("Lucky draw core error: {0}")]
    Core(#[from] luckydraw_core::LuckyDrawError),

    #[error("Invalid spin request: {0}")]
    Validation(String),

    #[error("Insufficient wallet balance")]
    InsufficientFunds { need: Decimal, available: Decimal },

    #[error("No winning number has been set. Please contact administrator.")]
    MissingWinningNumber,

    #[error("Invalid winning number in database. Please contact administrator.")]
    InvalidWinningNumber { value: i64, max: i64 },
}

impl SpinError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Administrator-side misconfiguration the player cannot fix.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SpinError::MissingWinningNumber | SpinError::InvalidWinningNumber { .. }
        )
    }
}
