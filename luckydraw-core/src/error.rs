use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LuckyDrawError>;

#[derive(Error, Debug)]
pub enum LuckyDrawError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl LuckyDrawError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for LuckyDrawError {
    fn from(err: dialoguer::Error) -> Self {
        LuckyDrawError::Dialog(err.to_string())
    }
}
