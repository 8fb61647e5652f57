use thiserror::Error;

use crate::address::errors::AddressError;
use crate::coin::errors::CoinError;

pub type Result<T> = std::result::Result<T, MeridianError>;

#[derive(Debug, Error)]
pub enum MeridianError {
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Coin error: {0}")]
    Coin(#[from] CoinError),

    #[error("General error: {0}")]
    General(String),
}

impl From<String> for MeridianError {
    fn from(message: String) -> Self {
        MeridianError::General(message)
    }
}

impl From<&str> for MeridianError {
    fn from(message: &str) -> Self {
        MeridianError::General(message.to_string())
    }
}
