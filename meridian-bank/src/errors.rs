use meridian_common::address::errors::AddressError;
use meridian_common::coin::errors::CoinError;
use thiserror::Error;

/// Why a single balance record was rejected.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// The record's address is empty or not a valid account address.
    #[error("Invalid address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },

    /// The record's coin set violates a coin invariant.
    #[error("Invalid coins for {address}: {source}")]
    InvalidCoins {
        address: String,
        #[source]
        source: CoinError,
    },
}

/// Why a whole genesis balance set was rejected.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// Two records claim the same account.
    #[error("Duplicate genesis account: {0}")]
    DuplicateAddress(String),
}
