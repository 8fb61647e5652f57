use thiserror::Error;

/// Invariant violations for coins and coin sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinError {
    /// The denomination does not match the denom grammar.
    #[error("Invalid denomination: {0:?}")]
    InvalidDenom(String),

    /// The amount is negative. Constructors never produce one, but raw
    /// wire input can carry one.
    #[error("Negative amount for denomination {denom}: {amount}")]
    NegativeAmount { denom: String, amount: String },

    /// A balance entry must reflect an actual holding.
    #[error("Zero amount for denomination {0}")]
    ZeroAmount(String),

    /// Two entries share a denomination.
    #[error("Duplicate denomination: {0}")]
    DuplicateDenom(String),

    /// Entries must be in ascending denomination order.
    #[error("Unsorted coins: {prev} appears before {next}")]
    UnsortedCoins { prev: String, next: String },
}
