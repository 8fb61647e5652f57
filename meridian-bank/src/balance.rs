use meridian_common::address::address::{Address, ADDRESS_LEN};
use meridian_common::coin::Coins;
use serde::{Deserialize, Serialize};

use crate::errors::BalanceError;

/// One account's holdings in the genesis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Bech32m-encoded account address.
    pub address: String,
    /// Holdings, ascending by denomination. An empty set is a legal
    /// zero-balance account entry and is omitted on the wire.
    #[serde(default, skip_serializing_if = "Coins::is_empty")]
    pub coins: Coins,
}

impl Balance {
    pub fn new(address: impl Into<String>, coins: Coins) -> Self {
        Self {
            address: address.into(),
            coins,
        }
    }

    /// Checks every invariant a genesis balance record must satisfy: the
    /// address decodes under the account codec, and the coin set (if any)
    /// carries well-formed denominations, strictly positive amounts, no
    /// duplicates, in ascending denomination order.
    ///
    /// Pure; touches no state.
    pub fn validate(&self) -> Result<(), BalanceError> {
        self.get_address()?;

        self.coins.validate().map_err(|source| BalanceError::InvalidCoins {
            address: self.address.clone(),
            source,
        })
    }

    /// Decodes the record's address into its raw account bytes.
    ///
    /// Standalone address resolution: it does not look at the coins, so
    /// the genesis sanitizer (and anyone else who only needs the decoded
    /// form) can call it without re-running full validation.
    pub fn get_address(&self) -> Result<[u8; ADDRESS_LEN], BalanceError> {
        Address::raw_bytes(&self.address).map_err(|source| BalanceError::InvalidAddress {
            address: self.address.clone(),
            source,
        })
    }
}
