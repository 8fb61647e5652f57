use std::collections::{BTreeMap, HashSet};

use meridian_common::coin::{Coin, Coins};
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::balance::Balance;
use crate::errors::GenesisError;

/// The bank fragment of a genesis document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenesisState {
    /// Account balances to seed the ledger with.
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl GenesisState {
    pub fn new(balances: Vec<Balance>) -> Self {
        Self { balances }
    }

    /// Validates every balance record and rejects duplicate accounts.
    ///
    /// Any failure is fatal to genesis construction: every node must
    /// agree on accepting or rejecting the document as a whole, so
    /// partial acceptance is never an option.
    pub fn validate(&self) -> Result<(), GenesisError> {
        let mut seen = HashSet::with_capacity(self.balances.len());

        for balance in &self.balances {
            balance.validate()?;

            if !seen.insert(balance.address.as_str()) {
                tracing::error!("❌ Duplicate genesis account: {}", balance.address);
                return Err(GenesisError::DuplicateAddress(balance.address.clone()));
            }
        }

        Ok(())
    }

    /// Returns the state with its balances in canonical order.
    pub fn sanitize(mut self) -> Self {
        self.balances = sanitize_genesis_balances(self.balances);
        self
    }

    /// Sum of all balances, merged into one canonical coin set.
    ///
    /// Lets the genesis loader cross-check a declared total supply
    /// against what the balance records actually add up to.
    pub fn total_supply(&self) -> Coins {
        let mut totals: BTreeMap<String, BigInt> = BTreeMap::new();

        for balance in &self.balances {
            for coin in balance.coins.iter() {
                let entry = totals.entry(coin.denom.clone()).or_insert_with(BigInt::zero);
                *entry += &coin.amount;
            }
        }

        // BTreeMap iterates ascending by denom, which is exactly the
        // canonical coin-set order.
        totals
            .into_iter()
            .map(|(denom, amount)| Coin { denom, amount })
            .collect::<Vec<_>>()
            .into()
    }
}

/// Puts genesis balances into canonical ascending order by raw address
/// bytes.
///
/// Ordering by the decoded bytes, not the printable string, is what keeps
/// every node's initial state byte-identical: the human-readable encoding
/// does not sort the same way as the underlying account bytes.
///
/// Consumes the input and returns a freshly ordered vector; the elements
/// themselves are moved, never re-encoded. Each address is decoded exactly
/// once, so a bootstrap-sized list costs n decodes plus an O(n log n)
/// byte-wise sort. The sort is stable: records for the same account keep
/// their relative input order.
///
/// # Panics
///
/// Panics if a record's address does not decode. Callers must have
/// validated every record first; an invalid address this late is a defect
/// in the import pipeline, not an input error.
pub fn sanitize_genesis_balances(balances: Vec<Balance>) -> Vec<Balance> {
    let count = balances.len();

    let mut keyed: Vec<_> = balances
        .into_iter()
        .map(|balance| {
            let raw = balance
                .get_address()
                .expect("unvalidated balance reached genesis sanitization");
            (raw, balance)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    tracing::debug!("Sanitized {} genesis balances", count);

    keyed.into_iter().map(|(_, balance)| balance).collect()
}
