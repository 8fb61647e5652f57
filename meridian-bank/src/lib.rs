//! Genesis balance handling for the Meridian ledger.
//!
//! Validates the account balance records of a genesis document and puts
//! them into the canonical order every node must agree on before the
//! initial ledger state is materialized. Divergence in either step shows
//! up later as a state-root mismatch across nodes, so both are
//! all-or-nothing: either every record passes or the whole document is
//! rejected.

pub mod balance;
pub mod errors;
pub mod genesis;


pub use balance::Balance;
pub use genesis::{sanitize_genesis_balances, GenesisState};
