//! Shared types for the Meridian ledger stack.
//!
//! Home of the account address codec, the coin primitive and the
//! crate-wide error type the other Meridian crates build on.

pub mod address;
pub mod coin;
pub mod error;
