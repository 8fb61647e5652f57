pub mod errors;
pub mod types;
pub mod validation;

pub use types::{Coin, Coins};
