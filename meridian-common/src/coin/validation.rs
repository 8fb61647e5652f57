use num_bigint::Sign;
use num_traits::Zero;

use super::{errors::CoinError, types::Coin};

/// Denomination grammar bounds: a leading ASCII letter followed by
/// letters, digits or `/ : . _ -`, 3 to 128 chars total.
pub const MIN_DENOM_LEN: usize = 3;
pub const MAX_DENOM_LEN: usize = 128;

/// Checks a denomination against the grammar.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(CoinError::InvalidDenom(denom.to_string()));
    }

    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return Err(CoinError::InvalidDenom(denom.to_string())),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        return Err(CoinError::InvalidDenom(denom.to_string()));
    }

    Ok(())
}

/// Checks a single coin: denom grammar plus the amount sign.
pub fn validate_coin(coin: &Coin) -> Result<(), CoinError> {
    validate_denom(&coin.denom)?;

    if coin.amount.sign() == Sign::Minus {
        return Err(CoinError::NegativeAmount {
            denom: coin.denom.clone(),
            amount: coin.amount.to_string(),
        });
    }

    Ok(())
}

/// Checks a full coin set as it must appear inside a balance record:
/// every coin valid and strictly positive, denominations unique and in
/// ascending byte order.
pub fn validate_coins(coins: &[Coin]) -> Result<(), CoinError> {
    for coin in coins {
        validate_coin(coin)?;
        if coin.amount.is_zero() {
            return Err(CoinError::ZeroAmount(coin.denom.clone()));
        }
    }

    for pair in coins.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.denom == next.denom {
            return Err(CoinError::DuplicateDenom(next.denom.clone()));
        }
        if prev.denom.as_bytes() > next.denom.as_bytes() {
            return Err(CoinError::UnsortedCoins {
                prev: prev.denom.clone(),
                next: next.denom.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denom_grammar() {
        assert!(validate_denom("umer").is_ok());
        assert!(validate_denom("atom").is_ok());
        assert!(validate_denom("ibc/27394FB092D2EC").is_ok());
        assert!(validate_denom("gamm:pool.1_x-2").is_ok());

        // too short, too long, bad leading char, bad charset
        assert!(validate_denom("").is_err());
        assert!(validate_denom("ab").is_err());
        assert!(validate_denom(&"a".repeat(129)).is_err());
        assert!(validate_denom("1atom").is_err());
        assert!(validate_denom("/atom").is_err());
        assert!(validate_denom("at om").is_err());
    }

    #[test]
    fn test_zero_is_legal_standalone_but_not_in_a_set() {
        let zero = Coin::new("umer", 0);
        assert!(zero.validate().is_ok());
        assert_eq!(
            validate_coins(std::slice::from_ref(&zero)),
            Err(CoinError::ZeroAmount("umer".to_string()))
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let coin = Coin::new("umer", -1);
        assert_eq!(
            validate_coin(&coin),
            Err(CoinError::NegativeAmount {
                denom: "umer".to_string(),
                amount: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_set_ordering_and_uniqueness() {
        let sorted = [Coin::new("atom", 2), Coin::new("batom", 12), Coin::new("zatom", 2)];
        assert!(validate_coins(&sorted).is_ok());

        let unsorted = [Coin::new("atom", 2), Coin::new("zatom", 2), Coin::new("batom", 12)];
        assert_eq!(
            validate_coins(&unsorted),
            Err(CoinError::UnsortedCoins {
                prev: "zatom".to_string(),
                next: "batom".to_string(),
            })
        );

        let dup = [Coin::new("uatom", 1), Coin::new("uatom", 1)];
        assert_eq!(
            validate_coins(&dup),
            Err(CoinError::DuplicateDenom("uatom".to_string()))
        );
    }
}
