use bech32::{convert_bits, decode, encode, u5, FromBase32, Variant};
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};

use super::errors::AddressError;

/// Human-readable prefix carried by every Meridian account address.
pub const ACCOUNT_HRP: &str = "mrdn";

/// Byte length of a decoded account address (a raw ed25519 public key).
pub const ADDRESS_LEN: usize = 32;

/// A bech32m-encoded account address, checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Address::raw_bytes(&s)?;
        Ok(Address(s))
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Address::raw_bytes(s)?;
        Ok(Address(s.to_string()))
    }
}

impl std::ops::Deref for Address {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Address {
    /// Returns whether the given address string is valid.
    pub fn is_valid(address: &str) -> bool {
        Self::raw_bytes(address).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes this address into its raw account bytes.
    pub fn to_raw_bytes(&self) -> Result<[u8; ADDRESS_LEN], AddressError> {
        Self::raw_bytes(&self.0)
    }

    /// Decodes the raw account bytes behind a bech32m address string.
    ///
    /// Checks the prefix, charset, checksum and payload length. The payload
    /// is treated as opaque account bytes; whether it is a usable public
    /// key is the concern of [`Address::public_key_from_str`].
    pub fn raw_bytes(address: &str) -> Result<[u8; ADDRESS_LEN], AddressError> {
        if address.is_empty() {
            return Err(AddressError::Empty);
        }

        let (hrp, data, variant) = decode(address)?;

        if hrp != ACCOUNT_HRP || variant != Variant::Bech32m {
            return Err(AddressError::WrongPrefix(address.to_string()));
        }

        let bytes = Vec::<u8>::from_base32(&data)?;

        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength(bytes.len()));
        }

        let mut raw = [0u8; ADDRESS_LEN];
        raw.copy_from_slice(&bytes);
        Ok(raw)
    }

    /// Extracts the public key of a valid address.
    pub fn public_key_from_str(address: &str) -> Result<VerifyingKey, AddressError> {
        let raw = Self::raw_bytes(address)?;

        VerifyingKey::from_bytes(&raw)
            .map_err(|e| AddressError::InvalidPublicKey(e.to_string()))
    }

    /// Converts a `VerifyingKey` into a bech32m-encoded account address
    /// with the `mrdn` prefix.
    ///
    /// The conversion involves:
    /// - Converting the 32-byte public key into 5-bit chunks (base32 compatible).
    /// - Encoding the result with the bech32m variant.
    pub fn address_from_pk(public_key: &VerifyingKey) -> Result<String, AddressError> {
        let bytes = public_key.to_bytes();

        let five_bit: Vec<u5> = convert_bits(&bytes, 8, 5, true)?
            .into_iter()
            .map(|b| u5::try_from_u8(b).unwrap()) // `unwrap()` is safe here because `convert_bits` guarantees the value fits
            .collect();

        encode(ACCOUNT_HRP, five_bit, Variant::Bech32m)
            .map_err(|_| AddressError::EncodingFailed)
    }
}

#[cfg(test)]
mod tests {
    use ed25519_dalek::SigningKey;
    use rand::rngs::OsRng;

    use super::*;

    fn random_key() -> VerifyingKey {
        let mut csprng = OsRng;
        SigningKey::generate(&mut csprng).verifying_key()
    }

    /// Asserts that an address generated from a public key
    /// can be parsed back to the same public key.
    #[test]
    fn test_address_from_public_key_and_back() -> Result<(), AddressError> {
        let public_key = random_key();

        let address_str = Address::address_from_pk(&public_key)?;
        assert!(address_str.starts_with("mrdn1"));

        let extracted_pk = Address::public_key_from_str(&address_str)?;
        assert_eq!(public_key, extracted_pk);

        let raw = Address::raw_bytes(&address_str)?;
        assert_eq!(raw, public_key.to_bytes());

        Ok(())
    }

    /// Verifies that an invalid address string is rejected.
    #[test]
    fn test_invalid_address_is_rejected() {
        let invalid_address = "mrdn1invalidaddress";

        assert!(!Address::is_valid(invalid_address));
        assert!(Address::raw_bytes(invalid_address).is_err());
    }

    /// Verifies that a random string that is not bech32 fails.
    #[test]
    fn test_completely_invalid_format_fails() {
        let random_string = "not_even_bech32_encoded";
        assert!(Address::try_from(random_string).is_err());
        assert!(Address::raw_bytes(random_string).is_err());
    }

    /// Verifies that the empty string is rejected before decoding.
    #[test]
    fn test_empty_address_is_rejected() {
        assert!(matches!(Address::raw_bytes(""), Err(AddressError::Empty)));
    }

    /// A well-formed bech32m string under a foreign prefix must not pass.
    #[test]
    fn test_foreign_prefix_is_rejected() {
        let bytes = random_key().to_bytes();
        let five_bit: Vec<u5> = convert_bits(&bytes, 8, 5, true)
            .unwrap()
            .into_iter()
            .map(|b| u5::try_from_u8(b).unwrap())
            .collect();
        let foreign = encode("cosmos", five_bit, Variant::Bech32m).unwrap();

        assert!(matches!(
            Address::raw_bytes(&foreign),
            Err(AddressError::WrongPrefix(_))
        ));
    }
}
