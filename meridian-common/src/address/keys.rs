use ed25519_dalek::VerifyingKey;

use super::{
    address::{Address, ADDRESS_LEN},
    errors::AddressError,
};

/// Public key material an account address can be derived from.
///
/// The codec does not care which signature scheme produced an address;
/// every variant only has to surface its raw address bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKey {
    Ed25519(VerifyingKey),
}

impl AccountKey {
    /// The raw bytes this key's account address is built from.
    pub fn to_address_bytes(&self) -> [u8; ADDRESS_LEN] {
        match self {
            AccountKey::Ed25519(pk) => pk.to_bytes(),
        }
    }

    /// The bech32m account address for this key.
    pub fn to_address(&self) -> Result<String, AddressError> {
        match self {
            AccountKey::Ed25519(pk) => Address::address_from_pk(pk),
        }
    }
}

impl From<VerifyingKey> for AccountKey {
    fn from(pk: VerifyingKey) -> Self {
        AccountKey::Ed25519(pk)
    }
}

#[cfg(test)]
mod tests {
    use ed25519_dalek::SigningKey;
    use rand::rngs::OsRng;

    use super::*;

    #[test]
    fn test_key_address_matches_codec() {
        let mut csprng = OsRng;
        let key = AccountKey::from(SigningKey::generate(&mut csprng).verifying_key());

        let address = key.to_address().expect("address derivation failed");
        let raw = Address::raw_bytes(&address).expect("derived address must decode");

        assert_eq!(raw, key.to_address_bytes());
    }
}
