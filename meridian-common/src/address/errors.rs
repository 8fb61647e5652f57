use bech32::Error as Bech32Error;
use ed25519_dalek::SignatureError;
use thiserror::Error;

/// Errors related specifically to address formatting and encoding.
#[derive(Debug, Error)]
pub enum AddressError {
    /// The address string is empty.
    #[error("Address is empty")]
    Empty,

    /// The string is not well-formed bech32 (charset, checksum, casing).
    #[error("Failed to decode address: {0}")]
    Bech32(#[from] Bech32Error),

    /// Decoded cleanly but carries a foreign human-readable prefix or the
    /// wrong bech32 variant.
    #[error("Not a Meridian account address: {0}")]
    WrongPrefix(String),

    /// Address payload is not 32 bytes.
    #[error("Invalid address payload length: {0}")]
    InvalidLength(usize),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Failed to encode the address as Bech32m.
    #[error("Failed to encode address to bech32m")]
    EncodingFailed,
}

impl From<SignatureError> for AddressError {
    fn from(err: SignatureError) -> Self {
        AddressError::InvalidPublicKey(err.to_string())
    }
}
