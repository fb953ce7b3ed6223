use thiserror::Error;

pub type SignerResult<T> = std::result::Result<T, SignerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid recovery id: {0}. Expected 27 or 28.")]
    InvalidRecoveryId(u8),

    #[error("Public key recovery failed: {0}")]
    RecoveryFailed(String),
}

impl From<hex::FromHexError> for SignerError {
    fn from(e: hex::FromHexError) -> Self {
        SignerError::Decode(e.to_string())
    }
}
