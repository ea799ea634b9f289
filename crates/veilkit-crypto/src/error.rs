pub use aes_gcm::Error as AesGcmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material is neither 32 raw bytes nor 64 hex characters
    #[error("Key must be exactly 32 bytes or 64 hex characters long, got {0}")]
    InvalidKeyLength(usize),

    /// Decryption integrity check failed, wrong key or tampered ciphertext
    #[error("Authentication failed: wrong key or tampered data")]
    AuthenticationFailure,

    #[error("Encryption error")]
    EncryptionError(AesGcmError),

    #[error("Key derivation error: {0}")]
    KeyDerivationError(String),

    #[error("Lower bound {lower} must be less than or equal to the upper bound {upper}")]
    InvalidRange { lower: String, upper: String },

    /// Decrypted plaintext was expected to be text but is not valid UTF-8
    #[error("Decrypted data is not valid UTF-8 text")]
    InvalidTextData(#[from] std::string::FromUtf8Error),
}
