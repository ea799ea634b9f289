use std::string::FromUtf8Error;
use thiserror::Error;

pub use veilkit_crypto::CryptoError;

#[derive(Error, Debug)]
pub enum VeilError {
    /// The carrier has fewer embedding units than the encoded payload needs bits
    #[error("Capacity Error: the payload needs {required} carrier units but only {available} are available")]
    InsufficientCapacity { required: usize, available: usize },

    /// The payload length does not fit into the `u32` length header
    #[error("Payload of {len} bytes exceeds the length header limit of {max} bytes")]
    PayloadTooLarge { len: usize, max: usize },

    /// No terminator was found before the carrier ran out, or the framing is broken
    #[error("No valid payload found, the carrier holds no secret or it is corrupt")]
    CorruptOrMissingPayload,

    /// Represents a carrier that could not be read or decoded, for example a broken PNG file
    #[error("Carrier media could not be read: {0}")]
    CarrierUnreadable(String),

    /// Represents a carrier that is structurally not usable for the requested operation
    #[error("Carrier media is not supported: {0}")]
    UnsupportedCarrier(String),

    #[error("Key must be exactly 32 bytes or 64 hex characters long, got {0}")]
    InvalidKeyLength(usize),

    #[error("Authentication failed: wrong key or tampered data")]
    AuthenticationFailure,

    /// No coefficient candidate kept its parity through rounding and clipping
    #[error("DCT block at row {row}, column {column} cannot hold a bit stably")]
    UnstableBlock { row: usize, column: usize },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing seed")]
    MissingSeed,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents the error of invalid UTF-8 text data found inside of a text only payload
    #[error("Invalid text data found inside a payload")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Any other failure of the crypto layer
    #[error("Crypto error")]
    Crypto(#[source] CryptoError),
}

impl From<CryptoError> for VeilError {
    fn from(value: CryptoError) -> Self {
        match value {
            CryptoError::InvalidKeyLength(len) => VeilError::InvalidKeyLength(len),
            CryptoError::AuthenticationFailure => VeilError::AuthenticationFailure,
            CryptoError::InvalidTextData(e) => VeilError::InvalidTextData(e),
            other => VeilError::Crypto(other),
        }
    }
}
