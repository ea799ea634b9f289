//! # Veilkit Crypto
//!
//! Cryptographic building blocks used by `veilkit-core`:
//! - AES-256-GCM encryption of payloads before they get hidden ([`cipher`])
//! - PBKDF2-HMAC-SHA256 key derivation from carrier entropy or text ([`kdf`])
//! - deterministic seeds for the key samplers and OS backed random seeds ([`seed`])

pub mod cipher;
pub mod error;
pub mod kdf;
pub mod seed;

pub use crate::cipher::{decrypt, decrypt_to_string, encrypt, Key, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use crate::error::CryptoError;
pub use crate::kdf::{derive_key, derive_key_from_text, DerivedKey, KdfOptions};
pub use crate::seed::{generate_secure_random_float, generate_secure_random_integer, Seed};

pub type Result<T> = std::result::Result<T, CryptoError>;
