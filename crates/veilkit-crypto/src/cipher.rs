//! AES-256-GCM authenticated encryption of payloads.
//!
//! Layout of an encrypted blob:
//!   [ 12-byte nonce | ciphertext | 16-byte auth tag ]

use std::fmt::{self, Debug, Formatter};

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Result};

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

/// A 32 byte symmetric key, wiped from memory on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Accepts either 32 raw key bytes or the 64 character hex encoding of them.
    pub fn parse(material: impl AsRef<[u8]>) -> Result<Self> {
        let material = material.as_ref();
        match material.len() {
            KEY_LEN => {
                let mut key = [0u8; KEY_LEN];
                key.copy_from_slice(material);
                Ok(Self(key))
            }
            len if len == 2 * KEY_LEN => {
                let mut key = [0u8; KEY_LEN];
                hex::decode_to_slice(material, &mut key)
                    .map_err(|_| CryptoError::InvalidKeyLength(len))?;
                Ok(Self(key))
            }
            len => Err(CryptoError::InvalidKeyLength(len)),
        }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", "*".repeat(2 * KEY_LEN))
    }
}

/// Encrypts `plaintext` with a fresh random nonce, returns `nonce || ciphertext || tag`.
pub fn encrypt(plaintext: &[u8], key: &Key) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLength(KEY_LEN))?;
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(CryptoError::EncryptionError)?;

    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);

    Ok(output)
}

/// Decrypts a blob produced by [`encrypt`], nothing is returned unless the tag verifies.
pub fn decrypt(data: &[u8], key: &Key) -> Result<Vec<u8>> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(CryptoError::AuthenticationFailure);
    }

    let (nonce, ciphertext) = data.split_at(NONCE_LEN);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| CryptoError::InvalidKeyLength(KEY_LEN))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailure)
}

/// Like [`decrypt`] but for payloads that were UTF-8 text before encryption.
pub fn decrypt_to_string(data: &[u8], key: &Key) -> Result<String> {
    Ok(String::from_utf8(decrypt(data, key)?)?)
}
