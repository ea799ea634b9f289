//! PBKDF2-HMAC-SHA256 key derivation.
//!
//! Two flavours exist:
//! - [`derive_key`] stretches an entropy buffer sampled from a carrier, the salt is
//!   the first 16 bytes of the SHA-256 digest of that very buffer.
//! - [`derive_key_from_text`] stretches a text, the salt is a 16 character string
//!   drawn by a generator seeded from a [`Seed`], so no carrier is involved.

use log::debug;
use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::{CryptoError, Result, Seed};

pub const SALT_LEN: usize = 16;
pub const DEFAULT_KEY_LEN: usize = 32;
pub const DEFAULT_ITERATIONS: u32 = 100_000;

const SALT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Tunables of the key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfOptions {
    /// Length of the derived key in bytes, the hex form is twice as long
    pub key_length: usize,
    /// PBKDF2 rounds
    pub iterations: u32,
}

impl Default for KdfOptions {
    fn default() -> Self {
        Self {
            key_length: DEFAULT_KEY_LEN,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl KdfOptions {
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.key_length == 0 {
            return Err(CryptoError::InvalidKeyLength(0));
        }
        if self.iterations == 0 {
            return Err(CryptoError::KeyDerivationError(
                "iterations must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

/// Derived key bytes, wiped from memory on drop
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedKey(Zeroizing<Vec<u8>>);

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, `2 * len()` characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey({} bytes)", self.len())
    }
}

/// Salt for entropy based derivation: `SHA-256(entropy)[..16]`
pub fn entropy_salt(entropy: &[u8]) -> [u8; SALT_LEN] {
    let digest = Sha256::digest(entropy);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&digest[..SALT_LEN]);
    salt
}

/// Salt for text based derivation, 16 alphanumeric characters drawn from the seeded generator.
pub fn seeded_salt(seed: &Seed) -> [u8; SALT_LEN] {
    let mut rng = seed.rng();
    let mut salt = [0u8; SALT_LEN];
    for c in salt.iter_mut() {
        *c = SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len() as u32) as usize];
    }
    salt
}

/// Derives a key from an entropy buffer sampled out of a carrier.
pub fn derive_key(entropy: &[u8], options: &KdfOptions) -> Result<DerivedKey> {
    options.validate()?;
    let salt = entropy_salt(entropy);
    debug!(
        "deriving {} byte key from {} bytes of entropy, {} iterations",
        options.key_length,
        entropy.len(),
        options.iterations
    );

    Ok(stretch(entropy, &salt, options))
}

/// Derives a key from a text and a seed, independent of any carrier content.
pub fn derive_key_from_text(text: &str, seed: &Seed, options: &KdfOptions) -> Result<DerivedKey> {
    options.validate()?;
    let salt = seeded_salt(seed);
    debug!(
        "deriving {} byte key from {} bytes of text, {} iterations",
        options.key_length,
        text.len(),
        options.iterations
    );

    Ok(stretch(text.as_bytes(), &salt, options))
}

fn stretch(material: &[u8], salt: &[u8], options: &KdfOptions) -> DerivedKey {
    let mut key = Zeroizing::new(vec![0u8; options.key_length]);
    pbkdf2_hmac::<Sha256>(material, salt, options.iterations, &mut key);
    DerivedKey(key)
}
