//! Seeds for the deterministic key samplers, plus OS backed random seed generation.

use std::fmt::{self, Display, Formatter};

use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::{CryptoError, Result};

/// Precision of the fraction used by [`generate_secure_random_float`]
const FLOAT_FRACTION_STEPS: u64 = 100_000_000;

/// A seed for the deterministic samplers.
///
/// The seed is kept in its canonical textual form, so `Seed::from(42)`,
/// `Seed::from(42.0)` and `Seed::from("42")` are the same seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    pub fn new<S: Into<String>>(seed: S) -> Self {
        Self(seed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A freshly seeded generator, owned by the caller.
    ///
    /// The 32 byte ChaCha20 seed is the SHA-256 digest of the canonical seed text.
    pub fn rng(&self) -> ChaCha20Rng {
        let digest: [u8; 32] = Sha256::digest(self.0.as_bytes()).into();
        ChaCha20Rng::from_seed(digest)
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

/// Secure random integer in `[lower, upper]`, drawn from the OS generator.
pub fn generate_secure_random_integer(lower: i64, upper: i64) -> Result<i64> {
    if lower > upper {
        return Err(CryptoError::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }

    Ok(OsRng.gen_range(lower..=upper))
}

/// Secure random float in `[lower, upper)`, with a fraction of 8 decimal digits.
pub fn generate_secure_random_float(lower: f64, upper: f64) -> Result<f64> {
    if lower > upper || lower.is_nan() || upper.is_nan() {
        return Err(CryptoError::InvalidRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        });
    }

    let fraction = OsRng.gen_range(0..FLOAT_FRACTION_STEPS) as f64 / FLOAT_FRACTION_STEPS as f64;

    Ok(lower + (upper - lower) * fraction)
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;

    #[test]
    fn numeric_and_textual_seeds_are_canonical() {
        assert_eq!(Seed::from(42), Seed::from("42"));
        assert_eq!(Seed::from(42.0), Seed::from("42"));
        assert_eq!(Seed::from(42.42), Seed::from("42.42"));
        assert_ne!(Seed::from(42.42), Seed::from(42.41));
    }

    #[test]
    fn same_seed_gives_same_stream() {
        let mut a = Seed::from("a8F2zXqL9mNpW7Kd").rng();
        let mut b = Seed::from("a8F2zXqL9mNpW7Kd").rng();

        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_give_different_streams() {
        let mut a = Seed::from(12).rng();
        let mut b = Seed::from(13).rng();
        let a: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let b: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();

        assert_ne!(a, b);
    }

    #[test]
    fn random_integer_stays_in_bounds() {
        for _ in 0..100 {
            let v = generate_secure_random_integer(14, 20).unwrap();
            assert!((14..=20).contains(&v));
        }
        assert_eq!(generate_secure_random_integer(7, 7).unwrap(), 7);
    }

    #[test]
    fn random_float_stays_in_bounds() {
        for _ in 0..100 {
            let v = generate_secure_random_float(14.0, 100_000.0).unwrap();
            assert!((14.0..100_000.0).contains(&v));
        }
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(matches!(
            generate_secure_random_integer(10, 1),
            Err(CryptoError::InvalidRange { .. })
        ));
        assert!(matches!(
            generate_secure_random_float(10.0, 1.0),
            Err(CryptoError::InvalidRange { .. })
        ));
    }
}
