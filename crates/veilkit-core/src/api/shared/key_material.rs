use std::fmt::{self, Debug, Formatter};

use veilkit_crypto::Key;
use zeroize::Zeroizing;

use crate::error::VeilError;
use crate::result::Result;

/// Encryption key as handed in by the user, 32 raw bytes or 64 hex characters.
/// Parsed only when it is used, and never printed.
#[derive(Default)]
pub struct KeyMaterial(Option<Zeroizing<String>>);

impl KeyMaterial {
    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    /// `None` when no key was given, leads to no de-/encryption
    pub fn parse(&self) -> Result<Option<Key>> {
        self.0
            .as_ref()
            .map(|material| Key::parse(material.as_bytes()).map_err(VeilError::from))
            .transpose()
    }
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(material) = &self.0 {
            write!(f, "KeyMaterial({})", "*".repeat(material.len()))
        } else {
            write!(f, "KeyMaterial(None)")
        }
    }
}

impl From<Option<String>> for KeyMaterial {
    fn from(material: Option<String>) -> Self {
        Self(material.map(Zeroizing::new))
    }
}

impl From<&str> for KeyMaterial {
    fn from(material: &str) -> Self {
        Self(Some(Zeroizing::new(material.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn no_material_means_no_key() {
        let material: KeyMaterial = None.into();
        assert!(!material.is_some());
        assert!(material.parse().unwrap().is_none());
    }

    #[test]
    fn hex_and_raw_material_parse() {
        let material: KeyMaterial = HEX_KEY.into();
        let key = material.parse().unwrap().unwrap();
        assert_eq!(key.as_bytes()[31], 0x1f);

        let material: KeyMaterial = "0123456789abcdef0123456789abcdef".into();
        assert!(material.parse().unwrap().is_some());
    }

    #[test]
    fn short_material_is_rejected() {
        let material: KeyMaterial = "too short".into();
        assert!(matches!(material.parse(), Err(VeilError::InvalidKeyLength(9))));
    }

    #[test]
    fn debug_masks_the_material() {
        let material: KeyMaterial = None.into();
        assert_eq!(format!("{:?}", material), "KeyMaterial(None)");

        let material: KeyMaterial = "secret".into();
        assert_eq!(format!("{:?}", material), "KeyMaterial(******)");
    }
}
