use std::path::{Path, PathBuf};

use veilkit_crypto::{KdfOptions, Seed};

use crate::error::VeilError;
use crate::keygen::{self, DEFAULT_SAMPLE_COUNT};
use crate::result::Result;

pub fn prepare() -> KeygenApi {
    KeygenApi::default()
}

#[derive(Debug)]
enum Material {
    Carrier(PathBuf),
    Text(String),
}

/// Derives a hex key from a carrier file, or from a text, and a seed
#[derive(Debug)]
pub struct KeygenApi {
    material: Option<Material>,
    seed: Option<Seed>,
    sample_count: usize,
    kdf_options: KdfOptions,
}

impl Default for KeygenApi {
    fn default() -> Self {
        Self {
            material: None,
            seed: None,
            sample_count: DEFAULT_SAMPLE_COUNT,
            kdf_options: KdfOptions::default(),
        }
    }
}

impl KeygenApi {
    /// Sample the key material from this file, an animated GIF, an image, a wav or a text file
    pub fn from_carrier(mut self, carrier: impl AsRef<Path>) -> Self {
        self.material = Some(Material::Carrier(carrier.as_ref().to_path_buf()));
        self
    }

    /// Stretch this text into a key, no carrier is sampled
    pub fn from_text(mut self, text: &str) -> Self {
        self.material = Some(Material::Text(text.to_string()));
        self
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Number of entropy units drawn from the carrier
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_kdf_options(mut self, kdf_options: KdfOptions) -> Self {
        self.kdf_options = kdf_options;
        self
    }

    /// The key as lowercase hex
    pub fn execute(self) -> Result<String> {
        let Some(material) = self.material else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(seed) = self.seed else {
            return Err(VeilError::MissingSeed);
        };

        match material {
            Material::Carrier(path) => {
                let source = keygen::load_source(path)?;
                keygen::generate_key(source.as_ref(), &seed, self.sample_count, &self.kdf_options)
            }
            Material::Text(text) => keygen::generate_key_from_text(&text, &seed, &self.kdf_options),
        }
    }
}
