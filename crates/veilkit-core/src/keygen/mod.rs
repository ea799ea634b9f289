//! Reproducible keys from the content of a carrier and a seed.
//!
//! A call-local ChaCha20 generator, seeded from the [`Seed`], picks `n` entropy units out of
//! the carrier. The units are concatenated in draw order and stretched by PBKDF2 into a key.
//! The same seed, carrier content and `n` always give the same key.

pub mod sources;

use std::path::Path;

use log::debug;
use veilkit_crypto::{kdf, KdfOptions, Seed};
use zeroize::Zeroizing;

pub use sources::{AnimatedImageSource, AudioByteSource, EntropySource, StillImageSource, TextSource};

use crate::error::VeilError;
use crate::result::Result;

pub const DEFAULT_SAMPLE_COUNT: usize = 100;
pub const DEFAULT_SEED: &str = "42";

/// Draws `count` units from `source`, the buffer is wiped on drop
pub fn sample_entropy(source: &dyn EntropySource, seed: &Seed, count: usize) -> Zeroizing<Vec<u8>> {
    let mut rng = seed.rng();
    let mut buffer = Zeroizing::new(Vec::with_capacity(count * source.unit_len()));
    for _ in 0..count {
        source.draw(&mut rng, &mut buffer);
    }
    debug!("sampled {count} units, {} bytes of entropy", buffer.len());

    buffer
}

/// Lowercase hex key of `options.key_length` bytes derived from `count` samples of `source`
pub fn generate_key(
    source: &dyn EntropySource,
    seed: &Seed,
    count: usize,
    options: &KdfOptions,
) -> Result<String> {
    let entropy = sample_entropy(source, seed, count);

    Ok(kdf::derive_key(&entropy, options)?.to_hex())
}

/// Lowercase hex key derived from a text and a seed, no carrier involved
pub fn generate_key_from_text(text: &str, seed: &Seed, options: &KdfOptions) -> Result<String> {
    Ok(kdf::derive_key_from_text(text, seed, options)?.to_hex())
}

/// Opens the sampler matching the file extension.
///
/// GIFs must be animated; `png`, `jpg` and `jpeg` are sampled as still images, `wav` by its
/// raw bytes and `txt` as a paged text.
pub fn load_source(path: impl AsRef<Path>) -> Result<Box<dyn EntropySource>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    Ok(match ext.as_str() {
        "gif" => Box::new(AnimatedImageSource::from_file(path)?),
        "png" | "jpg" | "jpeg" => Box::new(StillImageSource::from_file(path)?),
        "wav" => Box::new(AudioByteSource::from_file(path)?),
        "txt" => Box::new(TextSource::from_file(path)?),
        _ => {
            return Err(VeilError::UnsupportedCarrier(format!(
                "no key sampler for {}",
                path.display()
            )))
        }
    })
}
