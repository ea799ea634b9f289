use std::path::Path;

use veilkit_crypto::{KdfOptions, Seed};

use crate::result::Result;

/// Hex key from a carrier file when given, otherwise from `text`
pub fn generate_key(
    carrier: Option<&Path>,
    text: Option<&str>,
    seed: Seed,
    sample_count: usize,
    kdf_options: KdfOptions,
) -> Result<String> {
    let mut api = crate::api::keygen::prepare()
        .with_seed(seed)
        .with_sample_count(sample_count)
        .with_kdf_options(kdf_options);

    if let Some(text) = text {
        api = api.from_text(text);
    }
    if let Some(carrier) = carrier {
        api = api.from_carrier(carrier);
    }

    api.execute()
}
