use std::path::PathBuf;

use clap::Args;
use veilkit_core::keygen::{DEFAULT_SAMPLE_COUNT, DEFAULT_SEED};
use veilkit_crypto::kdf::{DEFAULT_ITERATIONS, DEFAULT_KEY_LEN};
use veilkit_crypto::{KdfOptions, Seed};

use crate::CliResult;

/// Derives a reproducible key from the content of a carrier file and a seed
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Seed of the sampler, the same seed and carrier always give the same key
    #[arg(short, long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Key length in bytes
    #[arg(short, long, default_value_t = DEFAULT_KEY_LEN)]
    pub length: usize,

    /// Number of pixels, bytes or characters sampled from the carrier
    #[arg(short = 'p', long = "samples", default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// PBKDF2 rounds
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Derive the key from this text instead of a carrier file
    #[arg(short, long, conflicts_with = "carrier")]
    pub text: Option<String>,

    /// Animated GIF, image, WAV or text file
    #[arg(value_name = "carrier file", required_unless_present = "text")]
    pub carrier: Option<PathBuf>,
}

impl KeygenArgs {
    pub fn run(self) -> CliResult<()> {
        let key = veilkit_core::commands::generate_key(
            self.carrier.as_deref(),
            self.text.as_deref(),
            Seed::from(self.seed),
            self.samples,
            KdfOptions::default()
                .with_key_length(self.length)
                .with_iterations(self.iterations),
        )?;
        println!("{key}");

        Ok(())
    }
}
