use std::path::PathBuf;

use clap::Args;
use veilkit_core::PayloadFormat;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Shows how much data a media file can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Media file such as PNG image or WAV audio file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Report the capacity for encrypted payloads, they carry a length header
    #[arg(long)]
    pub encrypted: bool,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let mut options = self.codec.options();
        if self.encrypted {
            options = options.with_format(PayloadFormat::LengthHeader);
        }
        let report = veilkit_core::commands::capacity(&self.media, options)?;

        println!("carrier units:    {}", report.units);
        println!("max payload size: {} bytes", report.max_payload_len);
        if self.encrypted {
            println!(
                "max plaintext:    {} bytes",
                report
                    .max_payload_len
                    .saturating_sub(veilkit_crypto::NONCE_LEN + veilkit_crypto::TAG_LEN)
            );
        }

        Ok(())
    }
}
