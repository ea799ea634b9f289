use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Dumps every hidden bit of a media file, for diagnostics
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl UnveilRawArgs {
    pub fn run(self) -> CliResult<()> {
        Ok(veilkit_core::commands::unveil_raw(
            &self.media,
            &self.output_file,
            self.codec.options(),
        )?)
    }
}
