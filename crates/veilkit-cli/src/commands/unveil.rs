use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Unveils data from an image or WAV audio file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Key used to decrypt the data, 64 hex characters
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,

    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Final data will be stored in that file, printed to stdout if omitted
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let data = veilkit_core::commands::unveil(
            &self.media,
            self.output_file.as_deref(),
            self.key,
            self.codec.options(),
        )?;

        if self.output_file.is_none() {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&data)?;
            stdout.flush()?;
        }

        Ok(())
    }
}
