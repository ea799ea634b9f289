use std::path::PathBuf;

use clap::Args;

use crate::cli::CodecArgs;
use crate::CliResult;

/// Hides a message or a file in an image or WAV audio file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Key used to encrypt the data, 64 hex characters
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,

    /// Media file such as PNG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, images always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the media
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        Ok(veilkit_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            self.key,
            self.codec.options(),
        )?)
    }
}
