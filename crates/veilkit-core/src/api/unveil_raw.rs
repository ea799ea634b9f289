use std::path::{Path, PathBuf};

use crate::error::VeilError;
use crate::media::{CodecOptions, Media};
use crate::result::Result;

use super::write_output;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps every hidden bit of a carrier, no terminator or payload format is interpreted.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image or audio file that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(VeilError::TargetNotSet);
        };

        let media = Media::from_file_for(&secret_media, &self.options)?;
        let raw = media.unveil_raw(&self.options)?;

        write_output(&destination_file, &raw)
    }
}
