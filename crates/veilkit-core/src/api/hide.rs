use std::path::{Path, PathBuf};

use log::debug;

use crate::bitstream::PayloadFormat;
use crate::error::VeilError;
use crate::media::{CodecOptions, Media, Persist};
use crate::result::Result;

use super::KeyMaterial;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug, Clone, PartialEq)]
enum Secret {
    Message(String),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<Secret>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    key: KeyMaterial,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Hide this text. Replaces a data file set before.
    pub fn with_message(mut self, message: &str) -> Self {
        self.secret = Some(Secret::Message(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(self, message: Option<S>) -> Self {
        match message {
            Some(message) => self.with_message(message.as_ref()),
            None => self,
        }
    }

    /// Hide the content of this file. Replaces a message set before.
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.secret = Some(Secret::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file<A: AsRef<Path>>(self, data_file: Option<A>) -> Self {
        match data_file {
            Some(data_file) => self.with_file(data_file),
            None => self,
        }
    }

    /// The carrier, an image or a wav file
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Encrypt the secret with this key before hiding it
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.into();
        self
    }

    /// If `None` is passed, no key will be used, leads to no encryption
    pub fn use_key<S: AsRef<str>>(mut self, key: Option<S>) -> Self {
        self.key = key.map(|s| s.as_ref().to_string()).into();
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(secret) = self.secret else {
            return Err(VeilError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(VeilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(VeilError::TargetNotSet);
        };

        let key = self.key.parse()?;
        let mut options = self.options;
        let mut carrier = Media::from_file_for(&media, &options)?;

        let mut payload = match secret {
            Secret::Message(message) => message.into_bytes(),
            Secret::File(file) => std::fs::read(file)?,
        };
        if let Some(key) = key {
            payload = veilkit_crypto::encrypt(&payload, &key)?;
            options = options.with_format(PayloadFormat::LengthHeader);
        }
        debug!("hiding a {} byte payload in {:?}", payload.len(), media);

        carrier.hide_data(&payload, &options)?.save_as(&output)
    }
}
