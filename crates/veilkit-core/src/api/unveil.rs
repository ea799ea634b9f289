use std::path::{Path, PathBuf};

use crate::bitstream::PayloadFormat;
use crate::error::VeilError;
use crate::media::{CodecOptions, Media};
use crate::result::Result;

use super::{write_output, KeyMaterial};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    key: KeyMaterial,
    options: CodecOptions,
}

impl UnveilApi {
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

    /// Also write the unveiled data to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Decrypt the unveiled data with this key
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.into();
        self
    }

    /// If `None` is passed, no key will be used, leads to no decryption
    pub fn use_key<S: AsRef<str>>(mut self, key: Option<S>) -> Self {
        self.key = key.map(|s| s.as_ref().to_string()).into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(secret_media) = self.secret_media else {
            return Err(VeilError::CarrierNotSet);
        };

        let key = self.key.parse()?;
        let mut options = self.options;
        if key.is_some() {
            options = options.with_format(PayloadFormat::LengthHeader);
        }

        let media = Media::from_file_for(&secret_media, &options)?;
        let mut data = media.unveil_data(&options)?;
        if let Some(key) = key {
            data = veilkit_crypto::decrypt(&data, &key)?;
        }

        if let Some(output_file) = self.output_file {
            write_output(&output_file, &data)?;
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::media::{DctCodecOptions, Persist};
    use crate::test_utils::{noise_gray, noise_image};

    const KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    const OTHER_KEY: &str = "ff0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        noise_image(40, 40, 2).save(&carrier).unwrap();

        crate::api::hide::prepare()
            .with_message("Hello World")
            .with_media(&carrier)
            .with_key(KEY)
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let data = prepare()
            .from_secret_file(&secret)
            .with_key(KEY)
            .into_output_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(data, b"Hello World");
        assert_eq!(
            std::fs::read_to_string(temp_dir.path().join("secret-message.txt")).unwrap(),
            "Hello World"
        );
    }

    #[test]
    fn wrong_key_is_an_authentication_failure() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        noise_image(40, 40, 3).save(&carrier).unwrap();

        crate::api::hide::prepare()
            .with_message("not for you")
            .with_media(&carrier)
            .with_key(KEY)
            .with_output(&secret)
            .execute()
            .unwrap();

        assert!(matches!(
            prepare().from_secret_file(&secret).with_key(OTHER_KEY).execute(),
            Err(VeilError::AuthenticationFailure)
        ));
    }

    #[test]
    fn dct_mode_reads_grayscale_png() {
        let temp_dir = tempdir().unwrap();
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        Media::from_gray(noise_gray(96, 96, 4)).save_as(&carrier).unwrap();
        let options = CodecOptions::Dct(DctCodecOptions::default());

        crate::api::hide::prepare()
            .with_message("dct")
            .with_media(&carrier)
            .with_options(options)
            .with_output(&secret)
            .execute()
            .unwrap();

        let data = prepare()
            .from_secret_file(&secret)
            .with_options(options)
            .execute()
            .unwrap();
        assert_eq!(data, b"dct");
    }

    #[test]
    fn missing_carrier_is_reported() {
        assert!(matches!(prepare().execute(), Err(VeilError::CarrierNotSet)));
    }
}
