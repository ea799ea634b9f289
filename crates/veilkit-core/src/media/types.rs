use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

pub use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
pub use image::{GrayImage, RgbaImage};
use log::{debug, error};

use crate::backend::backend_for;
use crate::error::VeilError;
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// PCM samples of a wav file, kept in the representation they were stored in
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Int(Vec<i32>),
    Float(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Int(s) => s.len(),
            Samples::Float(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type WavAudio = (WavSpec, Samples);

/// a media container for steganography
#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image(RgbaImage),
    Gray(GrayImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_image(img: RgbaImage) -> Self {
        Self::Image(img)
    }

    pub fn from_gray(img: GrayImage) -> Self {
        Self::Gray(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    /// Loads a carrier by its file extension, images as RGBA and audio as it is stored.
    pub fn from_file(f: impl AsRef<Path>) -> Result<Self> {
        let f = f.as_ref();
        match extension_of(f)?.as_str() {
            "png" | "jpg" | "jpeg" | "gif" => Ok(Self::Image(open_image(f)?.to_rgba8())),
            "wav" => Ok(Self::Audio(read_wav(f)?)),
            ext => Err(VeilError::UnsupportedCarrier(format!(
                "unknown carrier extension `{ext}`"
            ))),
        }
    }

    /// Loads an image carrier as its luminance channel, as needed for DCT embedding.
    pub fn from_file_grayscale(f: impl AsRef<Path>) -> Result<Self> {
        let f = f.as_ref();
        match extension_of(f)?.as_str() {
            "png" | "jpg" | "jpeg" | "gif" => Ok(Self::Gray(open_image(f)?.to_luma8())),
            ext => Err(VeilError::UnsupportedCarrier(format!(
                "`{ext}` carriers have no grayscale view"
            ))),
        }
    }

    /// Loads a carrier in the view the given codec works on
    pub fn from_file_for(f: impl AsRef<Path>, options: &CodecOptions) -> Result<Self> {
        if options.needs_grayscale() {
            Self::from_file_grayscale(f)
        } else {
            Self::from_file(f)
        }
    }

    /// Units the codec can put one bit into
    pub fn capacity(&self, opts: &CodecOptions) -> Result<usize> {
        backend_for(opts).capacity(self)
    }

    pub fn hide_data(&mut self, msg_data: &[u8], opts: &CodecOptions) -> Result<&mut Self> {
        let backend = backend_for(opts);
        debug!("hiding {} bytes with the {} backend", msg_data.len(), backend.name());
        backend.embed(self, msg_data)?;

        Ok(self)
    }

    pub fn unveil_data(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        backend_for(opts).extract(self)
    }

    /// Every hidden bit packed into bytes, without looking for a terminator
    pub fn unveil_raw(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        backend_for(opts).extract_raw(self)
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i.write_to(&mut writer, image::ImageFormat::Png).map_err(|e| {
                error!("Error saving image: {e}");
                VeilError::ImageEncodingError
            }),
            Media::Gray(i) => i.write_to(&mut writer, image::ImageFormat::Png).map_err(|e| {
                error!("Error saving grayscale image: {e}");
                VeilError::ImageEncodingError
            }),
            Media::Audio((spec, samples)) => {
                let mut wav_writer = WavWriter::new(writer, *spec).map_err(|e| {
                    error!("Error creating wav writer: {e}");
                    VeilError::AudioEncodingError
                })?;
                match samples {
                    Samples::Int(samples) => {
                        for s in samples {
                            wav_writer
                                .write_sample(*s)
                                .map_err(|_| VeilError::AudioEncodingError)?;
                        }
                    }
                    Samples::Float(samples) => {
                        for s in samples {
                            wav_writer
                                .write_sample(*s)
                                .map_err(|_| VeilError::AudioEncodingError)?;
                        }
                    }
                }
                wav_writer
                    .finalize()
                    .map_err(|_| VeilError::AudioEncodingError)?;

                Ok(())
            }
        }
    }
}

impl Persist for Media {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            VeilError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

fn extension_of(f: &Path) -> Result<String> {
    f.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| VeilError::UnsupportedCarrier(format!("{} has no file extension", f.display())))
}

fn open_image(f: &Path) -> Result<image::DynamicImage> {
    image::open(f).map_err(|e| VeilError::CarrierUnreadable(format!("{}: {e}", f.display())))
}

fn read_wav(f: &Path) -> Result<WavAudio> {
    let unreadable = |e: hound::Error| VeilError::CarrierUnreadable(format!("{}: {e}", f.display()));

    let mut reader = WavReader::open(f).map_err(unreadable)?;
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Int => Samples::Int(
            reader
                .samples::<i32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(unreadable)?,
        ),
        SampleFormat::Float => Samples::Float(
            reader
                .samples::<f32>()
                .collect::<std::result::Result<_, _>>()
                .map_err(unreadable)?,
        ),
    };
    debug!(
        "read {} samples, {} channels, {} bit {:?}",
        samples.len(),
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    Ok((spec, samples))
}
