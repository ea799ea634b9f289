//! Embedding engines behind one interface, selected by [`CodecOptions`].
//!
//! Every backend validates the capacity before touching the carrier, so a failed `embed`
//! leaves the carrier as it was.

use log::debug;

use crate::bitstream::{self, PayloadFormat, Terminator};
use crate::capacity;
use crate::error::VeilError;
use crate::media::audio::LsbCodec as AudioLsbCodec;
use crate::media::image::{DctCodec, LsbCodec as ImageLsbCodec};
use crate::media::{CodecOptions, DctCodecOptions, LsbCodecOptions, Media};
use crate::result::Result;

/// An engine that hides a payload inside an in-memory carrier and gets it back
pub trait StegoBackend {
    fn name(&self) -> &'static str;

    /// Carrier units available, one bit each
    fn capacity(&self, carrier: &Media) -> Result<usize>;

    fn embed(&self, carrier: &mut Media, payload: &[u8]) -> Result<()>;

    fn extract(&self, carrier: &Media) -> Result<Vec<u8>>;

    /// Every hidden bit packed into bytes, no terminator is interpreted
    fn extract_raw(&self, carrier: &Media) -> Result<Vec<u8>>;
}

/// Picks the engine matching the options
pub fn backend_for(options: &CodecOptions) -> Box<dyn StegoBackend> {
    match options {
        CodecOptions::Lsb(o) => Box::new(LsbBackend::new(*o)),
        CodecOptions::Dct(o) => Box::new(DctBackend::new(*o)),
    }
}

fn bits_for(payload: &[u8], terminator: Terminator, format: PayloadFormat, units: usize) -> Result<Vec<bool>> {
    capacity::check_payload(payload.len(), format, units)?;

    bitstream::encode_with_format(payload, terminator, format)
}

/// Least significant bit of image channel values and audio samples
#[derive(Debug, Default, Clone, Copy)]
pub struct LsbBackend {
    options: LsbCodecOptions,
}

impl LsbBackend {
    pub fn new(options: LsbCodecOptions) -> Self {
        Self { options }
    }
}

impl StegoBackend for LsbBackend {
    fn name(&self) -> &'static str {
        "lsb"
    }

    fn capacity(&self, carrier: &Media) -> Result<usize> {
        Ok(match carrier {
            Media::Image(image) => ImageLsbCodec::capacity(image, &self.options),
            Media::Gray(image) => ImageLsbCodec::gray_capacity(image, &self.options),
            Media::Audio((_, samples)) => AudioLsbCodec::capacity(samples),
        })
    }

    fn embed(&self, carrier: &mut Media, payload: &[u8]) -> Result<()> {
        let bits = bits_for(
            payload,
            self.options.terminator,
            self.options.format,
            self.capacity(carrier)?,
        )?;

        let written = match carrier {
            Media::Image(image) => ImageLsbCodec::encoder(image, &self.options).hide_bits(bits)?,
            Media::Gray(image) => ImageLsbCodec::gray_encoder(image, &self.options).hide_bits(bits)?,
            Media::Audio((_, samples)) => AudioLsbCodec::encoder(samples).hide_bits(bits)?,
        };
        debug!("lsb: {written} bits hidden");

        Ok(())
    }

    fn extract(&self, carrier: &Media) -> Result<Vec<u8>> {
        let (terminator, format) = (self.options.terminator, self.options.format);
        match carrier {
            Media::Image(image) => bitstream::decode_with_format(
                ImageLsbCodec::decoder(image, &self.options),
                terminator,
                format,
            ),
            Media::Gray(image) => bitstream::decode_with_format(
                ImageLsbCodec::gray_decoder(image, &self.options),
                terminator,
                format,
            ),
            Media::Audio((_, samples)) => {
                bitstream::decode_with_format(AudioLsbCodec::decoder(samples), terminator, format)
            }
        }
    }

    fn extract_raw(&self, carrier: &Media) -> Result<Vec<u8>> {
        match carrier {
            Media::Image(image) => bitstream::pack_bits(ImageLsbCodec::decoder(image, &self.options)),
            Media::Gray(image) => bitstream::pack_bits(ImageLsbCodec::gray_decoder(image, &self.options)),
            Media::Audio((_, samples)) => bitstream::pack_bits(AudioLsbCodec::decoder(samples)),
        }
    }
}

/// Parity of one DCT coefficient per 8×8 block, grayscale images only
#[derive(Debug, Default, Clone, Copy)]
pub struct DctBackend {
    options: DctCodecOptions,
}

impl DctBackend {
    pub fn new(options: DctCodecOptions) -> Self {
        Self { options }
    }

    fn gray<'m>(&self, carrier: &'m Media) -> Result<&'m image::GrayImage> {
        match carrier {
            Media::Gray(image) => Ok(image),
            other => Err(unsupported(other)),
        }
    }
}

fn unsupported(carrier: &Media) -> VeilError {
    let kind = match carrier {
        Media::Image(_) => "color images",
        Media::Audio(_) => "audio",
        Media::Gray(_) => "grayscale images",
    };
    VeilError::UnsupportedCarrier(format!(
        "DCT embedding needs a grayscale image, {kind} are not supported"
    ))
}

impl StegoBackend for DctBackend {
    fn name(&self) -> &'static str {
        "dct"
    }

    fn capacity(&self, carrier: &Media) -> Result<usize> {
        Ok(DctCodec::capacity(self.gray(carrier)?))
    }

    fn embed(&self, carrier: &mut Media, payload: &[u8]) -> Result<()> {
        let image = match carrier {
            Media::Gray(image) => image,
            other => return Err(unsupported(other)),
        };
        let bits = bits_for(
            payload,
            self.options.terminator,
            self.options.format,
            DctCodec::capacity(image),
        )?;

        DctCodec::hide_bits(image, &bits)
    }

    fn extract(&self, carrier: &Media) -> Result<Vec<u8>> {
        bitstream::decode_with_format(
            DctCodec::decoder(self.gray(carrier)?),
            self.options.terminator,
            self.options.format,
        )
    }

    fn extract_raw(&self, carrier: &Media) -> Result<Vec<u8>> {
        bitstream::pack_bits(DctCodec::decoder(self.gray(carrier)?))
    }
}
