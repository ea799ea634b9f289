use image::{GrayImage, RgbaImage};

use super::decoder::ImageColor;
use super::encoder::ImageColorMut;
use super::iterators::usable_channel_count;
use crate::media::LsbCodecOptions;
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that implements Read and yields bits
    pub fn decoder<'i>(
        input: &'i RgbaImage,
        opts: &LsbCodecOptions,
    ) -> UniversalDecoder<ImageColor<'i>, OneBitUnveil> {
        UniversalDecoder::new(ImageColor::new_with_options(input, opts), OneBitUnveil)
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder<'i>(
        carrier: &'i mut RgbaImage,
        opts: &LsbCodecOptions,
    ) -> UniversalEncoder<ImageColorMut<'i>, OneBitHide> {
        UniversalEncoder::new(ImageColorMut::new_with_options(carrier, opts), OneBitHide)
    }

    pub fn gray_decoder<'i>(
        input: &'i GrayImage,
        opts: &LsbCodecOptions,
    ) -> UniversalDecoder<ImageColor<'i>, OneBitUnveil> {
        UniversalDecoder::new(ImageColor::from_gray(input, opts), OneBitUnveil)
    }

    pub fn gray_encoder<'i>(
        carrier: &'i mut GrayImage,
        opts: &LsbCodecOptions,
    ) -> UniversalEncoder<ImageColorMut<'i>, OneBitHide> {
        UniversalEncoder::new(ImageColorMut::from_gray(carrier, opts), OneBitHide)
    }

    /// Number of channel values the codec visits, one bit each
    pub fn capacity(input: &RgbaImage, opts: &LsbCodecOptions) -> usize {
        usable_channel_count(
            input.as_raw().len(),
            4,
            opts.skip_alpha_channel,
            opts.get_color_channel_step_increment(),
        )
    }

    pub fn gray_capacity(input: &GrayImage, opts: &LsbCodecOptions) -> usize {
        usable_channel_count(
            input.as_raw().len(),
            1,
            false,
            opts.get_color_channel_step_increment(),
        )
    }
}
