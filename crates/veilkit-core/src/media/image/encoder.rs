use std::slice::IterMut;

use image::{GrayImage, RgbaImage};

use crate::media::image::iterators::ChannelIter;
use crate::media::{LsbCodecOptions, MediaPrimitiveMut};

/// hidden data target for image files, based on `RgbaImage` or `GrayImage` by `image` crate
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use image::RgbaImage;
/// use veilkit_core::media::image::encoder::ImageColorMut;
/// use veilkit_core::universal_encoder::{OneBitHide, UniversalEncoder};
///
/// let image_original = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
/// let mut image = image_original.clone();
/// {
///     let mut encoder = UniversalEncoder::new(ImageColorMut::new(&mut image), OneBitHide);
///     encoder.write_all(b"\xff").expect("Cannot write secret message");
/// }
/// assert_ne!(image_original.get_pixel(0, 0), image.get_pixel(0, 0));
/// ```
pub struct ImageColorMut<'a> {
    channels: ChannelIter<IterMut<'a, u8>>,
}

impl<'a> ImageColorMut<'a> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'a mut RgbaImage) -> Self {
        Self::new_with_options(input, &LsbCodecOptions::default())
    }

    pub fn new_with_options(input: &'a mut RgbaImage, options: &LsbCodecOptions) -> Self {
        let raw: &'a mut [u8] = input;
        Self {
            channels: ChannelIter::new(
                raw.iter_mut(),
                4,
                options.skip_alpha_channel,
                options.get_color_channel_step_increment(),
            ),
        }
    }

    pub fn from_gray(input: &'a mut GrayImage, options: &LsbCodecOptions) -> Self {
        let raw: &'a mut [u8] = input;
        Self {
            channels: ChannelIter::new(
                raw.iter_mut(),
                1,
                false,
                options.get_color_channel_step_increment(),
            ),
        }
    }
}

impl<'a> Iterator for ImageColorMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().map(MediaPrimitiveMut::ImageColorChannel)
    }
}
