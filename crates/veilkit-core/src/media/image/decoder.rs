use std::slice::Iter;

use image::{GrayImage, RgbaImage};

use crate::media::image::iterators::ChannelIter;
use crate::media::{LsbCodecOptions, MediaPrimitive};

/// hidden data source for image files, based on `RgbaImage` or `GrayImage` by `image` crate
///
/// ## Example of usage
/// ```rust
/// use std::io::Read;
/// use image::RgbaImage;
/// use veilkit_core::universal_decoder::{OneBitUnveil, UniversalDecoder};
/// use veilkit_core::media::image::decoder::ImageColor;
///
/// // every channel of this image has its least significant bit set
/// let image = RgbaImage::from_pixel(4, 4, image::Rgba([1, 3, 5, 7]));
/// let mut secret = vec![0; 2];
///
/// UniversalDecoder::new(ImageColor::new(&image), OneBitUnveil)
///     .read_exact(&mut secret)
///     .expect("Cannot read 2 bytes from decoder");
///
/// assert_eq!(secret, vec![0xff, 0xff]);
/// ```
pub struct ImageColor<'i> {
    channels: ChannelIter<Iter<'i, u8>>,
}

impl<'i> ImageColor<'i> {
    /// constructor for a given `RgbaImage` that lives somewhere
    pub fn new(input: &'i RgbaImage) -> Self {
        Self::new_with_options(input, &LsbCodecOptions::default())
    }

    pub fn new_with_options(input: &'i RgbaImage, options: &LsbCodecOptions) -> Self {
        Self {
            channels: ChannelIter::new(
                input.as_raw().iter(),
                4,
                options.skip_alpha_channel,
                options.get_color_channel_step_increment(),
            ),
        }
    }

    pub fn from_gray(input: &'i GrayImage, options: &LsbCodecOptions) -> Self {
        Self {
            channels: ChannelIter::new(
                input.as_raw().iter(),
                1,
                false,
                options.get_color_channel_step_increment(),
            ),
        }
    }
}

/// iterates over the image and returns single color channels of each pixel wrapped into a `MediaPrimitive`
impl Iterator for ImageColor<'_> {
    type Item = MediaPrimitive;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.channels
            .next()
            .map(|c| MediaPrimitive::ImageColorChannel(*c))
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_over_all_colors_of_an_image_row_by_row() {
        let img = prepare_5x5_image();
        let (width, height) = img.dimensions();
        let mut media_primitive_iter = ImageColor::new(&img);

        for y in 0..height {
            for x in 0..width {
                let expected_pixel = img.get_pixel(x, y);
                for color_idx in 0..3 {
                    let expected_color = expected_pixel.0[color_idx];
                    let given_color = media_primitive_iter.next().unwrap_or_else(|| {
                        panic!("MediaPrimitive at ({x}, {y}) was not even existing!")
                    });

                    assert_eq!(
                        given_color,
                        expected_color.into(),
                        "MediaPrimitive at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(media_primitive_iter.next().is_none());
    }

    #[test]
    fn it_should_include_alpha_when_asked() {
        let img = prepare_5x5_image();
        let options = LsbCodecOptions {
            skip_alpha_channel: false,
            ..LsbCodecOptions::default()
        };

        let colors: Vec<MediaPrimitive> = ImageColor::new_with_options(&img, &options).collect();
        assert_eq!(colors.len(), 5 * 5 * 4);
        assert_eq!(colors[3], MediaPrimitive::ImageColorChannel(3));
    }

    #[test]
    fn it_should_iterate_gray_levels() {
        let img = GrayImage::from_fn(3, 2, |x, y| image::Luma([(10 * y + x) as u8]));
        let levels: Vec<MediaPrimitive> =
            ImageColor::from_gray(&img, &LsbCodecOptions::default()).collect();

        assert_eq!(
            levels,
            [0u8, 1, 2, 10, 11, 12].map(MediaPrimitive::from).to_vec()
        );
    }
}
