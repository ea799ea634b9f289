//! Carriers the key sampler can draw entropy units from.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, RgbImage};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::error::VeilError;
use crate::result::Result;

/// Page separator of [`TextSource`] texts
pub const PAGE_BREAK: char = '\x0c';

/// A carrier that yields one entropy unit per draw.
///
/// Implementations must only look at decoded content, never at file metadata, and must take
/// their coordinates from `rng` in a fixed order.
pub trait EntropySource {
    /// Draws one entropy unit and appends its bytes to `buffer`
    fn draw(&self, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>);

    /// Bytes a single draw appends, a hint for sizing the buffer
    fn unit_len(&self) -> usize;
}

/// Uniform index in `0..len`, drawn as `u64` so it is the same on every platform
fn pick(rng: &mut ChaCha20Rng, len: usize) -> usize {
    rng.gen_range(0..len as u64) as usize
}

fn push_pixel(image: &RgbImage, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>) {
    let x = pick(rng, image.width() as usize) as u32;
    let y = pick(rng, image.height() as usize) as u32;
    buffer.extend_from_slice(&image.get_pixel(x, y).0);
}

fn ensure_not_empty(image: &RgbImage) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(VeilError::UnsupportedCarrier("image has no pixels".into()));
    }
    Ok(())
}

fn unreadable(path: &Path, e: impl std::fmt::Display) -> VeilError {
    VeilError::CarrierUnreadable(format!("{}: {e}", path.display()))
}

/// Frames of an animated GIF; draws a frame, then `x`, then `y` and yields the RGB triple.
#[derive(Debug, Clone)]
pub struct AnimatedImageSource {
    frames: Vec<RgbImage>,
}

impl AnimatedImageSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| unreadable(path, e))?;
        let frames = GifDecoder::new(BufReader::new(file))
            .map_err(|e| unreadable(path, e))?
            .into_frames()
            .collect_frames()
            .map_err(|e| unreadable(path, e))?;
        debug!("{}: {} frames", path.display(), frames.len());

        Self::from_frames(
            frames
                .into_iter()
                .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8())
                .collect(),
        )
    }

    /// Fails with [`VeilError::UnsupportedCarrier`] for fewer than 2 frames
    pub fn from_frames(frames: Vec<RgbImage>) -> Result<Self> {
        if frames.len() < 2 {
            return Err(VeilError::UnsupportedCarrier(format!(
                "image is not animated, it has {} frame(s)",
                frames.len()
            )));
        }
        frames.iter().try_for_each(ensure_not_empty)?;

        Ok(Self { frames })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl EntropySource for AnimatedImageSource {
    fn draw(&self, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>) {
        let frame = &self.frames[pick(rng, self.frames.len())];
        push_pixel(frame, rng, buffer);
    }

    fn unit_len(&self) -> usize {
        3
    }
}

/// A single image; draws `x`, then `y` and yields the RGB triple.
#[derive(Debug, Clone)]
pub struct StillImageSource {
    image: RgbImage,
}

impl StillImageSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| unreadable(path, e))?;

        Self::from_image(image.to_rgb8())
    }

    pub fn from_image(image: RgbImage) -> Result<Self> {
        ensure_not_empty(&image)?;
        Ok(Self { image })
    }
}

impl EntropySource for StillImageSource {
    fn draw(&self, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>) {
        push_pixel(&self.image, rng, buffer);
    }

    fn unit_len(&self) -> usize {
        3
    }
}

/// The raw bytes of an audio file; draws a byte offset and yields that byte.
#[derive(Debug, Clone)]
pub struct AudioByteSource {
    bytes: Vec<u8>,
}

impl AudioByteSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| unreadable(path, e))?;

        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(VeilError::UnsupportedCarrier("audio carrier is empty".into()));
        }
        Ok(Self { bytes })
    }
}

impl EntropySource for AudioByteSource {
    fn draw(&self, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>) {
        buffer.push(self.bytes[pick(rng, self.bytes.len())]);
    }

    fn unit_len(&self) -> usize {
        1
    }
}

/// A book like text: pages separated by form feeds, each page made of its non blank lines.
///
/// Draws a page, a line on it and a column in that line, and yields the UTF-8 bytes of the
/// character found there.
#[derive(Debug, Clone)]
pub struct TextSource {
    pages: Vec<Vec<Vec<char>>>,
}

impl TextSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| unreadable(path, e))?;

        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        let pages: Vec<Vec<Vec<char>>> = text
            .split(PAGE_BREAK)
            .map(|page| {
                page.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.chars().collect())
                    .collect::<Vec<Vec<char>>>()
            })
            .filter(|lines| !lines.is_empty())
            .collect();

        if pages.is_empty() {
            return Err(VeilError::UnsupportedCarrier("text has no printable lines".into()));
        }

        Ok(Self { pages })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl EntropySource for TextSource {
    fn draw(&self, rng: &mut ChaCha20Rng, buffer: &mut Vec<u8>) {
        let page = &self.pages[pick(rng, self.pages.len())];
        let line = &page[pick(rng, page.len())];
        let c = line[pick(rng, line.len())];

        let mut utf8 = [0u8; 4];
        buffer.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    fn unit_len(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(7)
    }

    fn flat(r: u8, g: u8, b: u8) -> RgbImage {
        RgbImage::from_pixel(3, 2, image::Rgb([r, g, b]))
    }

    #[test]
    fn single_frame_is_not_animated() {
        assert!(matches!(
            AnimatedImageSource::from_frames(vec![flat(1, 2, 3)]),
            Err(VeilError::UnsupportedCarrier(_))
        ));
        assert!(matches!(
            AnimatedImageSource::from_frames(vec![flat(1, 2, 3), RgbImage::new(0, 4)]),
            Err(VeilError::UnsupportedCarrier(_))
        ));
    }

    #[test]
    fn animated_draws_yield_rgb_triples_of_some_frame() {
        let source = AnimatedImageSource::from_frames(vec![flat(1, 2, 3), flat(4, 5, 6)]).unwrap();
        let mut rng = rng();
        let mut buffer = Vec::new();

        for _ in 0..20 {
            source.draw(&mut rng, &mut buffer);
        }

        assert_eq!(buffer.len(), 60);
        for triple in buffer.chunks(3) {
            assert!(triple == [1, 2, 3] || triple == [4, 5, 6], "{triple:?}");
        }
        // both frames get drawn eventually
        assert!(buffer.chunks(3).any(|t| t[0] == 1));
        assert!(buffer.chunks(3).any(|t| t[0] == 4));
    }

    #[test]
    fn still_image_draws_pixels() {
        let image = RgbImage::from_fn(4, 4, |x, y| image::Rgb([x as u8, y as u8, 9]));
        let source = StillImageSource::from_image(image).unwrap();
        let mut rng = rng();
        let mut buffer = Vec::new();

        source.draw(&mut rng, &mut buffer);

        assert_eq!(buffer.len(), 3);
        assert!(buffer[0] < 4 && buffer[1] < 4);
        assert_eq!(buffer[2], 9);
    }

    #[test]
    fn empty_audio_is_unsupported() {
        assert!(matches!(
            AudioByteSource::from_bytes(Vec::new()),
            Err(VeilError::UnsupportedCarrier(_))
        ));
    }

    #[test]
    fn audio_draws_single_bytes() {
        let source = AudioByteSource::from_bytes(vec![0xaa, 0xbb]).unwrap();
        let mut rng = rng();
        let mut buffer = Vec::new();

        for _ in 0..10 {
            source.draw(&mut rng, &mut buffer);
        }

        assert_eq!(buffer.len(), 10);
        assert!(buffer.iter().all(|b| *b == 0xaa || *b == 0xbb));
    }

    #[test]
    fn text_pages_skip_blank_lines() {
        let source = TextSource::from_text("first page\n\n   \nsecond line\x0c\n\x0cthird page").unwrap();
        assert_eq!(source.page_count(), 2);

        assert!(matches!(
            TextSource::from_text("\n \x0c\n"),
            Err(VeilError::UnsupportedCarrier(_))
        ));
    }

    #[test]
    fn text_draws_whole_utf8_characters() {
        let source = TextSource::from_text("ü").unwrap();
        let mut rng = rng();
        let mut buffer = Vec::new();

        source.draw(&mut rng, &mut buffer);
        source.draw(&mut rng, &mut buffer);

        assert_eq!(buffer, "üü".as_bytes());
    }

    #[test]
    fn missing_files_are_unreadable() {
        assert!(matches!(
            AnimatedImageSource::from_file("does/not/exist.gif"),
            Err(VeilError::CarrierUnreadable(_))
        ));
        assert!(matches!(
            AudioByteSource::from_file("does/not/exist.wav"),
            Err(VeilError::CarrierUnreadable(_))
        ));
        assert!(matches!(
            TextSource::from_file("does/not/exist.txt"),
            Err(VeilError::CarrierUnreadable(_))
        ));
    }
}
