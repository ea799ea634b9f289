//! One bit per 8×8 block of a grayscale image, stored in the parity of DCT coefficient (4, 3).
//!
//! Blocks are visited in raster order, block rows top to bottom and block columns left to
//! right. Trailing rows and columns that do not fill a whole block are never touched.

use image::GrayImage;
use log::{debug, warn};

use crate::capacity;
use crate::dct::{self, Block, BLOCK_SIZE};
use crate::error::VeilError;
use crate::result::Result;

/// Row (vertical frequency) of the carrying coefficient
pub const COEFFICIENT_ROW: usize = 4;
/// Column (horizontal frequency) of the carrying coefficient
pub const COEFFICIENT_COLUMN: usize = 3;
/// Coefficient values tried per block before giving up
pub const MAX_CANDIDATES: usize = 8;

const COEFFICIENT: usize = COEFFICIENT_ROW * BLOCK_SIZE + COEFFICIENT_COLUMN;

type Pixels = [u8; BLOCK_SIZE * BLOCK_SIZE];

/// Factory for the DCT bit decoder, plus the embedding routine
pub struct DctCodec;

impl DctCodec {
    /// Number of whole blocks, one bit each
    pub fn capacity(image: &GrayImage) -> usize {
        let (rows, columns) = block_grid(image);
        rows * columns
    }

    /// Lazily reads one bit per block in raster order
    pub fn decoder(image: &GrayImage) -> DctBits<'_> {
        let (rows, columns) = block_grid(image);
        DctBits {
            image,
            index: 0,
            blocks: rows * columns,
            columns,
        }
    }

    /// Hides `bits`, one per block. Either every bit lands or the image stays untouched.
    pub fn hide_bits(image: &mut GrayImage, bits: &[bool]) -> Result<()> {
        let (_, columns) = block_grid(image);
        capacity::check(bits.len(), Self::capacity(image))?;
        debug!("dct: hiding {} bits into {} blocks", bits.len(), Self::capacity(image));

        let mut scratch = image.clone();
        for (index, bit) in bits.iter().enumerate() {
            embed_block(&mut scratch, index / columns, index % columns, *bit)?;
        }
        *image = scratch;

        Ok(())
    }
}

/// Bits of a grayscale image, one per block
pub struct DctBits<'i> {
    image: &'i GrayImage,
    index: usize,
    blocks: usize,
    columns: usize,
}

impl Iterator for DctBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.blocks {
            return None;
        }
        let (row, column) = (self.index / self.columns, self.index % self.columns);
        self.index += 1;

        Some(parity_of(&read_block(self.image, row, column)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.blocks - self.index;
        (left, Some(left))
    }
}

fn block_grid(image: &GrayImage) -> (usize, usize) {
    (
        image.height() as usize / BLOCK_SIZE,
        image.width() as usize / BLOCK_SIZE,
    )
}

fn read_block(image: &GrayImage, row: usize, column: usize) -> Pixels {
    let width = image.width() as usize;
    let raw = image.as_raw();
    let mut block = [0u8; BLOCK_SIZE * BLOCK_SIZE];
    for (y, line) in block.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        let start = (row * BLOCK_SIZE + y) * width + column * BLOCK_SIZE;
        line.copy_from_slice(&raw[start..start + BLOCK_SIZE]);
    }
    block
}

fn write_block(image: &mut GrayImage, row: usize, column: usize, block: &Pixels) {
    let width = image.width() as usize;
    let raw: &mut [u8] = image;
    for (y, line) in block.chunks_exact(BLOCK_SIZE).enumerate() {
        let start = (row * BLOCK_SIZE + y) * width + column * BLOCK_SIZE;
        raw[start..start + BLOCK_SIZE].copy_from_slice(line);
    }
}

fn to_samples(block: &Pixels) -> Block {
    block.map(f64::from)
}

fn to_pixels(samples: &Block) -> Pixels {
    samples.map(|s| s.round().clamp(0.0, 255.0) as u8)
}

/// `round(C[4][3]) mod 2`, Euclidean so negative coefficients read the same way
fn parity_of(block: &Pixels) -> bool {
    let coefficient = dct::forward(&to_samples(block))[COEFFICIENT];
    (coefficient.round() as i64).rem_euclid(2) == 1
}

/// `floor(c/2)*2 + bit` first, then the other values of the same parity, closest first.
fn candidates(c: f64, bit: bool) -> Vec<f64> {
    let base = (c / 2.0).floor() * 2.0 + f64::from(u8::from(bit));
    let mut others: Vec<f64> = (1..MAX_CANDIDATES)
        .flat_map(|k| {
            let delta = 2.0 * k as f64;
            [base + delta, base - delta]
        })
        .collect();
    others.sort_by(|a, b| (a - c).abs().total_cmp(&(b - c).abs()));

    std::iter::once(base)
        .chain(others)
        .take(MAX_CANDIDATES)
        .collect()
}

fn embed_block(image: &mut GrayImage, row: usize, column: usize, bit: bool) -> Result<()> {
    let mut coeffs = dct::forward(&to_samples(&read_block(image, row, column)));
    let original = coeffs[COEFFICIENT];

    for (attempt, candidate) in candidates(original, bit).into_iter().enumerate() {
        coeffs[COEFFICIENT] = candidate;
        let restored = to_pixels(&dct::inverse(&coeffs));
        if parity_of(&restored) == bit {
            if attempt > 0 {
                warn!("dct: block ({row}, {column}) kept its bit only with candidate #{attempt}");
            }
            write_block(image, row, column, &restored);
            return Ok(());
        }
    }

    warn!("dct: block ({row}, {column}) cannot hold a bit, {MAX_CANDIDATES} candidates failed");
    Err(VeilError::UnstableBlock { row, column })
}
