use crate::bitstream::{PayloadFormat, Terminator};

/// Codec configuration for steganography encoding/decoding
///
/// The codec choice determines both the embedding method AND the carrier view:
/// - `Lsb` → PNG output for images, WAV output for audio (LSB in channel values or samples)
/// - `Dct` → grayscale PNG output (parity of one DCT coefficient per 8×8 block)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOptions {
    Lsb(LsbCodecOptions),
    Dct(DctCodecOptions),
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::Lsb(LsbCodecOptions::default())
    }
}

impl CodecOptions {
    pub fn terminator(&self) -> Terminator {
        match self {
            CodecOptions::Lsb(o) => o.terminator,
            CodecOptions::Dct(o) => o.terminator,
        }
    }

    pub fn format(&self) -> PayloadFormat {
        match self {
            CodecOptions::Lsb(o) => o.format,
            CodecOptions::Dct(o) => o.format,
        }
    }

    pub fn with_terminator(self, terminator: Terminator) -> Self {
        match self {
            CodecOptions::Lsb(o) => CodecOptions::Lsb(LsbCodecOptions { terminator, ..o }),
            CodecOptions::Dct(o) => CodecOptions::Dct(DctCodecOptions { terminator, ..o }),
        }
    }

    pub fn with_format(self, format: PayloadFormat) -> Self {
        match self {
            CodecOptions::Lsb(o) => CodecOptions::Lsb(LsbCodecOptions { format, ..o }),
            CodecOptions::Dct(o) => CodecOptions::Dct(DctCodecOptions { format, ..o }),
        }
    }

    /// DCT embedding works on the luminance view of a carrier
    pub fn needs_grayscale(&self) -> bool {
        matches!(self, CodecOptions::Dct(_))
    }
}

/// Options for LSB (Least Significant Bit) encoding of images and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsbCodecOptions {
    /// Determines the step width when iterating over the color channels.
    /// For example `2` would move from (R)GBA to RG(B)A.
    /// Depending on if the alpha channel is skipped (`skip_alpha_channel`) it would either
    /// not count alpha at all or it does.
    ///
    /// For example `2` with alpha skipped would move from RG(B)A to R(G)BA on the next pixel because alpha does not count.
    /// Where as when alpha is not skipped it would move from RG(B)A to (R)GBA on the next pixel.
    ///
    /// Note this number influences the capacity directly. Audio samples are never skipped.
    pub color_channel_step_increment: usize,

    /// If true no alpha channel would be used for encoding,
    /// this reduces then the capacity by one bit per pixel
    pub skip_alpha_channel: bool,

    pub terminator: Terminator,

    pub format: PayloadFormat,
}

impl Default for LsbCodecOptions {
    fn default() -> Self {
        Self {
            color_channel_step_increment: 1,
            skip_alpha_channel: true,
            terminator: Terminator::Zeros,
            format: PayloadFormat::Terminated,
        }
    }
}

impl LsbCodecOptions {
    /// A step of `0` is treated as `1`
    pub fn get_color_channel_step_increment(&self) -> usize {
        self.color_channel_step_increment.max(1)
    }
}

/// Options for embedding into the DCT coefficients of grayscale images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DctCodecOptions {
    pub terminator: Terminator,

    pub format: PayloadFormat,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            terminator: Terminator::Ones,
            format: PayloadFormat::Terminated,
        }
    }
}
