//! # Veilkit Core API
//!
//! Hides a payload inside an image or audio carrier and gets it back from the carrier alone.
//! Two engines are available, selected by [`CodecOptions`]:
//! - LSB: one bit in the least significant bit of every image channel value or audio sample
//! - DCT: one bit in the parity of coefficient (4, 3) of every 8×8 block of a grayscale image
//!
//! Besides hiding, [`keygen`] derives reproducible keys from the content of a carrier and a seed.
//!
//! # Usage Examples
//!
//! ## Hide and unveil data in memory
//!
//! ```rust
//! use veilkit_core::{CodecOptions, Media};
//!
//! let image = image::RgbaImage::from_pixel(16, 16, image::Rgba([100, 150, 200, 255]));
//! let mut media = Media::from_image(image);
//!
//! media.hide_data(b"ping!!!", &CodecOptions::default())?;
//!
//! assert_eq!(media.unveil_data(&CodecOptions::default())?, b"ping!!!");
//! # Ok::<(), veilkit_core::VeilError>(())
//! ```
//!
//! ## A payload that does not fit
//!
//! ```rust
//! use veilkit_core::{CodecOptions, Media, Samples, VeilError, WavSpec};
//!
//! let spec = WavSpec {
//!     channels: 1,
//!     sample_rate: 8_000,
//!     bits_per_sample: 16,
//!     sample_format: veilkit_core::SampleFormat::Int,
//! };
//! let mut media = Media::from_audio((spec, Samples::Int(vec![0; 60])));
//!
//! match media.hide_data(b"ping!!!", &CodecOptions::default()) {
//!     Err(VeilError::InsufficientCapacity { required: 64, available: 60 }) => {}
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Hide an encrypted message in a file
//!
//! ```rust,no_run
//! veilkit_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_key("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
//!     .with_media("carrier.png")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod backend;
pub mod bitstream;
pub mod capacity;
pub mod commands;
pub mod dct;
pub mod error;
pub mod keygen;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::backend::{backend_for, DctBackend, LsbBackend, StegoBackend};
pub use crate::bitstream::{PayloadFormat, Terminator};
pub use crate::error::VeilError;
pub use crate::media::{
    CodecOptions, DctCodecOptions, LsbCodecOptions, Media, Persist, SampleFormat, Samples, WavSpec,
};
pub use crate::result::Result;
