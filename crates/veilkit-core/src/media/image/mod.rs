pub mod dct_codec;
pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;

pub use dct_codec::DctCodec;
pub use lsb_codec::LsbCodec;
