//! Builder style entry points, one module per operation.

pub mod hide;
pub mod keygen;
pub mod unveil;
pub mod unveil_raw;

mod shared;

pub(crate) use shared::write_output;
pub use shared::KeyMaterial;
