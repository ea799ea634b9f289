//! Thin function wrappers over [`crate::api`], one per CLI subcommand.

mod capacity;
mod hide;
mod keygen;
mod unveil;
mod unveil_raw;

pub use capacity::{capacity, CapacityReport};
pub use hide::hide;
pub use keygen::generate_key;
pub use unveil::unveil;
pub use unveil_raw::unveil_raw;
