pub mod capacity;
pub mod crypt;
pub mod hide;
pub mod keygen;
pub mod seed;
pub mod unveil;
pub mod unveil_raw;
