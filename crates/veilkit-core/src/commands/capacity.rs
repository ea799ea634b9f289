use std::path::Path;

use crate::capacity::max_payload_len;
use crate::media::{CodecOptions, Media};
use crate::result::Result;

/// What a carrier can hold with the given options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    /// Carrier units, one bit each
    pub units: usize,
    /// Largest payload in bytes, framing already subtracted
    pub max_payload_len: usize,
}

pub fn capacity(media: &Path, options: CodecOptions) -> Result<CapacityReport> {
    let units = Media::from_file_for(media, &options)?.capacity(&options)?;

    Ok(CapacityReport {
        units,
        max_payload_len: max_payload_len(units, options.format()),
    })
}
