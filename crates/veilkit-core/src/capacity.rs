//! Accept or reject a payload before any carrier unit is touched.

use log::debug;

use crate::bitstream::{encoded_bit_len, PayloadFormat, MAX_HEADER_PAYLOAD_LEN};
use crate::error::VeilError;
use crate::result::Result;

/// Fails with [`VeilError::InsufficientCapacity`] when `bit_count` bits do not fit into
/// `carrier_unit_count` units, one bit per unit.
pub fn check(bit_count: usize, carrier_unit_count: usize) -> Result<()> {
    debug!("capacity check: {bit_count} bits into {carrier_unit_count} units");
    if bit_count > carrier_unit_count {
        return Err(VeilError::InsufficientCapacity {
            required: bit_count,
            available: carrier_unit_count,
        });
    }

    Ok(())
}

/// Like [`check`] for a payload of `payload_len` bytes framed in `format`.
///
/// The length header format also refuses payloads its `u32` header cannot describe.
pub fn check_payload(payload_len: usize, format: PayloadFormat, carrier_unit_count: usize) -> Result<()> {
    if format == PayloadFormat::LengthHeader && payload_len > MAX_HEADER_PAYLOAD_LEN {
        return Err(VeilError::PayloadTooLarge {
            len: payload_len,
            max: MAX_HEADER_PAYLOAD_LEN,
        });
    }

    check(encoded_bit_len(payload_len, format), carrier_unit_count)
}

/// Largest payload in bytes that still fits into `carrier_unit_count` units.
pub fn max_payload_len(carrier_unit_count: usize, format: PayloadFormat) -> usize {
    (carrier_unit_count / 8).saturating_sub(format.overhead())
}
