use std::io::{Cursor, ErrorKind, Result, Write};

use bitstream_io::{BigEndian, BitRead, BitReader};

use crate::media::{HideBit, MediaPrimitiveMut};

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm<T> {
    /// hides one bit inside of the carrier item
    fn encode(&self, carrier: T, bit: bool) -> crate::Result<()>;
}

/// default 1 bit hiding strategy, the least significant bit of each carrier item
#[derive(Debug, Default)]
pub struct OneBitHide;

impl<'a> HideAlgorithm<MediaPrimitiveMut<'a>> for OneBitHide {
    fn encode(&self, carrier: MediaPrimitiveMut<'a>, bit: bool) -> crate::Result<()> {
        carrier.hide_bit(bit)
    }
}

/// generic LSB encoder, one carrier item per bit, bytes are consumed MSB first
///
/// Whole bytes only: when the carrier runs dry in the middle of a byte that byte is not
/// counted as written. Callers validate the capacity up front.
pub struct UniversalEncoder<I, A> {
    pub carrier: I,
    pub algorithm: A,
}

impl<I, A> UniversalEncoder<I, A> {
    pub fn new(carrier: I, algorithm: A) -> Self {
        UniversalEncoder { carrier, algorithm }
    }
}

impl<'a, I, A> UniversalEncoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm<MediaPrimitiveMut<'a>>,
{
    /// Hides the given bits one by one, returns how many bits found a carrier item.
    pub fn hide_bits<B: IntoIterator<Item = bool>>(&mut self, bits: B) -> crate::Result<usize> {
        let mut written = 0;
        for (bit, item) in bits.into_iter().zip(self.carrier.by_ref()) {
            self.algorithm.encode(item, bit)?;
            written += 1;
        }

        Ok(written)
    }
}

impl<'a, I, A> Write for UniversalEncoder<I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm<MediaPrimitiveMut<'a>>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);
        let bits = (0..buf.len() << 3).map_while(|_| bit_iter.read_bit().ok());

        let bits_written = self
            .hide_bits(bits)
            .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?;

        let bytes_written = bits_written >> 3;
        if bytes_written == 0 && !buf.is_empty() {
            return Err(ErrorKind::WriteZero.into());
        }

        Ok(bytes_written)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
