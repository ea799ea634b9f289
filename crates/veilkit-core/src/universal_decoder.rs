use std::io::{Cursor, Read, Result};

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::media::MediaPrimitive;

/// generic unveil algorithm
pub trait UnveilAlgorithm<T> {
    fn decode(&self, carrier: T) -> bool;
}

/// default 1 bit unveil strategy, the least significant bit of each carrier item
#[derive(Debug, Default)]
pub struct OneBitUnveil;

impl UnveilAlgorithm<MediaPrimitive> for OneBitUnveil {
    #[inline(always)]
    fn decode(&self, carrier: MediaPrimitive) -> bool {
        match carrier {
            MediaPrimitive::ImageColorChannel(c) => (c & 0x1) > 0,
            MediaPrimitive::AudioSample(s) => (s & 0x1) > 0,
        }
    }
}

/// generic LSB decoder
///
/// Yields the hidden bits lazily as an `Iterator`, or packed into bytes MSB first via `Read`.
pub struct UniversalDecoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> UniversalDecoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        UniversalDecoder { input, algorithm }
    }
}

impl<I, A> Iterator for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm<MediaPrimitive>,
{
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.input.next().map(|item| self.algorithm.decode(item))
    }
}

impl<I, A> Read for UniversalDecoder<I, A>
where
    I: Iterator<Item = MediaPrimitive>,
    A: UnveilAlgorithm<MediaPrimitive>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per carrier item
        let items_to_take = buf.len() << 3;
        let mut bit_buffer = BitWriter::endian(Cursor::new(buf), BigEndian);

        let mut bit_read = 0;
        for bit in Iterator::take(Iterator::by_ref(self), items_to_take) {
            bit_buffer.write_bit(bit)?;
            bit_read += 1;
        }

        Ok(bit_read >> 3)
    }
}
