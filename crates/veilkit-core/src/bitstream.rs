//! Payload bytes to an ordered bit sequence and back.
//!
//! Every byte is emitted most significant bit first and the sequence is closed by one
//! 8 bit terminator byte. The terminated format cannot carry payloads that contain the
//! terminator byte themselves, the decoder stops at the first occurrence. Binary payloads
//! (for example ciphertext) use [`PayloadFormat::LengthHeader`] instead:
//!
//!   [ u32 length, big endian | payload | terminator ]

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::ByteOrder;

use crate::error::VeilError;
use crate::result::Result;

pub const TERMINATOR_BITS: usize = 8;
pub const LENGTH_HEADER_LEN: usize = 4;

/// The sentinel byte closing a bitstream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `0x00`, used by the LSB engine
    #[default]
    Zeros,
    /// `0xFF`, used by the DCT engine
    Ones,
}

impl Terminator {
    pub fn byte(self) -> u8 {
        match self {
            Terminator::Zeros => 0x00,
            Terminator::Ones => 0xff,
        }
    }
}

/// Framing of the payload inside the bitstream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// `payload || terminator`
    #[default]
    Terminated,
    /// `u32 length || payload || terminator`, safe for payloads containing the terminator byte
    LengthHeader,
}

impl PayloadFormat {
    /// Bytes added around the payload
    pub fn overhead(self) -> usize {
        match self {
            PayloadFormat::Terminated => 1,
            PayloadFormat::LengthHeader => LENGTH_HEADER_LEN + 1,
        }
    }
}

/// Number of bits [`encode_with_format`] produces for a payload of `payload_len` bytes.
pub fn encoded_bit_len(payload_len: usize, format: PayloadFormat) -> usize {
    payload_len.saturating_add(format.overhead()).saturating_mul(8)
}

/// Largest payload the `u32` length header can describe
pub const MAX_HEADER_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Big endian `u32` length header, [`VeilError::PayloadTooLarge`] past [`MAX_HEADER_PAYLOAD_LEN`]
pub fn length_header(payload_len: usize) -> Result<[u8; LENGTH_HEADER_LEN]> {
    let len = u32::try_from(payload_len).map_err(|_| VeilError::PayloadTooLarge {
        len: payload_len,
        max: MAX_HEADER_PAYLOAD_LEN,
    })?;
    let mut header = [0u8; LENGTH_HEADER_LEN];
    byteorder::BigEndian::write_u32(&mut header, len);

    Ok(header)
}

/// Frames the payload into the bytes that get hidden.
pub fn frame(payload: &[u8], terminator: Terminator, format: PayloadFormat) -> Result<Vec<u8>> {
    let mut framed = Vec::with_capacity(payload.len() + format.overhead());
    if format == PayloadFormat::LengthHeader {
        framed.extend_from_slice(&length_header(payload.len())?);
    }
    framed.extend_from_slice(payload);
    framed.push(terminator.byte());

    Ok(framed)
}

fn to_bits(framed: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(Cursor::new(framed), BigEndian);

    (0..framed.len() * 8)
        .map_while(|_| reader.read_bit().ok())
        .collect()
}

/// `payload || terminator` as bits, MSB first.
pub fn encode(payload: &[u8], terminator: Terminator) -> Vec<bool> {
    let mut framed = Vec::with_capacity(payload.len() + 1);
    framed.extend_from_slice(payload);
    framed.push(terminator.byte());

    to_bits(&framed)
}

pub fn encode_with_format(payload: &[u8], terminator: Terminator, format: PayloadFormat) -> Result<Vec<bool>> {
    Ok(to_bits(&frame(payload, terminator, format)?))
}

/// Pulls bits from `bits` until the payload is complete.
///
/// Bits after the terminator are never requested. Running out of bits first yields
/// [`VeilError::CorruptOrMissingPayload`].
pub fn decode<I>(bits: I, terminator: Terminator) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = bool>,
{
    decode_with_format(bits, terminator, PayloadFormat::Terminated)
}

pub fn decode_with_format<I>(bits: I, terminator: Terminator, format: PayloadFormat) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = bool>,
{
    let mut reader = BitstreamReader::new(terminator, format);
    for bit in bits {
        if reader.push(bit)? {
            break;
        }
    }

    reader.finish()
}

/// Packs bits MSB first into whole bytes, a trailing partial byte is dropped.
pub fn pack_bits<I>(bits: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = bool>,
{
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);
    for bit in bits {
        writer.write_bit(bit)?;
    }

    Ok(writer.into_writer())
}

/// Push style decoder, fed one bit at a time by the embedding engines.
#[derive(Debug)]
pub struct BitstreamReader {
    terminator: Terminator,
    format: PayloadFormat,
    current: u8,
    filled: usize,
    header: Vec<u8>,
    expected_len: Option<usize>,
    payload: Vec<u8>,
    complete: bool,
}

impl BitstreamReader {
    pub fn new(terminator: Terminator, format: PayloadFormat) -> Self {
        Self {
            terminator,
            format,
            current: 0,
            filled: 0,
            header: Vec::with_capacity(LENGTH_HEADER_LEN),
            expected_len: None,
            payload: Vec::new(),
            complete: false,
        }
    }

    /// Feeds one bit, returns `true` once the terminator has been read.
    pub fn push(&mut self, bit: bool) -> Result<bool> {
        if self.complete {
            return Ok(true);
        }

        self.current = (self.current << 1) | u8::from(bit);
        self.filled += 1;
        if self.filled < 8 {
            return Ok(false);
        }

        let byte = self.current;
        self.current = 0;
        self.filled = 0;
        self.accept(byte)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The payload, if the terminator was seen
    pub fn finish(self) -> Result<Vec<u8>> {
        if self.complete {
            Ok(self.payload)
        } else {
            Err(VeilError::CorruptOrMissingPayload)
        }
    }

    fn accept(&mut self, byte: u8) -> Result<bool> {
        match self.format {
            PayloadFormat::Terminated => {
                if byte == self.terminator.byte() {
                    self.complete = true;
                } else {
                    self.payload.push(byte);
                }
            }
            PayloadFormat::LengthHeader => match self.expected_len {
                None => {
                    self.header.push(byte);
                    if self.header.len() == LENGTH_HEADER_LEN {
                        self.expected_len = Some(byteorder::BigEndian::read_u32(&self.header) as usize);
                    }
                }
                Some(len) if self.payload.len() < len => self.payload.push(byte),
                Some(_) => {
                    if byte != self.terminator.byte() {
                        return Err(VeilError::CorruptOrMissingPayload);
                    }
                    self.complete = true;
                }
            },
        }

        Ok(self.complete)
    }
}
