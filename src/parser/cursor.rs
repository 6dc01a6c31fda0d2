//! Bounds-checked little-endian reader over an in-memory buffer.
//!
//! Every read either returns the requested bytes or a
//! [`TnefError::TruncatedInput`]; the position never moves backward and
//! never passes the end of the buffer.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, TnefError};

/// A forward-only cursor over a byte slice.
///
/// `base` is the absolute offset of `data[0]` inside the enclosing
/// container, so errors from nested payloads still point at the right
/// place in the file.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: u64,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Cursor over `data`, which starts at absolute offset `base`.
    pub fn with_base(data: &'a [u8], base: u64) -> Self {
        Self { data, pos: 0, base }
    }

    /// Position relative to the start of this cursor's slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute position inside the container.
    pub fn absolute_position(&self) -> u64 {
        self.base + self.pos as u64
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(self.truncated(len));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Skip the `(-len) & 3` padding bytes that follow a field of `len` bytes.
    pub fn skip_padding(&mut self, len: usize) -> Result<()> {
        self.skip(padding_for(len))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u128(&mut self) -> Result<u128> {
        Ok(LittleEndian::read_u128(self.take(16)?))
    }

    /// Read a 32-bit length field and convert it to `usize`.
    pub fn read_len(&mut self) -> Result<usize> {
        Ok(self.read_u32()? as usize)
    }

    fn truncated(&self, needed: usize) -> TnefError {
        TnefError::TruncatedInput {
            offset: self.absolute_position(),
            needed: needed as u64,
            available: self.remaining() as u64,
        }
    }
}

/// Number of bytes needed to round `len` up to a multiple of 4.
pub fn padding_for(len: usize) -> usize {
    len.wrapping_neg() & 3
}
