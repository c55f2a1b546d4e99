//! Bounds-checked binary reader with cursor tracking.

use std::str;

use crate::BufferError;

/// A binary reader over a borrowed byte slice.
///
/// Every read checks the number of remaining bytes before touching the slice,
/// so a forged length can only ever produce [`BufferError::EndOfBuffer`].
/// On error the cursor is left where it was.
///
/// # Example
///
/// ```
/// use event_pack_buffers::{BufferError, Reader};
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_u8(), Ok(0x01));
/// assert_eq!(reader.try_u16(), Ok(0x0203));
/// assert_eq!(reader.try_u8(), Err(BufferError::EndOfBuffer));
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader positioned at the start of `uint8`.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of bytes left after the cursor.
    #[inline]
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Returns `true` once the cursor has consumed the whole slice.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the unread tail without advancing the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }

    /// Checks that `n` more bytes are available from the current cursor.
    ///
    /// `n` is compared with the remaining length; `x + n` is only formed
    /// once it is known to fit.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if n > self.size() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Advances the cursor by `length` bytes.
    pub fn try_skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }

    /// Consumes `literal` if the unread bytes start with it.
    ///
    /// Returns [`BufferError::Mismatch`] when they hold something else and
    /// [`BufferError::EndOfBuffer`] when too few bytes remain. The cursor
    /// only moves on a match.
    pub fn try_expect(&mut self, literal: &[u8]) -> Result<(), BufferError> {
        self.check(literal.len())?;
        let end = self.x + literal.len();
        if &self.uint8[self.x..end] != literal {
            return Err(BufferError::Mismatch);
        }
        self.x = end;
        Ok(())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned 16-bit big-endian integer.
    #[inline]
    pub fn try_u16(&mut self) -> Result<u16, BufferError> {
        let bytes = self.try_array::<2>()?;
        Ok(u16::from_be_bytes(*bytes))
    }

    /// Reads an unsigned 32-bit big-endian integer.
    #[inline]
    pub fn try_u32(&mut self) -> Result<u32, BufferError> {
        let bytes = self.try_array::<4>()?;
        Ok(u32::from_be_bytes(*bytes))
    }

    /// Reads exactly `N` bytes as a fixed-size array reference.
    pub fn try_array<const N: usize>(&mut self) -> Result<&'a [u8; N], BufferError> {
        let bin = self.try_buf(N)?;
        // try_buf returned exactly N bytes.
        bin.try_into().map_err(|_| BufferError::EndOfBuffer)
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        Ok(bin)
    }

    /// Reads a UTF-8 string of `size` bytes.
    ///
    /// The cursor does not move when the bytes are out of range or not valid
    /// UTF-8.
    pub fn try_utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        self.check(size)?;
        let start = self.x;
        let s = str::from_utf8(&self.uint8[start..start + size]).map_err(|_| BufferError::InvalidUtf8)?;
        self.x = start + size;
        Ok(s)
    }
}
