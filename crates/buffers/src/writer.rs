//! Binary writer sized once to a known output length.

/// A big-endian binary writer backed by a `Vec<u8>`.
///
/// Encoders that can compute their exact output size create the writer with
/// [`Writer::with_capacity`] and never trigger a reallocation. Writing past
/// the initial capacity still works; the vector simply grows.
///
/// # Example
///
/// ```
/// use event_pack_buffers::Writer;
///
/// let mut writer = Writer::with_capacity(3);
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// assert_eq!(writer.flush(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer with no capacity reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer that can hold `capacity` bytes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    /// Returns `true` if nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 16-bit integer (big-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes an unsigned 32-bit integer (big-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.uint8.extend_from_slice(s.as_bytes());
        s.len()
    }

    /// Consumes the writer and returns the written bytes.
    pub fn flush(self) -> Vec<u8> {
        self.uint8
    }
}
