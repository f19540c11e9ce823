use core::fmt;

use log::trace;

use crate::color::Color;
use crate::document::DocumentState;
use crate::numeric::split_fixed;

/// Number of fractional digits written by [`SvgWriter::put_double`].
const DOUBLE_PRECISION: u32 = 3;

/// Writes text into a fixed size, caller owned buffer.
///
/// Once the capacity is reached every further byte is silently dropped: the
/// output is truncated but the writer never fails and never writes past the
/// end of its buffer. [`SvgWriter::is_truncated`] tells whether that happened.
///
/// ```
/// let mut buffer = [0u8; 8];
/// let mut w = vgg::SvgWriter::new(&mut buffer);
/// w.puts("width=");
/// w.put_double(1.5);
///
/// assert_eq!(w.as_bytes(), b"width=1.");
/// assert!(w.is_truncated());
/// ```
pub struct SvgWriter<'a> {
    buffer: &'a mut [u8],
    capacity: usize,
    length: usize,
    truncated: bool,
    pub(crate) state: DocumentState,
}

impl<'a> SvgWriter<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        let capacity = buffer.len();
        SvgWriter::with_capacity(buffer, capacity)
    }

    /// Only uses the first `capacity` bytes of `buffer`.
    ///
    /// The capacity is clamped to the length of the buffer.
    pub fn with_capacity(buffer: &'a mut [u8], capacity: usize) -> Self {
        let capacity = capacity.min(buffer.len());
        SvgWriter {
            buffer,
            capacity,
            length: 0,
            truncated: false,
            state: DocumentState::Unopened,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.length
    }

    pub fn is_full(&self) -> bool {
        self.length == self.capacity
    }

    /// Returns true if some output was dropped because the buffer was full.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    /// Gives back the written part of the buffer.
    pub fn finish(self) -> &'a [u8] {
        let SvgWriter { buffer, length, .. } = self;
        &buffer[..length]
    }

    /// Rewinds to the start of the buffer to write a new document.
    pub fn reset(&mut self) {
        self.length = 0;
        self.truncated = false;
        self.state = DocumentState::Unopened;
    }

    /// Appends a single byte.
    #[inline]
    pub fn putc(&mut self, byte: u8) {
        if self.length < self.capacity {
            self.buffer[self.length] = byte;
            self.length += 1;
        } else {
            self.overflow();
        }
    }

    /// Appends as much of `text` as fits.
    pub fn puts(&mut self, text: &str) {
        self.put_bytes(text.as_bytes());
    }

    /// Appends as much of `bytes` as fits.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        let n = bytes.len().min(self.remaining());
        self.buffer[self.length..self.length + n].copy_from_slice(&bytes[..n]);
        self.length += n;

        if n < bytes.len() {
            self.overflow();
        }
    }

    /// Appends the decimal representation of `value`.
    ///
    /// Digits go through [`SvgWriter::putc`] one at a time, so a number that
    /// doesn't fit is cut exactly at the capacity.
    pub fn put_uint(&mut self, mut value: u32) {
        if value == 0 {
            self.putc(b'0');
            return;
        }

        let mut digits = [0u8; 10];
        let mut i = digits.len();
        while value != 0 {
            i -= 1;
            digits[i] = b'0' + (value % 10) as u8;
            value /= 10;
        }

        for &digit in &digits[i..] {
            self.putc(digit);
        }
    }

    /// Appends `value` with exactly three fractional digits, rounding half up.
    ///
    /// The integer part saturates at `u32::MAX`.
    pub fn put_double(&mut self, value: f64) {
        let fixed = split_fixed(value, DOUBLE_PRECISION);

        if fixed.negative {
            self.putc(b'-');
        }
        self.put_uint(u32::try_from(fixed.int_part).unwrap_or(u32::MAX));
        self.putc(b'.');

        let frac = fixed.frac_part as u32;
        if frac < 100 {
            self.putc(b'0');
        }
        if frac < 10 {
            self.putc(b'0');
        }
        self.put_uint(frac);
    }

    /// Appends the color as `RRGGBB` (no `#`).
    pub fn put_color(&mut self, color: Color) {
        for digit in color.to_hex() {
            self.putc(digit);
        }
    }

    fn overflow(&mut self) {
        if !self.truncated {
            trace!("svg output truncated at {} bytes", self.capacity);
            self.truncated = true;
        }
    }
}

/// Formatting into the writer never fails, overflowing output is dropped.
impl<'a> fmt::Write for SvgWriter<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.puts(s);
        Ok(())
    }
}

impl<'a> fmt::Debug for SvgWriter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SvgWriter")
            .field("capacity", &self.capacity)
            .field("length", &self.length)
            .field("truncated", &self.truncated)
            .field("state", &self.state)
            .finish()
    }
}
