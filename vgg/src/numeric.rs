//! Number to text conversion into caller provided buffers.
//!
//! None of these functions allocate and none of them look at how much room is
//! left: the caller picks a buffer that is large enough for the value (see
//! [`INT_BUF_LEN`], [`LONG_BUF_LEN`] and [`float_buf_len`]). An undersized
//! buffer makes the slice indexing panic.
//!
//! Each function returns the written prefix of the buffer as a string slice.

/// Enough room for any `i32`, sign included.
pub const INT_BUF_LEN: usize = 12;

/// Enough room for any `i64` or `u64`, sign included.
pub const LONG_BUF_LEN: usize = 20;

/// Largest number of fractional digits [`ftoa`] will produce.
pub const MAX_PRECISION: i32 = 9;

/// Buffer size needed by [`ftoa`] for a value with `int_digits` digits before
/// the decimal point.
pub const fn float_buf_len(int_digits: usize, precision: usize) -> usize {
    int_digits + 1 + precision + 2
}

/// Writes `value` in decimal, with a leading `-` when negative.
pub fn itoa(value: i32, buffer: &mut [u8]) -> &str {
    write_signed(value < 0, value.unsigned_abs() as u64, buffer)
}

/// Writes `value` in decimal, with a leading `-` when negative.
pub fn ltoa(value: i64, buffer: &mut [u8]) -> &str {
    write_signed(value < 0, value.unsigned_abs(), buffer)
}

/// Writes `value` in decimal.
pub fn ultoa(value: u64, buffer: &mut [u8]) -> &str {
    write_signed(false, value, buffer)
}

/// Formats `value` with exactly `precision` fractional digits, rounding half
/// up.
///
/// `precision` is clamped to `0..=9`. With a precision of zero the value is
/// truncated and no decimal point is written.
pub fn ftoa(value: f64, precision: i32, buffer: &mut [u8]) -> &str {
    let precision = precision.clamp(0, MAX_PRECISION) as usize;
    let fixed = split_fixed(value, precision as u32);

    let mut len = 0;
    if fixed.negative {
        buffer[0] = b'-';
        len = 1;
    }
    len += write_digits(fixed.int_part, &mut buffer[len..]);

    if precision > 0 {
        buffer[len] = b'.';
        len += 1;

        let mut frac = fixed.frac_part;
        for slot in buffer[len..len + precision].iter_mut().rev() {
            *slot = b'0' + (frac % 10) as u8;
            frac /= 10;
        }
        len += precision;
    }

    ascii(&buffer[..len])
}

/// A decimal value split at the decimal point, with the fractional part scaled
/// to an integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Fixed {
    pub negative: bool,
    pub int_part: u64,
    pub frac_part: u64,
}

/// Splits `value` into sign, integer part and `round(fraction * 10^precision)`.
///
/// A fraction that rounds up to `10^precision` carries into the integer part.
/// Non finite values and fractions that can't be represented collapse to zero.
pub(crate) fn split_fixed(value: f64, precision: u32) -> Fixed {
    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    // Saturates for out of range values, NaN becomes 0.
    let mut int_part = magnitude as u64;

    if precision == 0 || !magnitude.is_finite() {
        return Fixed { negative, int_part, frac_part: 0 };
    }

    let multiplier = 10u64.pow(precision);
    let mut frac = magnitude - int_part as f64;
    if !(0.0..1.0).contains(&frac) {
        frac = 0.0;
    }

    // Decimal ties like 1.005 are stored slightly below the tie, nudge them
    // back up by a couple of ulps of the input before truncating.
    let slack = (2.0 * f64::EPSILON * magnitude.max(1.0) * multiplier as f64).min(0.25);
    let mut frac_part = (frac * multiplier as f64 + 0.5 + slack) as u64;
    if frac_part >= multiplier {
        int_part = int_part.saturating_add(1);
        frac_part -= multiplier;
    }

    Fixed { negative, int_part, frac_part }
}

fn write_signed(negative: bool, value: u64, buffer: &mut [u8]) -> &str {
    let mut len = 0;
    if negative {
        buffer[0] = b'-';
        len = 1;
    }
    len += write_digits(value, &mut buffer[len..]);

    ascii(&buffer[..len])
}

/// Writes the decimal digits of `value` and returns how many bytes were used.
fn write_digits(mut value: u64, buffer: &mut [u8]) -> usize {
    if value == 0 {
        buffer[0] = b'0';
        return 1;
    }

    let mut scratch = [0u8; LONG_BUF_LEN];
    let mut n = 0;
    while value != 0 {
        scratch[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    for (dst, src) in buffer[..n].iter_mut().zip(scratch[..n].iter().rev()) {
        *dst = *src;
    }

    n
}

fn ascii(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or_default()
}
