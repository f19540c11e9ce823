use core::fmt;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// An 8-bit per channel RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// The six uppercase hex digits `RRGGBB`, without the leading `#`.
    pub fn to_hex(self) -> [u8; 6] {
        let mut hex = [0; 6];
        for (i, channel) in [self.r, self.g, self.b].into_iter().enumerate() {
            hex[i * 2] = HEX_DIGITS[(channel >> 4) as usize];
            hex[i * 2 + 1] = HEX_DIGITS[(channel & 0xF) as usize];
        }
        hex
    }

    /// Linearly interpolates between `start` and `end` depending on where
    /// `value` sits in the `[min, max]` range.
    ///
    /// Values outside of the range are clamped to the nearest end. If the range
    /// is empty (`max <= min`) or `value` is NaN the start color is returned.
    /// Channels are truncated toward zero.
    pub fn map_linear(value: f64, min: f64, max: f64, start: Color, end: Color) -> Color {
        let mut t = 0.0;
        if max > min {
            t = (value - min) / (max - min);
            if t.is_nan() || t < 0.0 {
                t = 0.0;
            }
            if t > 1.0 {
                t = 1.0;
            }
        }

        let lerp = |a: u8, b: u8| (a as f64 + t * (b as f64 - a as f64)) as u8;

        rgb(
            lerp(start.r, end.r),
            lerp(start.g, end.g),
            lerp(start.b, end.b),
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hex = self.to_hex();
        f.write_str("#")?;
        f.write_str(core::str::from_utf8(&hex).map_err(|_| fmt::Error)?)
    }
}

pub fn rgb(r: u8, g: u8, b: u8) -> Color { Color { r, g, b } }
pub fn black() -> Color { rgb(0, 0, 0) }
pub fn white() -> Color { rgb(255, 255, 255) }
pub fn red() -> Color { rgb(255, 0, 0) }
pub fn green() -> Color { rgb(0, 255, 0) }
pub fn blue() -> Color { rgb(0, 0, 255) }
