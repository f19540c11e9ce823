use crate::color::{black, Color};
use crate::numeric::{ftoa, itoa, ltoa, ultoa};

/// An extra `data-<key>="<value>"` attribute attached to a shape.
///
/// Both strings are borrowed from the caller and are written verbatim, without
/// any XML escaping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct DataField<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> DataField<'a> {
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        DataField { key, value }
    }

    /// Formats `value` into `buffer` (at least [`INT_BUF_LEN`](crate::numeric::INT_BUF_LEN) bytes).
    pub fn int(key: &'a str, value: i32, buffer: &'a mut [u8]) -> Self {
        DataField { key, value: itoa(value, buffer) }
    }

    /// Formats `value` into `buffer` (at least [`LONG_BUF_LEN`](crate::numeric::LONG_BUF_LEN) bytes).
    pub fn long(key: &'a str, value: i64, buffer: &'a mut [u8]) -> Self {
        DataField { key, value: ltoa(value, buffer) }
    }

    /// Formats `value` into `buffer` (at least [`LONG_BUF_LEN`](crate::numeric::LONG_BUF_LEN) bytes).
    pub fn unsigned_long(key: &'a str, value: u64, buffer: &'a mut [u8]) -> Self {
        DataField { key, value: ultoa(value, buffer) }
    }

    pub fn float(key: &'a str, value: f32, precision: i32, buffer: &'a mut [u8]) -> Self {
        DataField { key, value: ftoa(value as f64, precision, buffer) }
    }

    pub fn double(key: &'a str, value: f64, precision: i32, buffer: &'a mut [u8]) -> Self {
        DataField { key, value: ftoa(value, precision, buffer) }
    }

    /// Fields with an empty key or value don't produce an attribute.
    pub fn is_rendered(&self) -> bool {
        !self.key.is_empty() && !self.value.is_empty()
    }
}

/// The attributes every shape carries, whatever its geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Header<'a> {
    pub id: u32,
    pub fill: Color,
    pub data_fields: &'a [DataField<'a>],
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The geometry of a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Rect(Rect),
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Shape<'a> {
    pub header: Header<'a>,
    pub kind: ShapeKind,
}

/// A black rectangle with id 0 and no data fields.
pub fn rect<'a>(x: f64, y: f64, width: f64, height: f64) -> Shape<'a> {
    Shape {
        header: Header {
            id: 0,
            fill: black(),
            data_fields: &[],
        },
        kind: ShapeKind::Rect(Rect { x, y, width, height }),
    }
}

impl<'a> Shape<'a> {
    pub fn id(mut self, id: u32) -> Self {
        self.header.id = id;
        self
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.header.fill = fill;
        self
    }

    pub fn data(mut self, data_fields: &'a [DataField<'a>]) -> Self {
        self.header.data_fields = data_fields;
        self
    }

    pub fn offset(mut self, dx: f64, dy: f64) -> Self {
        match &mut self.kind {
            ShapeKind::Rect(rect) => {
                rect.x += dx;
                rect.y += dy;
            }
        }
        self
    }

    pub fn inflate(mut self, dx: f64, dy: f64) -> Self {
        match &mut self.kind {
            ShapeKind::Rect(rect) => {
                rect.x -= dx;
                rect.y -= dy;
                rect.width += 2.0 * dx;
                rect.height += 2.0 * dy;
            }
        }
        self
    }

    /// The SVG element name.
    pub fn tag(&self) -> &'static str {
        match self.kind {
            ShapeKind::Rect(_) => "rect",
        }
    }
}
