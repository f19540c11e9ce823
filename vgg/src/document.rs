use log::warn;

use crate::color::Color;
use crate::shape::{rect, DataField, Header, Shape, ShapeKind};
use crate::writer::SvgWriter;

const XMLNS: &str = "http://www.w3.org/2000/svg";

/// Where a writer is in the `start`, elements, `end` sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DocumentState {
    #[default]
    Unopened,
    Open,
    Closed,
}

/// Document assembly.
///
/// Calls made out of order are still written as requested (and logged), the
/// writer doesn't try to repair the document.
impl<'a> SvgWriter<'a> {
    /// Writes the root `<svg>` tag.
    pub fn start(&mut self, width: f64, height: f64) {
        self.open_root(None, width, height);
    }

    /// Writes the root `<svg>` tag with an `id` attribute.
    pub fn start_with_id(&mut self, id: &str, width: f64, height: f64) {
        self.open_root(Some(id), width, height);
    }

    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// Writes one self-closing element for `shape`.
    ///
    /// Geometry attributes come first, followed by `id`, `fill` and the data
    /// fields in order. Data fields with an empty key or value are skipped.
    pub fn add_element(&mut self, shape: &Shape) {
        if self.state != DocumentState::Open {
            warn!("adding a <{}> element to a {:?} svg document", shape.tag(), self.state);
        }

        self.puts("  <");
        self.puts(shape.tag());
        self.putc(b' ');

        match shape.kind {
            ShapeKind::Rect(rect) => {
                self.double_attribute("x", rect.x, " ");
                self.double_attribute("y", rect.y, " ");
                self.double_attribute("width", rect.width, " ");
                self.double_attribute("height", rect.height, " ");
            }
        }

        self.header_attributes(&shape.header);

        self.puts("/>\n");
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_rect(
        &mut self,
        id: u32,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        data_fields: &[DataField],
    ) {
        self.add_element(&rect(x, y, width, height).id(id).fill(fill).data(data_fields));
    }

    /// Writes the closing `</svg>` tag.
    pub fn end(&mut self) {
        if self.state != DocumentState::Open {
            warn!("closing a {:?} svg document", self.state);
        }

        self.puts("</svg>\n");
        self.state = DocumentState::Closed;
    }

    fn open_root(&mut self, id: Option<&str>, width: f64, height: f64) {
        if self.state != DocumentState::Unopened {
            warn!("starting an svg document that is already {:?}", self.state);
        }

        self.puts("<svg ");
        if let Some(id) = id {
            self.puts("id=\"");
            self.puts(id);
            self.puts("\" ");
        }
        self.puts("xmlns=\"");
        self.puts(XMLNS);
        self.puts("\" ");
        self.double_attribute("width", width, " ");
        self.double_attribute("height", height, ">\n");

        self.state = DocumentState::Open;
    }

    fn header_attributes(&mut self, header: &Header) {
        self.puts("id=\"");
        self.put_uint(header.id);
        self.puts("\" ");

        self.puts("fill=\"#");
        self.put_color(header.fill);
        self.puts("\" ");

        for field in header.data_fields.iter().filter(|field| field.is_rendered()) {
            self.puts("data-");
            self.puts(field.key);
            self.puts("=\"");
            self.puts(field.value);
            self.puts("\" ");
        }
    }

    /// `name="value"` followed by `separator`.
    fn double_attribute(&mut self, name: &str, value: f64, separator: &str) {
        self.puts(name);
        self.puts("=\"");
        self.put_double(value);
        self.putc(b'"');
        self.puts(separator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{blue, red};
    use crate::shape::rect;

    #[test]
    fn states() {
        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        assert_eq!(w.state(), DocumentState::Unopened);
        w.start(10.0, 20.0);
        assert_eq!(w.state(), DocumentState::Open);
        w.end();
        assert_eq!(w.state(), DocumentState::Closed);
        w.reset();
        assert_eq!(w.state(), DocumentState::Unopened);
    }

    #[test]
    fn root_tag() {
        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        w.start(100.0, 50.5);
        w.end();

        assert_eq!(
            w.as_bytes(),
            &b"<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100.000\" height=\"50.500\">\n</svg>\n"[..],
        );
    }

    #[test]
    fn root_tag_with_id() {
        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        w.start_with_id("map", 1.0, 2.0);

        assert_eq!(
            w.as_bytes(),
            &b"<svg id=\"map\" xmlns=\"http://www.w3.org/2000/svg\" width=\"1.000\" height=\"2.000\">\n"[..],
        );
    }

    #[test]
    fn rect_attributes() {
        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        w.start(10.0, 10.0);
        let start = w.len();
        w.add_element(&rect(1.5, -2.0, 3.0, 4.25).id(12).fill(blue()));

        assert_eq!(
            &w.as_bytes()[start..],
            &b"  <rect x=\"1.500\" y=\"-2.000\" width=\"3.000\" height=\"4.250\" id=\"12\" fill=\"#0000FF\" />\n"[..],
        );
    }

    #[test]
    fn data_fields_in_order_and_skipped_when_empty() {
        let fields = [
            DataField::new("b", "2"),
            DataField::new("", "ignored"),
            DataField::new("a", "1"),
            DataField::new("ignored", ""),
        ];

        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        w.start(10.0, 10.0);
        let start = w.len();
        w.add_rect(3, 0.0, 0.0, 1.0, 1.0, red(), &fields);

        assert_eq!(
            &w.as_bytes()[start..],
            &b"  <rect x=\"0.000\" y=\"0.000\" width=\"1.000\" height=\"1.000\" id=\"3\" fill=\"#FF0000\" data-b=\"2\" data-a=\"1\" />\n"[..],
        );
    }

    #[test]
    fn out_of_order_calls_are_still_written() {
        let mut buffer = [0u8; 256];
        let mut w = SvgWriter::new(&mut buffer);
        w.end();
        assert_eq!(w.as_bytes(), b"</svg>\n");
        assert_eq!(w.state(), DocumentState::Closed);
    }
}
