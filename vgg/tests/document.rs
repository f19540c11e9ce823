use vgg::{blue, green, red, rect, DataField, DocumentState, SvgWriter};

const CAPACITY: usize = 4096;

const EXPECTED: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100.000" height="100.000">
  <rect x="0.000" y="0.000" width="50.000" height="50.000" id="1" fill="#FF0000" />
  <rect x="0.000" y="50.000" width="50.000" height="50.000" id="2" fill="#00FF00" />
  <rect x="50.000" y="0.000" width="50.000" height="50.000" id="3" fill="#0000FF" />
  <rect x="50.000" y="50.000" width="50.000" height="50.000" id="4" fill="#FF0000" data-weight="20.0" data-num_lines_of_code="165" />
</svg>
"##;

fn four_squares(w: &mut SvgWriter) {
    let data_fields = [
        DataField::new("weight", "20.0"),
        DataField::new("num_lines_of_code", "165"),
    ];

    w.start(100.0, 100.0);
    w.add_rect(1, 0.0, 0.0, 50.0, 50.0, red(), &[]);
    w.add_rect(2, 0.0, 50.0, 50.0, 50.0, green(), &[]);
    w.add_rect(3, 50.0, 0.0, 50.0, 50.0, blue(), &[]);
    w.add_rect(4, 50.0, 50.0, 50.0, 50.0, red(), &data_fields);
    w.end();
}

#[test]
fn four_squares_document() {
    let mut buffer = [0u8; CAPACITY];
    let mut w = SvgWriter::new(&mut buffer);
    four_squares(&mut w);

    assert_eq!(w.state(), DocumentState::Closed);
    assert!(!w.is_truncated());
    assert!(w.len() <= CAPACITY);

    let svg = std::str::from_utf8(w.finish()).unwrap();
    assert_eq!(svg, EXPECTED);

    assert_eq!(svg.matches("<rect ").count(), 4);
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>\n"));

    let last = svg.lines().nth(4).unwrap();
    let weight = last.find(r#"data-weight="20.0""#).unwrap();
    let lines = last.find(r#"data-num_lines_of_code="165""#).unwrap();
    assert!(weight < lines);
}

#[test]
fn builder_and_add_rect_agree() {
    let fields = [DataField::new("kind", "tile")];

    let mut a = [0u8; 512];
    let mut wa = SvgWriter::new(&mut a);
    wa.add_rect(9, 1.0, 2.0, 3.0, 4.0, green(), &fields);

    let mut b = [0u8; 512];
    let mut wb = SvgWriter::new(&mut b);
    wb.add_element(&rect(1.0, 2.0, 3.0, 4.0).id(9).fill(green()).data(&fields));

    assert_eq!(wa.as_bytes(), wb.as_bytes());
}

#[test]
fn truncated_output_is_a_prefix() {
    let mut full = [0u8; CAPACITY];
    let mut w = SvgWriter::new(&mut full);
    four_squares(&mut w);
    let expected = w.finish();

    for capacity in [0, 1, 7, 80, 81, 200, expected.len() - 1, expected.len()] {
        let mut buffer = [0u8; CAPACITY];
        let mut w = SvgWriter::with_capacity(&mut buffer, capacity);
        four_squares(&mut w);

        assert_eq!(w.len(), capacity);
        assert_eq!(w.as_bytes(), &expected[..capacity]);
        assert_eq!(w.is_truncated(), capacity < expected.len());
    }
}

#[test]
fn larger_buffer_keeps_the_same_content() {
    let mut buffer = [0u8; 2 * CAPACITY];
    let mut w = SvgWriter::new(&mut buffer);
    four_squares(&mut w);

    assert_eq!(w.len(), EXPECTED.len());
    assert_eq!(w.remaining(), 2 * CAPACITY - EXPECTED.len());
    assert_eq!(w.as_bytes(), EXPECTED.as_bytes());
}

#[test]
fn numeric_data_fields() {
    let mut count = [0u8; vgg::numeric::INT_BUF_LEN];
    let mut total = [0u8; vgg::numeric::LONG_BUF_LEN];
    let mut ratio = [0u8; vgg::numeric::float_buf_len(1, 4)];
    let fields = [
        DataField::int("count", -3, &mut count),
        DataField::unsigned_long("total", 10_000_000_000, &mut total),
        DataField::float("ratio", 0.5, 4, &mut ratio),
    ];

    let mut buffer = [0u8; 512];
    let mut w = SvgWriter::new(&mut buffer);
    w.add_element(&rect(0.0, 0.0, 1.0, 1.0).data(&fields));

    let svg = std::str::from_utf8(w.as_bytes()).unwrap();
    assert!(svg.contains(
        r##"fill="#000000" data-count="-3" data-total="10000000000" data-ratio="0.5000" />"##
    ));
}
