//! Vector graphics generation into a fixed size buffer.
//!
//! `vgg` writes SVG markup into a byte buffer owned by the caller. It does not
//! allocate, does not do any I/O and does not depend on `std`, which makes it
//! usable from very constrained environments. Persisting the output is left to
//! the caller (see the `vgg_platform_write` crate for a simple option).
//!
//! # Truncation
//!
//! The writer never fails. When the buffer is full the remaining output is
//! dropped, which can leave a truncated (invalid) document behind. Size the
//! buffer for the document you want to write and check
//! [`SvgWriter::is_truncated`] if in doubt.
//!
//! # Escaping
//!
//! Strings (document id, data field keys and values) are written verbatim. They
//! must already be safe to embed in an XML attribute.
//!
//! # Example
//!
//! ```rust
//! use vgg::*;
//!
//! let mut buffer = [0u8; 4096];
//! let mut w = SvgWriter::new(&mut buffer);
//!
//! // Pick the fill color from a weight, like a heat map would.
//! let cold = rgb(144, 224, 239);
//! let hot = rgb(255, 85, 0);
//!
//! let mut weight = [0u8; 16];
//! let fields = [DataField::double("weight", 0.75, 2, &mut weight)];
//!
//! w.start(100.0, 100.0);
//! w.add_element(
//!     &rect(0.0, 0.0, 50.0, 50.0)
//!         .id(1)
//!         .fill(Color::map_linear(0.75, 0.0, 1.0, cold, hot))
//!         .data(&fields)
//! );
//! w.end();
//!
//! assert!(!w.is_truncated());
//! let svg = std::str::from_utf8(w.as_bytes()).unwrap();
//! assert!(svg.contains(r#"data-weight="0.75""#));
//! ```

#![no_std]

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

mod color;
mod document;
pub mod numeric;
mod shape;
mod writer;

pub use crate::color::*;
pub use crate::document::DocumentState;
pub use crate::shape::*;
pub use crate::writer::SvgWriter;
