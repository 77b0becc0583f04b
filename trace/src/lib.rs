#![deny(clippy::dbg_macro)]
//! Record the draw events issued while a page is interpreted into an XML trace.
//!
//! The interpreter opens a [`TraceDocument`] for a page, calls one `begin_*` / `end_*`
//! pair of [`DrawEventSink`] per draw operation (with [`DrawEventSink::dump_char`] records
//! inside text runs), then closes the document.
mod document;
mod encode;
mod error;
pub mod graphics;
mod image;
mod recorder;
mod text;

pub use document::{TraceDocument, TraceOptions, TraceOptionsBuilder};
pub use encode::{
    encode_color, encode_path, encode_stroke, ColorDumper, ColorSpaceAttr, CtmAttr, PathDumper,
    StrokeDumper,
};
pub use error::{OpenError, TraceError};
pub use graphics::{
    path::{Path, PathBuilder, PathCommand},
    ColorSpace, ColorSpec, FillRule, LineCapStyle, LineJoinStyle, Point, StrokeStyle,
};
pub use image::{ImageDescriptor, Pixmap};
pub use recorder::{DrawEventSink, EventKind};
pub use text::{GlyphPlacement, TextRun};
