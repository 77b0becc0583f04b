//! Encode geometry and style entities into trace text.
//!
//! Each dumper implements `Display`, the recorder writes them straight into its output,
//! `encode_*` functions return the same text as `String`.

use crate::graphics::{path::Path, trans::matrix_entries, ColorSpace, ColorSpec, StrokeStyle};
use euclid::Transform2D;
use log::{debug, warn};
use quick_xml::escape::escape;
use std::fmt::{Display, Formatter, Result as FmtResult, Write as _};

/// Record separator, every element ends with it.
pub(crate) const LINE_END: &str = "\r\n";

/// Scalar in fixed point notation with 6 decimals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fixed(pub f32);

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:.6}", self.0)
    }
}

/// Items separated by one space.
pub(crate) struct Joined<I>(pub I);

impl<I> Display for Joined<I>
where
    I: Iterator + Clone,
    I::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, item) in self.0.clone().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

fn scalars(values: &[f32]) -> Joined<impl Iterator<Item = Fixed> + Clone + '_> {
    Joined(values.iter().map(|v| Fixed(*v)))
}

/// Return at most `max_chars` leading chars of `s`.
pub(crate) fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            debug!("truncate name {s:?} to {max_chars} chars");
            &s[..idx]
        }
        None => s,
    }
}

/// Return true if `c` may appear literally in an xml 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Name attribute value: truncated, then xml escaped.
///
/// Tab and line breaks are written as character references, so a record never spans
/// lines. Chars xml does not allow are replaced by U+FFFD.
pub(crate) struct Name<'a>(pub &'a str, pub usize);

impl Display for Name<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for c in escape(truncate(self.0, self.1)).chars() {
            match c {
                '\t' => f.write_str("&#9;")?,
                '\n' => f.write_str("&#10;")?,
                '\r' => f.write_str("&#13;")?,
                c if is_xml_char(c) => f.write_char(c)?,
                c => {
                    debug!("replace char {c:?} not allowed in xml");
                    f.write_char(char::REPLACEMENT_CHARACTER)?;
                }
            }
        }
        Ok(())
    }
}

/// `ctm="a b c d e f"` attribute.
pub struct CtmAttr<'a, S, D>(pub &'a Transform2D<f32, S, D>);

impl<S, D> Display for CtmAttr<'_, S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ctm=\"{}\"", scalars(&matrix_entries(self.0)))
    }
}

/// `colorspace="NAME"` attribute of image headers.
pub struct ColorSpaceAttr<'a> {
    color_space: &'a ColorSpace,
    name_len: usize,
}

impl<'a> ColorSpaceAttr<'a> {
    pub fn new(color_space: &'a ColorSpace, name_len: usize) -> Self {
        Self {
            color_space,
            name_len,
        }
    }
}

impl Display for ColorSpaceAttr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "colorspace=\"{}\"",
            Name(self.color_space.name(), self.name_len)
        )
    }
}

/// `<color/>` element.
pub struct ColorDumper<'a> {
    color: &'a ColorSpec,
    name_len: usize,
}

impl<'a> ColorDumper<'a> {
    pub fn new(color: &'a ColorSpec, name_len: usize) -> Self {
        let n = color.color_space.n();
        if !color.values.is_empty() && color.values.len() < n {
            warn!(
                "color has {} values, color space {} needs {n}",
                color.values.len(),
                color.color_space.name()
            );
        }
        Self { color, name_len }
    }

    fn values(&self) -> &[f32] {
        let values = &self.color.values;
        &values[..values.len().min(self.color.color_space.n())]
    }
}

impl Display for ColorDumper<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "<color {}",
            ColorSpaceAttr::new(&self.color.color_space, self.name_len)
        )?;
        if !self.color.values.is_empty() {
            write!(f, " value=\"{}\"", scalars(self.values()))?;
        }
        write!(f, " alpha=\"{}\"/>{LINE_END}", Fixed(self.color.alpha))
    }
}

/// `<stroke_state/>` element.
pub struct StrokeDumper<'a>(pub &'a StrokeStyle);

impl Display for StrokeDumper<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = self.0;
        write!(
            f,
            "<stroke_state refs=\"{}\" start_cap=\"{}\" dash_cap=\"{}\" end_cap=\"{}\" linejoin=\"{}\"",
            s.refs, s.start_cap, s.dash_cap, s.end_cap, s.line_join
        )?;
        write!(
            f,
            " linewidth=\"{}\" miterlimit=\"{}\" dash_phase=\"{}\"",
            Fixed(s.line_width),
            Fixed(s.miter_limit),
            Fixed(s.dash_phase)
        )?;
        if !s.dash.is_empty() {
            write!(
                f,
                " dash_len=\"{}\" dash_list=\"{}\"",
                s.dash.len(),
                scalars(&s.dash)
            )?;
        }
        write!(f, "/>{LINE_END}")
    }
}

/// `<path>` block with cached points and raw buffers.
pub struct PathDumper<'a>(pub &'a Path);

impl Display for PathDumper<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let p = self.0;
        write!(
            f,
            "<path packed=\"{}\">{LINE_END}",
            if p.packed() { '1' } else { '0' }
        )?;
        let (begin, current) = (p.begin(), p.current());
        write!(
            f,
            "<begin x=\"{}\" y=\"{}\"/>{LINE_END}",
            Fixed(begin.x),
            Fixed(begin.y)
        )?;
        write!(
            f,
            "<current x=\"{}\" y=\"{}\"/>{LINE_END}",
            Fixed(current.x),
            Fixed(current.y)
        )?;

        let cmds = p.cmds();
        if !cmds.is_empty() {
            write!(
                f,
                "<cmds size=\"{}\" cap=\"{}\" cmd=\"{}\"/>{LINE_END}",
                cmds.len(),
                p.cmd_capacity(),
                Joined(cmds.iter().map(|c| c.opcode()))
            )?;
        }

        let coords = p.coords();
        if !coords.is_empty() {
            write!(
                f,
                "<coords size=\"{}\" cap=\"{}\" coord=\"{}\"/>{LINE_END}",
                coords.len(),
                p.coord_capacity(),
                scalars(coords)
            )?;
        }
        write!(f, "</path>{LINE_END}")
    }
}

pub fn encode_path(path: &Path) -> String {
    PathDumper(path).to_string()
}

/// Encode `<color/>` element, empty string if no color.
pub fn encode_color(color: Option<&ColorSpec>, name_len: usize) -> String {
    color
        .map(|c| ColorDumper::new(c, name_len).to_string())
        .unwrap_or_default()
}

/// Encode `<stroke_state/>` element, empty string if no stroke style.
pub fn encode_stroke(stroke: Option<&StrokeStyle>) -> String {
    stroke
        .map(|s| StrokeDumper(s).to_string())
        .unwrap_or_default()
}
