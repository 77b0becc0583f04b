//! Draw event hooks of [`TraceDocument`].
//!
//! Each draw operation is bracketed by `begin_*` / `end_*`, the state passed to `begin_*`
//! is written immediately, nothing is kept after the call returns.
//!
//! A begin with nothing to draw (text run without glyphs, image without pixmap) is
//! skipped, and its end is skipped as well.

use crate::{
    document::TraceDocument,
    encode::{ColorDumper, ColorSpaceAttr, CtmAttr, Name, PathDumper, StrokeDumper, LINE_END},
    error::TraceError,
    graphics::{
        path::Path,
        trans::{ImageToDeviceSpace, UserToDeviceSpace},
        ColorSpec, FillRule, StrokeStyle,
    },
    image::{ImageDescriptor, Pixmap},
    text::{GlyphPlacement, TextRun},
};
use bitflags::bitflags;
use log::{trace, warn};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum EventKind {
    #[strum(serialize = "fill text")]
    FillText,
    #[strum(serialize = "stroke text")]
    StrokeText,
    #[strum(serialize = "fill image")]
    FillImage,
    #[strum(serialize = "stroke path")]
    StrokePath,
    #[strum(serialize = "fill path")]
    FillPath,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct EventKinds: u8 {
        const FILL_TEXT = 1;
        const STROKE_TEXT = 1 << 1;
        const FILL_IMAGE = 1 << 2;
        const STROKE_PATH = 1 << 3;
        const FILL_PATH = 1 << 4;
        const TEXT = Self::FILL_TEXT.bits() | Self::STROKE_TEXT.bits();
    }
}

impl From<EventKind> for EventKinds {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::FillText => Self::FILL_TEXT,
            EventKind::StrokeText => Self::STROKE_TEXT,
            EventKind::FillImage => Self::FILL_IMAGE,
            EventKind::StrokePath => Self::STROKE_PATH,
            EventKind::FillPath => Self::FILL_PATH,
        }
    }
}

/// Tracks begun events, to pair each end with its begin.
#[derive(Debug, Default)]
pub(crate) struct Protocol {
    open: EventKinds,
    skipped: EventKinds,
}

impl Protocol {
    fn check_begin(&self, kind: EventKind) -> Result<(), TraceError> {
        if (self.open | self.skipped).contains(kind.into()) {
            Err(TraceError::UnclosedBegin(kind))
        } else {
            Ok(())
        }
    }

    fn mark_open(&mut self, kind: EventKind) {
        self.open.insert(kind.into());
    }

    fn mark_skipped(&mut self, kind: EventKind) {
        self.skipped.insert(kind.into());
    }

    /// Return true if the end tag of `kind` should be written.
    fn end(&mut self, kind: EventKind, strict: bool) -> Result<bool, TraceError> {
        let flag: EventKinds = kind.into();
        if self.open.contains(flag) {
            self.open.remove(flag);
            Ok(true)
        } else if self.skipped.contains(flag) {
            self.skipped.remove(flag);
            Ok(false)
        } else if strict {
            Err(TraceError::UnmatchedEnd(kind))
        } else {
            warn!("end {kind} without begin, ignored");
            Ok(false)
        }
    }

    fn in_text(&self) -> bool {
        (self.open | self.skipped).intersects(EventKinds::TEXT)
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.open.is_empty() && self.skipped.is_empty()
    }

    /// Names of events begun but not ended.
    pub(crate) fn pending(&self) -> String {
        use strum::IntoEnumIterator;
        let pending = self.open | self.skipped;
        EventKind::iter()
            .filter(|k| pending.contains((*k).into()))
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Paint state nested in `<gstate>` of a graphics object.
enum PathPaint<'a> {
    Fill(FillRule),
    Stroke(Option<&'a StrokeStyle>),
}

impl<W: Write> TraceDocument<W> {
    fn begin_text(
        &mut self,
        kind: EventKind,
        text: &TextRun,
        stroke: Option<&StrokeStyle>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.protocol.check_begin(kind)?;
        if text.is_empty() {
            trace!("skip {kind} without glyphs");
            self.protocol.mark_skipped(kind);
            return Ok(());
        }

        // the header carries the run's own text matrix, `ctm` only goes to log
        trace!("begin {kind}, {} glyphs, ctm: {ctm:?}", text.len);
        let (font_name_len, cs_name_len) = (
            self.options().font_name_len(),
            self.options().colorspace_name_len(),
        );
        let out = self.out();
        write!(
            out,
            "<text_object cmd=\"{kind}\" size=\"{}\" {}>{LINE_END}",
            text.len,
            CtmAttr(&text.trm)
        )?;
        if let Some(font) = &text.font_name {
            write!(out, "<font name=\"{}\"/>{LINE_END}", Name(font, font_name_len))?;
        }
        if let Some(color) = color {
            write!(out, "{}", ColorDumper::new(color, cs_name_len))?;
        }
        if let Some(stroke) = stroke {
            write!(out, "{}", StrokeDumper(stroke))?;
        }
        self.protocol.mark_open(kind);
        Ok(())
    }

    fn begin_path(
        &mut self,
        kind: EventKind,
        path: Option<&Path>,
        paint: PathPaint<'_>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.protocol.check_begin(kind)?;
        trace!("begin {kind}");
        let cs_name_len = self.options().colorspace_name_len();
        let out = self.out();
        write!(
            out,
            "<graphics_object cmd=\"{kind}\" {}>{LINE_END}",
            CtmAttr(ctm)
        )?;

        write!(out, "<gstate>{LINE_END}")?;
        if let Some(color) = color {
            write!(out, "{}", ColorDumper::new(color, cs_name_len))?;
        }
        match paint {
            PathPaint::Fill(rule) => {
                write!(out, "<even_odd>{}</even_odd>{LINE_END}", rule.flag())?;
            }
            PathPaint::Stroke(Some(stroke)) => write!(out, "{}", StrokeDumper(stroke))?,
            PathPaint::Stroke(None) => {}
        }
        write!(out, "</gstate>{LINE_END}")?;

        if let Some(path) = path {
            let expected = path.expected_coord_len();
            if expected != path.coords().len() {
                warn!(
                    "path commands need {expected} coords, got {}",
                    path.coords().len()
                );
            }
            write!(out, "{}", PathDumper(path))?;
        }
        self.protocol.mark_open(kind);
        Ok(())
    }

    fn end_event(&mut self, kind: EventKind, tag: &str) -> Result<(), TraceError> {
        let strict = self.options().strict();
        if self.protocol.end(kind, strict)? {
            trace!("end {kind}");
            write!(self.out(), "</{tag}>{LINE_END}")?;
        }
        Ok(())
    }
}

/// Receiver of the draw events of an interpreted page.
///
/// Each draw operation is one `begin_*` / `end_*` pair, `dump_char` records the glyphs
/// of the text run currently begun. Lets an interpreter emit events without knowing
/// the concrete sink.
pub trait DrawEventSink {
    type Error;

    fn begin_fill_text(
        &mut self,
        text: &TextRun,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), Self::Error>;
    fn end_fill_text(&mut self) -> Result<(), Self::Error>;

    fn begin_stroke_text(
        &mut self,
        text: &TextRun,
        stroke: Option<&StrokeStyle>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), Self::Error>;
    fn end_stroke_text(&mut self) -> Result<(), Self::Error>;

    /// Record one glyph of the text run currently begun.
    fn dump_char(&mut self, glyph: &GlyphPlacement) -> Result<(), Self::Error>;

    fn begin_fill_image(
        &mut self,
        pixmap: Option<&Pixmap>,
        image: Option<&ImageDescriptor>,
        local_ctm: Option<&ImageToDeviceSpace>,
    ) -> Result<(), Self::Error>;
    fn end_fill_image(&mut self) -> Result<(), Self::Error>;

    fn begin_stroke_path(
        &mut self,
        path: Option<&Path>,
        stroke: Option<&StrokeStyle>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), Self::Error>;
    fn end_stroke_path(&mut self) -> Result<(), Self::Error>;

    fn begin_fill_path(
        &mut self,
        path: Option<&Path>,
        rule: FillRule,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), Self::Error>;
    fn end_fill_path(&mut self) -> Result<(), Self::Error>;
}

impl<W: Write> DrawEventSink for TraceDocument<W> {
    type Error = TraceError;

    fn begin_fill_text(
        &mut self,
        text: &TextRun,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.begin_text(EventKind::FillText, text, None, ctm, color)
    }

    fn end_fill_text(&mut self) -> Result<(), TraceError> {
        self.end_event(EventKind::FillText, "text_object")
    }

    fn begin_stroke_text(
        &mut self,
        text: &TextRun,
        stroke: Option<&StrokeStyle>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.begin_text(EventKind::StrokeText, text, stroke, ctm, color)
    }

    fn end_stroke_text(&mut self) -> Result<(), TraceError> {
        self.end_event(EventKind::StrokeText, "text_object")
    }

    fn dump_char(&mut self, glyph: &GlyphPlacement) -> Result<(), TraceError> {
        if !self.protocol.in_text() {
            if self.options().strict() {
                return Err(TraceError::CharOutsideText);
            }
            warn!("char {glyph:?} outside of text object");
        }
        let GlyphPlacement { x, y, gid, ucs } = *glyph;
        write!(
            self.out(),
            "<char x=\"{x}\" y=\"{y}\" ucs=\"{ucs}\" gid=\"{gid}\"/>{LINE_END}"
        )?;
        Ok(())
    }

    fn begin_fill_image(
        &mut self,
        pixmap: Option<&Pixmap>,
        image: Option<&ImageDescriptor>,
        local_ctm: Option<&ImageToDeviceSpace>,
    ) -> Result<(), TraceError> {
        let kind = EventKind::FillImage;
        self.protocol.check_begin(kind)?;
        let Some(pixmap) = pixmap else {
            trace!("skip {kind} without pixmap");
            self.protocol.mark_skipped(kind);
            return Ok(());
        };

        trace!("begin {kind}, {}x{}", pixmap.w, pixmap.h);
        let cs_name_len = self.options().colorspace_name_len();
        let out = self.out();
        let Pixmap {
            x,
            y,
            w,
            h,
            n,
            xres,
            yres,
            ..
        } = pixmap;
        write!(
            out,
            "<image_object cmd=\"{kind}\" x=\"{x}\" y=\"{y}\" w=\"{w}\" h=\"{h}\" n=\"{n}\" xres=\"{xres}\" yres=\"{yres}\""
        )?;
        if let Some(cs) = &pixmap.color_space {
            write!(out, " {}", ColorSpaceAttr::new(cs, cs_name_len))?;
        }
        if let Some(ctm) = local_ctm {
            write!(out, " {}", CtmAttr(ctm))?;
        }
        write!(out, ">{LINE_END}")?;

        if let Some(image) = image {
            let ImageDescriptor {
                w,
                h,
                bpc,
                xres,
                yres,
                ..
            } = image;
            write!(
                out,
                "<image w=\"{w}\" h=\"{h}\" bpc=\"{bpc}\" xres=\"{xres}\" yres=\"{yres}\""
            )?;
            if let Some(cs) = &image.color_space {
                write!(out, " {}", ColorSpaceAttr::new(cs, cs_name_len))?;
            }
            if let Some(len) = image.encoded_len {
                write!(out, " length=\"{len}\"")?;
            }
            write!(out, "/>{LINE_END}")?;
        }
        self.protocol.mark_open(kind);
        Ok(())
    }

    fn end_fill_image(&mut self) -> Result<(), TraceError> {
        self.end_event(EventKind::FillImage, "image_object")
    }

    fn begin_stroke_path(
        &mut self,
        path: Option<&Path>,
        stroke: Option<&StrokeStyle>,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.begin_path(
            EventKind::StrokePath,
            path,
            PathPaint::Stroke(stroke),
            ctm,
            color,
        )
    }

    fn end_stroke_path(&mut self) -> Result<(), TraceError> {
        self.end_event(EventKind::StrokePath, "graphics_object")
    }

    fn begin_fill_path(
        &mut self,
        path: Option<&Path>,
        rule: FillRule,
        ctm: &UserToDeviceSpace,
        color: Option<&ColorSpec>,
    ) -> Result<(), TraceError> {
        self.begin_path(EventKind::FillPath, path, PathPaint::Fill(rule), ctm, color)
    }

    fn end_fill_path(&mut self) -> Result<(), TraceError> {
        self.end_event(EventKind::FillPath, "graphics_object")
    }
}
