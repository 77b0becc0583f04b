use crate::graphics::trans::TextToDeviceSpace;

/// A run of glyphs painted by one fill/stroke text event.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Glyph count, a run with zero glyphs records nothing.
    pub len: usize,
    pub trm: TextToDeviceSpace,
    pub font_name: Option<String>,
}

impl TextRun {
    pub fn new(len: usize, trm: TextToDeviceSpace) -> Self {
        Self {
            len,
            trm,
            font_name: None,
        }
    }

    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One glyph of a text run, placed at integer device position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphPlacement {
    pub x: i32,
    pub y: i32,
    /// Glyph index in the font.
    pub gid: u32,
    /// Unicode character code.
    pub ucs: u32,
}
