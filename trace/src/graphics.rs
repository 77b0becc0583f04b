use educe::Educe;

pub mod path;
pub mod trans;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LineCapStyle {
    #[default]
    Butt,
    Round,
    Square,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LineJoinStyle {
    #[default]
    Miter,
    Round,
    Bevel,
    MiterXps,
}

/// Fill rule of a fill path event, written as `0` (nonzero) or `1` (even-odd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    pub fn from_even_odd(even_odd: bool) -> Self {
        if even_odd {
            Self::EvenOdd
        } else {
            Self::NonZero
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Self::NonZero => 0,
            Self::EvenOdd => 1,
        }
    }
}

/// Color space identity: display name and number of color components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpace {
    name: String,
    n: usize,
}

impl ColorSpace {
    pub fn new(name: impl Into<String>, n: usize) -> Self {
        Self {
            name: name.into(),
            n,
        }
    }

    pub fn device_gray() -> Self {
        Self::new("DeviceGray", 1)
    }

    pub fn device_rgb() -> Self {
        Self::new("DeviceRGB", 3)
    }

    pub fn device_cmyk() -> Self {
        Self::new("DeviceCMYK", 4)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

/// Paint color of an event.
///
/// `values` are in color space channel order. An empty `values` means the caller
/// has no color array, only color space and alpha are recorded then.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    pub color_space: ColorSpace,
    pub values: Vec<f32>,
    pub alpha: f32,
}

impl ColorSpec {
    pub fn new(color_space: ColorSpace, values: impl Into<Vec<f32>>, alpha: f32) -> Self {
        Self {
            color_space,
            values: values.into(),
            alpha,
        }
    }

    pub fn rgb(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::device_rgb(), [r, g, b], alpha)
    }

    pub fn gray(v: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::device_gray(), [v], alpha)
    }
}

#[derive(Debug, Clone, PartialEq, Educe)]
#[educe(Default)]
pub struct StrokeStyle {
    /// Reference count of the style object in the interpreter, diagnostic only.
    #[educe(Default = 1)]
    pub refs: i32,
    pub start_cap: LineCapStyle,
    pub dash_cap: LineCapStyle,
    pub end_cap: LineCapStyle,
    pub line_join: LineJoinStyle,
    #[educe(Default = 1.0)]
    pub line_width: f32,
    #[educe(Default = 10.0)]
    pub miter_limit: f32,
    pub dash_phase: f32,
    pub dash: Vec<f32>,
}

impl StrokeStyle {
    /// Set all three caps to `cap`.
    pub fn with_cap(mut self, cap: LineCapStyle) -> Self {
        self.start_cap = cap;
        self.dash_cap = cap;
        self.end_cap = cap;
        self
    }

    pub fn with_dash(mut self, dash: impl Into<Vec<f32>>, phase: f32) -> Self {
        self.dash = dash.into();
        self.dash_phase = phase;
        self
    }
}

#[cfg(test)]
mod tests;
