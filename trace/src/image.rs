use crate::graphics::ColorSpace;

/// Decoded samples handed to a fill image event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pixmap {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// Components per pixel, alpha included.
    pub n: u32,
    pub xres: u32,
    pub yres: u32,
    pub color_space: Option<ColorSpace>,
}

/// Source image the pixmap decoded from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageDescriptor {
    pub w: u32,
    pub h: u32,
    pub bpc: u8,
    pub xres: u32,
    pub yres: u32,
    pub color_space: Option<ColorSpace>,
    /// Byte length of the encoded buffer, `None` if the image holds raw samples.
    pub encoded_len: Option<usize>,
}
