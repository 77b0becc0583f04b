//! Coordinate spaces of the transforms attached to draw events.

use euclid::Transform2D;

pub enum UserSpace {}
pub enum TextSpace {}
pub enum ImageSpace {}
/// Output space of the interpreter, integer glyph positions are in this space.
pub enum DeviceSpace {}

pub type UserToDeviceSpace = Transform2D<f32, UserSpace, DeviceSpace>;
pub type TextToDeviceSpace = Transform2D<f32, TextSpace, DeviceSpace>;
pub type ImageToDeviceSpace = Transform2D<f32, ImageSpace, DeviceSpace>;

/// Return the six matrix entries in `a b c d e f` order.
pub fn matrix_entries<S, D>(t: &Transform2D<f32, S, D>) -> [f32; 6] {
    [t.m11, t.m12, t.m21, t.m22, t.m31, t.m32]
}
