use super::Vec2;

/// Integer point in surface/device space (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Final float-to-device conversion: components truncated toward zero.
    #[inline]
    pub fn truncate(v: Vec2) -> Self {
        Self { x: v.x as i32, y: v.y as i32 }
    }
}
