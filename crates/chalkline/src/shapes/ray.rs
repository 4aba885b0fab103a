use crate::coords::Vec2;

/// Half-infinite ray in model space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub start: Vec2,
    /// Direction of travel; not required to be unit length.
    pub direction: Vec2,
}

impl Ray {
    #[inline]
    pub const fn new(start: Vec2, direction: Vec2) -> Self {
        Self { start, direction }
    }
}
