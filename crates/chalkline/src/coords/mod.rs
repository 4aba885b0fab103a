//! Coordinate types shared across the drawing layer.
//!
//! Two spaces are involved:
//! - Model space: the mathematical system geometry lives in, +Y up,
//!   represented with complex-number algebra on [`Vec2`].
//! - Pixel space: the surface's device system, +Y down, integer-addressed.
//!
//! The drawing layer converts from the first to the second; nothing here
//! goes the other way.

mod pixel;
mod vec2;
mod viewport;

pub use pixel::PixelPoint;
pub use vec2::Vec2;
pub use viewport::Viewport;
