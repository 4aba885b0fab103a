//! Model-space shape payloads.
//!
//! Plain data, one shape per file; the rendering counterparts live under
//! `draw::shapes`.

mod circle;
mod polygon;
mod ray;

pub use circle::Circle;
pub use polygon::Polygon;
pub use ray::Ray;
