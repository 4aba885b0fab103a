use crate::coords::{PixelPoint, Vec2};
use crate::draw::mapper;
use crate::surface::RenderSurface;

/// Fills a `point_size` square centered on the mapped pixel.
///
/// The marker keeps its on-screen size at any geometric scale; the top-left
/// corner sits at `mapped - point_size / 2` with integer division.
pub(in crate::draw) fn point<S: RenderSurface>(surface: &mut S, scale: f32, point_size: i32, v: Vec2) {
    let p = mapper::map(surface.viewport(), scale, v);
    let top_left = PixelPoint::new(p.x - point_size / 2, p.y - point_size / 2);
    surface.fill_rect(top_left, point_size, point_size);
}
