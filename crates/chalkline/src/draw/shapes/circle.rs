use crate::draw::{mapper, raster};
use crate::shapes::Circle;
use crate::surface::RenderSurface;

/// Maps center and radius to pixel space, then rasterizes the outline.
///
/// The radius maps through the same linear scale factor as positions.
pub(in crate::draw) fn circle<S: RenderSurface>(surface: &mut S, scale: f32, circle: Circle) {
    let radius = (circle.radius * scale) as i32;
    let center = mapper::map(surface.viewport(), scale, circle.center);
    raster::circle_outline(surface, center, radius);
}
