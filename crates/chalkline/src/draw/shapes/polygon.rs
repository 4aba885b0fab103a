use crate::coords::PixelPoint;
use crate::draw::mapper;
use crate::shapes::Polygon;
use crate::surface::RenderSurface;

/// Issues one closed polyline: every vertex mapped, first vertex repeated,
/// so the drawn segment count equals the vertex count.
pub(in crate::draw) fn polygon<S: RenderSurface>(surface: &mut S, scale: f32, poly: &Polygon) {
    debug_assert!(poly.sides() > 0, "polygon must have at least one vertex");

    let viewport = surface.viewport();

    let mut points: Vec<PixelPoint> = Vec::with_capacity(poly.sides() + 1);
    for &vertex in &poly.points {
        points.push(mapper::map(viewport, scale, vertex));
    }
    let Some(&first) = points.first() else { return };
    points.push(first);

    surface.draw_polyline(&points);
}
