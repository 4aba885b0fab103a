use crate::coords::{PixelPoint, Vec2};
use crate::draw::mapper;
use crate::surface::RenderSurface;

/// Proportions of the arrowhead relative to the drawn vector, as a complex
/// factor: 0.15 along the shaft, 0.7 across it.
const PRONG: Vec2 = Vec2::new(0.15, 0.7);

/// Draws `v` as an arrow anchored at `start`: a shaft plus a two-prong head.
///
/// `start` maps as a position; `v` maps as an offset (no translation). The
/// prongs are complex products of [`PRONG`] with the mapped vector, rotated
/// a quarter turn, one mirrored through the shaft via the negated conjugate,
/// so the head scales and rotates with `v` instead of being a fixed-pixel
/// marker.
pub(in crate::draw) fn vector<S: RenderSurface>(surface: &mut S, scale: f32, start: Vec2, v: Vec2) {
    let viewport = surface.viewport();

    let start = mapper::to_surface(viewport, scale, start);
    let v = mapper::offset_to_surface(scale, v);
    let end = start + v;

    surface.draw_line(PixelPoint::truncate(start), PixelPoint::truncate(end));

    let prong1 = start + (PRONG * v).perp_cw();
    let prong2 = start + ((-PRONG.conj()) * v).perp_cw();
    surface.draw_polyline(&[
        PixelPoint::truncate(prong1),
        PixelPoint::truncate(end),
        PixelPoint::truncate(prong2),
    ]);
}
