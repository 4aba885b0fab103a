use crate::draw::mapper;
use crate::shapes::Ray;
use crate::surface::RenderSurface;

/// Draws one segment from the ray start to a far endpoint.
///
/// The far endpoint is `start + direction * (w + h)` in model space: once
/// scaled, that reach is past the visible area for any non-zero direction,
/// whatever the aspect ratio.
pub(in crate::draw) fn ray<S: RenderSurface>(surface: &mut S, scale: f32, ray: Ray) {
    let viewport = surface.viewport();
    let reach = viewport.width + viewport.height;

    let a = mapper::map(viewport, scale, ray.start);
    let b = mapper::map(viewport, scale, ray.start + ray.direction * reach);

    surface.draw_line(a, b);
}

#[cfg(test)]
mod tests {
    use crate::coords::{PixelPoint, Vec2};
    use crate::shapes::Ray;
    use crate::surface::{SurfaceCmd, TraceSurface};

    use super::ray;

    fn recorded_line(surface: &TraceSurface) -> (PixelPoint, PixelPoint) {
        match surface.cmds() {
            [SurfaceCmd::Line(a, b)] => (*a, *b),
            other => panic!("expected a single line, got {other:?}"),
        }
    }

    #[test]
    fn starts_at_the_mapped_start() {
        let mut surface = TraceSurface::new(800.0, 600.0);
        ray(&mut surface, 100.0, Ray::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)));

        let (a, _) = recorded_line(&surface);
        assert_eq!(a, PixelPoint::new(450, 300));
    }

    #[test]
    fn far_endpoint_leaves_the_viewport() {
        let mut surface = TraceSurface::new(800.0, 600.0);
        ray(&mut surface, 100.0, Ray::new(Vec2::zero(), Vec2::new(1.0, 0.0)));

        let (_, b) = recorded_line(&surface);
        // (w + h) model units at scale 100 is far beyond the right edge.
        assert!(b.x > 800);
        assert_eq!(b.y, 300);
    }

    #[test]
    fn short_direction_still_escapes() {
        // Direction length is no requirement; the (w + h) reach covers it.
        let mut surface = TraceSurface::new(800.0, 600.0);
        ray(&mut surface, 100.0, Ray::new(Vec2::zero(), Vec2::new(0.0, 0.01)));

        let (_, b) = recorded_line(&surface);
        assert!(b.y < 0);
    }

    #[test]
    fn zero_direction_degenerates_to_a_point_segment() {
        let mut surface = TraceSurface::new(800.0, 600.0);
        ray(&mut surface, 100.0, Ray::new(Vec2::new(1.0, -1.0), Vec2::zero()));

        let (a, b) = recorded_line(&surface);
        assert_eq!(a, b);
        assert_eq!(a, PixelPoint::new(500, 400));
    }
}
