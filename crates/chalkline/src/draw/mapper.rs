use crate::coords::{PixelPoint, Vec2, Viewport};

/// Maps a model-space position into pixel space: axis flip (conjugation),
/// scale, then translation to the viewport center.
#[inline]
pub(super) fn to_surface(viewport: Viewport, scale: f32, v: Vec2) -> Vec2 {
    v.conj() * scale + viewport.center()
}

/// Maps a model-space offset (a direction, not a position): axis flip and
/// scale only, no translation.
#[inline]
pub(super) fn offset_to_surface(scale: f32, v: Vec2) -> Vec2 {
    v.conj() * scale
}

/// Maps a model-space position to a device pixel.
///
/// Pure function of the viewport passed in; components are truncated toward
/// zero at the float-to-integer boundary.
#[inline]
pub fn map(viewport: Viewport, scale: f32, v: Vec2) -> PixelPoint {
    PixelPoint::truncate(to_surface(viewport, scale, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    // ── origin and axes ───────────────────────────────────────────────────

    #[test]
    fn origin_maps_to_viewport_center() {
        assert_eq!(map(VP, 100.0, Vec2::zero()), PixelPoint::new(400, 300));
    }

    #[test]
    fn odd_viewport_center_truncates() {
        // 801/2 = 400.5, 601/2 = 300.5; integer division.
        let vp = Viewport::new(801.0, 601.0);
        assert_eq!(map(vp, 100.0, Vec2::zero()), PixelPoint::new(400, 300));
    }

    #[test]
    fn model_up_is_pixel_up_negated() {
        // +Y in model space decreases the pixel row.
        assert_eq!(map(VP, 100.0, v(0.0, 1.0)), PixelPoint::new(400, 200));
        assert_eq!(map(VP, 100.0, v(0.0, -1.0)), PixelPoint::new(400, 400));
    }

    #[test]
    fn model_right_is_pixel_right() {
        assert_eq!(map(VP, 100.0, v(1.0, 0.0)), PixelPoint::new(500, 300));
    }

    // ── affinity ──────────────────────────────────────────────────────────

    #[test]
    fn map_is_affine_in_its_argument() {
        // Values chosen to be exact in binary so no rounding slop is needed.
        let a = v(1.25, 0.5);
        let b = v(2.5, -0.75);

        let o = map(VP, 100.0, Vec2::zero());
        let ma = map(VP, 100.0, a);
        let mb = map(VP, 100.0, b);
        let mab = map(VP, 100.0, a + b);

        assert_eq!(mab.x - o.x, (ma.x - o.x) + (mb.x - o.x));
        assert_eq!(mab.y - o.y, (ma.y - o.y) + (mb.y - o.y));
    }

    // ── scale and viewport ────────────────────────────────────────────────

    #[test]
    fn scale_is_linear_in_radius_direction() {
        assert_eq!(map(VP, 50.0, v(1.0, 0.0)), PixelPoint::new(450, 300));
        assert_eq!(map(VP, 200.0, v(1.0, 0.0)), PixelPoint::new(600, 300));
    }

    #[test]
    fn viewport_is_read_per_call() {
        // Same input, different viewport: the mapping must follow the
        // viewport handed in, which the drawer re-queries on every call.
        assert_eq!(map(Viewport::new(200.0, 100.0), 10.0, v(1.0, 1.0)), PixelPoint::new(110, 40));
        assert_eq!(map(Viewport::new(400.0, 100.0), 10.0, v(1.0, 1.0)), PixelPoint::new(210, 40));
    }
}
