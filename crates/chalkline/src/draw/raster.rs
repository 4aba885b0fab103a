use crate::coords::PixelPoint;
use crate::surface::RenderSurface;

/// Rasterizes a circle outline with the integer midpoint algorithm.
///
/// Eight symmetric points are plotted per step, `(±x, ±y)` and `(±y, ±x)`
/// offset from `center`; the emitted pixel set is deterministic for fixed
/// inputs. Outline only, never filled.
///
/// `radius` 0 emits nothing, and a negative radius fails the loop guard
/// immediately and also emits nothing; neither is clamped or reported.
pub fn circle_outline<S: RenderSurface>(surface: &mut S, center: PixelPoint, radius: i32) {
    let x0 = center.x;
    let y0 = center.y;

    let mut x = radius - 1;
    let mut y = 0;
    let mut dx = 1;
    let mut dy = 1;
    let diameter = radius * 2;
    let mut err = dx - diameter;

    while x >= y {
        surface.draw_point(PixelPoint::new(x0 + x, y0 + y));
        surface.draw_point(PixelPoint::new(x0 + y, y0 + x));
        surface.draw_point(PixelPoint::new(x0 - y, y0 + x));
        surface.draw_point(PixelPoint::new(x0 - x, y0 + y));
        surface.draw_point(PixelPoint::new(x0 - x, y0 - y));
        surface.draw_point(PixelPoint::new(x0 - y, y0 - x));
        surface.draw_point(PixelPoint::new(x0 + y, y0 - x));
        surface.draw_point(PixelPoint::new(x0 + x, y0 - y));

        if err <= 0 {
            y += 1;
            err += dy;
            dy += 2;
        } else {
            x -= 1;
            dx += 2;
            err += dx - diameter;
        }
    }
}
