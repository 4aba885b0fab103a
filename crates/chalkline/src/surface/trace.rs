use crate::coords::{PixelPoint, Viewport};

use super::RenderSurface;

/// A primitive received by [`TraceSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCmd {
    Point(PixelPoint),
    Line(PixelPoint, PixelPoint),
    Polyline(Vec<PixelPoint>),
    FillRect {
        top_left: PixelPoint,
        width: i32,
        height: i32,
    },
}

/// Recording surface: stores every primitive it receives, in issue order.
///
/// Lets tests (and embedders) assert on draw output without a real backend.
/// The viewport is fixed at construction and can be changed mid-session with
/// [`TraceSurface::set_viewport`] to exercise resize behavior.
#[derive(Debug, Clone)]
pub struct TraceSurface {
    viewport: Viewport,
    cmds: Vec<SurfaceCmd>,
}

impl TraceSurface {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            cmds: Vec::new(),
        }
    }

    /// Recorded primitives, in issue order.
    #[inline]
    pub fn cmds(&self) -> &[SurfaceCmd] {
        &self.cmds
    }

    /// Clears recorded primitives. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Replaces the reported viewport, as a backend would after a resize.
    #[inline]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Every pixel plotted through `draw_point`, in issue order.
    pub fn points(&self) -> Vec<PixelPoint> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCmd::Point(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for TraceSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_point(&mut self, p: PixelPoint) {
        self.cmds.push(SurfaceCmd::Point(p));
    }

    fn draw_line(&mut self, a: PixelPoint, b: PixelPoint) {
        self.cmds.push(SurfaceCmd::Line(a, b));
    }

    fn draw_polyline(&mut self, points: &[PixelPoint]) {
        self.cmds.push(SurfaceCmd::Polyline(points.to_vec()));
    }

    fn fill_rect(&mut self, top_left: PixelPoint, width: i32, height: i32) {
        self.cmds.push(SurfaceCmd::FillRect {
            top_left,
            width,
            height,
        });
    }
}
