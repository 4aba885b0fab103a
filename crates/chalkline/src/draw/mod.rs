//! Immediate-mode drawing entry points.
//!
//! Responsibilities:
//! - own the per-session configuration (scale, marker size)
//! - map model-space geometry into pixel space (`mapper`)
//! - rasterize what the surface cannot draw natively (`raster`)
//! - issue primitives to the surface, one shape renderer per file
//!
//! Extending the layer:
//! - add a shape payload under `shapes::*`
//! - add a renderer file under `draw::shapes::*`
//! - add a forwarding method on [`Drawer`]

mod mapper;
mod raster;
mod shapes;

pub use mapper::map;
pub use raster::circle_outline;

use crate::coords::Vec2;
use crate::shapes::{Circle, Polygon, Ray};
use crate::surface::RenderSurface;

/// Per-session drawing configuration.
///
/// Fixed for the lifetime of a [`Drawer`]; embedders override the defaults
/// at construction instead of through compile-time constants.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawConfig {
    /// Model-to-pixel scale factor.
    pub scale: f32,
    /// Side length of the point marker square, in pixels. Independent of
    /// `scale`: markers stay the same on-screen size at any zoom.
    pub point_size: i32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            scale: 100.0,
            point_size: 8,
        }
    }
}

/// Immediate-mode drawer over a borrowed render surface.
///
/// Holds no geometry state between calls; every primitive re-queries the
/// surface viewport, so a resize between two calls is visible immediately.
/// Callers that need one consistent frame snapshot the viewport themselves.
pub struct Drawer<'s, S: RenderSurface> {
    surface: &'s mut S,
    config: DrawConfig,
}

impl<'s, S: RenderSurface> Drawer<'s, S> {
    #[inline]
    pub fn new(surface: &'s mut S) -> Self {
        Self::with_config(surface, DrawConfig::default())
    }

    #[inline]
    pub fn with_config(surface: &'s mut S, config: DrawConfig) -> Self {
        Self { surface, config }
    }

    #[inline]
    pub fn config(&self) -> DrawConfig {
        self.config
    }

    /// Draws a circle outline (never filled).
    #[inline]
    pub fn circle(&mut self, circle: Circle) {
        shapes::circle(self.surface, self.config.scale, circle);
    }

    /// Draws a closed polygon outline: one segment per vertex.
    ///
    /// Expects at least one vertex. Debug builds assert on an empty polygon;
    /// release builds draw nothing. This guard is added behavior on top of
    /// the trusted-input contract.
    #[inline]
    pub fn polygon(&mut self, polygon: &Polygon) {
        shapes::polygon(self.surface, self.config.scale, polygon);
    }

    /// Draws a ray from its start out of the visible area.
    ///
    /// A zero direction degenerates to a point-like segment and is drawn
    /// silently.
    #[inline]
    pub fn ray(&mut self, ray: Ray) {
        shapes::ray(self.surface, self.config.scale, ray);
    }

    /// Draws `v` as an arrow anchored at `start`.
    ///
    /// The arrowhead is proportional to `v`, so it rotates and scales with
    /// it; for `v = 0` the whole arrow collapses onto `start`.
    #[inline]
    pub fn vector(&mut self, start: Vec2, v: Vec2) {
        shapes::vector(self.surface, self.config.scale, start, v);
    }

    /// Draws a fixed-size square marker centered on `v`.
    #[inline]
    pub fn point(&mut self, v: Vec2) {
        shapes::point(self.surface, self.config.scale, self.config.point_size, v);
    }
}
