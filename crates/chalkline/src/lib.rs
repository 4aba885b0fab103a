//! Chalkline: immediate-mode debug drawing for 2D geometry.
//!
//! Model-space shapes (complex-number algebra, y-up) go in; pixel-space
//! primitives come out on a caller-supplied render surface. Nothing is
//! retained between calls, so state can be inspected frame by frame.

pub mod coords;
pub mod draw;
pub mod shapes;
pub mod surface;

pub mod logging;
