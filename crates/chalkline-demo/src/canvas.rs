use std::io::{self, Write};

use chalkline::coords::{PixelPoint, Viewport};
use chalkline::surface::RenderSurface;

/// Character-cell render surface: one cell per pixel, drawn into a flat
/// byte grid. Out-of-bounds plots are dropped silently.
pub struct AsciiCanvas {
    width: i32,
    height: i32,
    cells: Vec<u8>,
}

impl AsciiCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![b' '; (width * height) as usize],
        }
    }

    fn plot(&mut self, x: i32, y: i32, glyph: u8) {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return;
        }
        self.cells[(y * self.width + x) as usize] = glyph;
    }

    /// Integer line stepping (Bresenham), both octant groups.
    fn line(&mut self, a: PixelPoint, b: PixelPoint, glyph: u8) {
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = a.x;
        let mut y = a.y;

        loop {
            self.plot(x, y, glyph);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = err * 2;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for row in self.cells.chunks(self.width as usize) {
            out.write_all(row)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl RenderSurface for AsciiCanvas {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    fn draw_point(&mut self, p: PixelPoint) {
        self.plot(p.x, p.y, b'*');
    }

    fn draw_line(&mut self, a: PixelPoint, b: PixelPoint) {
        self.line(a, b, b'#');
    }

    fn fill_rect(&mut self, top_left: PixelPoint, width: i32, height: i32) {
        for y in top_left.y..top_left.y + height {
            for x in top_left.x..top_left.x + width {
                self.plot(x, y, b'@');
            }
        }
    }
}
