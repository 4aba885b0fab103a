mod canvas;

use anyhow::Context;
use chalkline::coords::Vec2;
use chalkline::draw::{DrawConfig, Drawer};
use chalkline::logging::{LoggingConfig, init_logging};
use chalkline::shapes::{Circle, Polygon, Ray};

use canvas::AsciiCanvas;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    // Small scale: terminal cells are coarse pixels.
    let mut canvas = AsciiCanvas::new(72, 36);
    let config = DrawConfig {
        scale: 8.0,
        point_size: 1,
    };

    log::debug!("drawing demo scene with {config:?}");

    {
        let mut drawer = Drawer::with_config(&mut canvas, config);

        drawer.circle(Circle::new(Vec2::zero(), 1.5));
        drawer.polygon(&Polygon::new(vec![
            Vec2::new(-3.5, -0.5),
            Vec2::new(-1.5, -0.5),
            Vec2::new(-1.5, 1.5),
            Vec2::new(-3.5, 1.5),
        ]));
        drawer.ray(Ray::new(Vec2::zero(), Vec2::new(1.0, 0.4)));
        drawer.vector(Vec2::new(1.5, -1.0), Vec2::new(1.5, 0.75));
        drawer.point(Vec2::new(-2.5, 0.5));
    }

    let stdout = std::io::stdout();
    canvas
        .write_to(&mut stdout.lock())
        .context("writing canvas to stdout")?;

    Ok(())
}
