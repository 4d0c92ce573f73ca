use glam::DVec2;
use path_tiler::prelude::*;
use path_tiler_examples::{init_tracing, render_paths_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = DVec2::new(200.0, 150.0);
    let mut tiler = PathTiler::new(Canvas::new(extent.x, extent.y));

    // A skewed lattice; the default buffer covers what the extent estimate misses.
    let lattice = Lattice::new((25.0, 0.0), (10.0, 20.0));
    let mut square = draw_fn(|t: &mut PathTiler<Canvas>| {
        t.rotate(15.0);
        t.move_to(0.0, 0.0);
        t.rel_line_to(8.0, 0.0)?;
        t.rel_line_to(0.0, 8.0)?;
        t.rel_line_to(-8.0, 0.0)?;
        t.close_path()
    });
    let placed = tiler.tile_p1(&mut square, &lattice)?;
    println!("p1: {placed} placements");

    let config = RenderConfig::new((800, 600), extent).with_background([250, 248, 240]);
    let config = config.with_stroke([40, 40, 60]);
    render_paths_to_png(&tiler.into_paths(), &config, "tile-p1-lattice.png")?;
    Ok(())
}
