use glam::DVec2;
use path_tiler::prelude::*;
use path_tiler_examples::{init_tracing, render_paths_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = DVec2::new(200.0, 200.0);
    let mut tiler = PathTiler::new(Canvas::new(extent.x, extent.y));

    // One quarter-cell motif: a diagonal with a hook. pmm mirrors it into a diamond lattice.
    let mut motif = draw_fn(|t: &mut PathTiler<Canvas>| {
        t.move_to(0.0, 0.0);
        t.line_to(20.0, 20.0)?;
        t.rel_line_to(0.0, -8.0)
    });
    let placed = tiler.tile_pmm(&mut motif, 20.0, 20.0)?;
    println!("pmm: {placed} placements, {} paths", tiler.paths().len());

    let config = RenderConfig::new((800, 800), extent);
    render_paths_to_png(&tiler.into_paths(), &config, "tile-pmm-basic.png")?;
    Ok(())
}
