use glam::DVec2;
use path_tiler::prelude::*;
use path_tiler_examples::{init_tracing, render_paths_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let extent = DVec2::new(300.0, 300.0);
    let triw = 30.0;
    let mut tiler = PathTiler::new(Canvas::new(extent.x, extent.y));

    // A bent spoke from the hexagon center toward one corner; p6m turns it into twelve-point stars.
    let mut spoke = draw_fn(|t: &mut PathTiler<Canvas>| {
        t.move_to(0.0, 0.0);
        t.line_to(triw * 0.3, triw * 0.15)?;
        t.line_to(triw * 0.5, 0.0)
    });
    let placed = tiler.tile_p6m(&mut spoke, triw)?;
    let paths = tiler.into_paths();

    // Mirrored and rotated copies meet at the same junctions; merge them.
    let mut junctions: PointMap<usize> = PointMap::default();
    for path in &paths {
        for &p in path.points() {
            *junctions.get_or_create(p) += 1;
        }
    }
    let shared = junctions.values().filter(|&&n| n > 1).count();
    println!(
        "p6m: {placed} placements, {} paths, {} distinct vertices ({shared} shared)",
        paths.len(),
        junctions.len(),
    );

    let config = RenderConfig::new((900, 900), extent).with_stroke([180, 220, 250]);
    render_paths_to_png(&paths, &config, "tile-p6m-star.png")?;
    Ok(())
}
