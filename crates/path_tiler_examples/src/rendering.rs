//! Minimal PNG preview of tiled paths.
use std::path::Path as FsPath;

use glam::DVec2;
use image::{Rgb, RgbImage};
use path_tiler::prelude::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber; `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output image settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image size in pixels.
    pub image_size: (u32, u32),
    /// Device-space extent mapped onto the image.
    pub extent: DVec2,
    pub background: [u8; 3],
    pub stroke: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), extent: DVec2) -> Self {
        Self {
            image_size,
            extent,
            background: [20, 22, 28],
            stroke: [235, 225, 190],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_stroke(mut self, stroke: [u8; 3]) -> Self {
        self.stroke = stroke;
        self
    }

    fn to_pixel(&self, p: DVec2) -> DVec2 {
        let (w, h) = self.image_size;
        DVec2::new(
            p.x / self.extent.x * w as f64,
            // Device y grows upward; image rows grow downward.
            (1.0 - p.y / self.extent.y) * h as f64,
        )
    }
}

/// Strokes every path segment onto a fresh image and writes it as PNG.
pub fn render_paths_to_png(
    paths: &[Path],
    config: &RenderConfig,
    out: impl AsRef<FsPath>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let stroke = Rgb(config.stroke);

    let mut segments = 0usize;
    for path in paths {
        for (a, b) in path.segments() {
            draw_segment(&mut img, config.to_pixel(a), config.to_pixel(b), stroke);
            segments += 1;
        }
    }

    img.save(out.as_ref())?;
    info!(
        "Wrote {} ({} paths, {} segments).",
        out.as_ref().display(),
        paths.len(),
        segments
    );
    Ok(())
}

fn draw_segment(img: &mut RgbImage, a: DVec2, b: DVec2, color: Rgb<u8>) {
    let steps = (b - a).abs().max_element().ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a.lerp(b, i as f64 / steps as f64);
        let (x, y) = (p.x.round(), p.y.round());
        if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}
