#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_paths_to_png, RenderConfig};
