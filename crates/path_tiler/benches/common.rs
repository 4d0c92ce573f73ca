use std::time::Duration;

use criterion::{Criterion, Throughput};
use path_tiler::prelude::Path;

// Large sweeps allocate thousands of paths per iteration; keep runs short but stable.
pub const SAMPLE_SIZE: usize = 15;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub fn sweep_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
        .noise_threshold(0.03)
}

/// Throughput in recorded vertices, the unit both the tilers and the point map scale with.
pub fn vertex_throughput(paths: &[Path]) -> Throughput {
    let vertices: usize = paths.iter().map(Path::len).sum();
    Throughput::Elements(vertices.max(1) as u64)
}
