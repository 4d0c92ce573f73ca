#![forbid(unsafe_code)]
//! path_tiler: kaleidoscopic tiling of 2D paths.
//!
//! Modules:
//! - transform: affine transform stack with save/restore
//! - builder: device-space path buffers
//! - tiler: the drawing session and its scoped save guard
//! - tiling: drawing callbacks, lattices, and the p1/pmm/p6/p6m wallpaper-group tilers
//! - pointmap: constant-time lookup of approximately equal points
pub mod builder;
pub mod error;
pub mod geometry;
pub mod pointmap;
pub mod surface;
pub mod tiler;
pub mod tiling;
pub mod transform;

/// Convenient re-exports for common types. Import with `use path_tiler::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Path, Point};
    pub use crate::pointmap::PointMap;
    pub use crate::surface::{Canvas, DrawingSurface};
    pub use crate::tiler::{PathTiler, SavedTransform};
    pub use crate::tiling::{
        draw_fn, Draw, FourMirror, Lattice, Mirrored, SixTriangles, WallpaperGroup,
        DEFAULT_BUFFER, MAX_TILES_PER_AXIS,
    };
    pub use crate::transform::TransformStack;
}
