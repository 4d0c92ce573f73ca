//! Lattice description and the approximate sweep extent for p1 tiling.
use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Extra rows and columns swept on every side when no buffer is given.
pub const DEFAULT_BUFFER: u32 = 3;

/// Largest estimated tile count per axis a sweep accepts.
pub const MAX_TILES_PER_AXIS: i64 = 1 << 20;

/// Two basis vectors spanning the translational cell, plus a safety margin for the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lattice {
    /// Column basis vector. Only `vcol.x` bounds the sweep.
    pub vcol: DVec2,
    /// Row basis vector. Only `vrow.y` bounds the sweep.
    pub vrow: DVec2,
    /// Extra placements swept before and after the estimated extent on both axes.
    pub buffer: u32,
}

impl Lattice {
    /// Creates a lattice with the default buffer.
    pub fn new(vcol: impl Into<DVec2>, vrow: impl Into<DVec2>) -> Self {
        Self {
            vcol: vcol.into(),
            vrow: vrow.into(),
            buffer: DEFAULT_BUFFER,
        }
    }

    /// Sets the buffer.
    pub fn with_buffer(mut self, buffer: u32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Validates the lattice, returning an error if the sweep extent cannot be computed.
    pub fn validate(&self) -> Result<()> {
        if !self.vcol.is_finite() || !self.vrow.is_finite() {
            return Err(Error::InvalidConfig(
                "lattice basis vectors must be finite".into(),
            ));
        }
        if self.vcol.x == 0.0 {
            return Err(Error::InvalidConfig("vcol.x must be non-zero".into()));
        }
        if self.vrow.y == 0.0 {
            return Err(Error::InvalidConfig("vrow.y must be non-zero".into()));
        }

        Ok(())
    }

    /// Estimated `(tiles_across, tiles_down)` for a surface of the given size.
    ///
    /// Deliberately coarse: only `vcol.x` and `vrow.y` are consulted and the buffer makes up
    /// for skewed lattices. It is not a minimal cover.
    pub fn extent(&self, size: Vector2<f64>) -> (i64, i64) {
        (
            floor_div(size.x, self.vcol.x) as i64,
            floor_div(size.y, self.vrow.y) as i64,
        )
    }

    /// Translation for lattice position `(row, col)`.
    #[inline]
    pub fn offset(&self, row: i64, col: i64) -> DVec2 {
        self.vrow * row as f64 + self.vcol * col as f64
    }
}

/// Floored float division computed from the remainder, so that `1.0 / 0.1` floors to 9
/// rather than 10.
pub(crate) fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
