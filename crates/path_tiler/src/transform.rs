//! Affine transform stack.
//!
//! [`TransformStack`] owns the current user-to-device transform and a LIFO of saved snapshots.
//! Every composition right-multiplies onto the current transform, so the most recent operation
//! is the first one applied to a point (`current * point`). Composition is not commutative:
//! `translate` then `rotate` spins the shape in place at the translated origin, while `rotate`
//! then `translate` moves it along the rotated axes.
use glam::{DAffine2, DMat2, DVec2};
use tracing::warn;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Current transform plus the snapshots pushed by `save`.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: DAffine2,
    saved: Vec<DAffine2>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Creates a stack holding the identity transform and no saved snapshots.
    pub fn new() -> Self {
        Self {
            current: DAffine2::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// The current user-to-device transform.
    pub fn current(&self) -> DAffine2 {
        self.current
    }

    /// Number of snapshots waiting to be restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    #[inline]
    fn compose(&mut self, m: DAffine2) {
        self.current = self.current * m;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.compose(DAffine2::from_translation(DVec2::new(dx, dy)));
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.compose(DAffine2::from_scale(DVec2::new(sx, sy)));
    }

    /// Rotates counter-clockwise by `degrees`.
    pub fn rotate(&mut self, degrees: f64) {
        let (cos, sin) = cos_sin_deg(degrees);
        self.compose(DAffine2::from_mat2(DMat2::from_cols(
            DVec2::new(cos, sin),
            DVec2::new(-sin, cos),
        )));
    }

    /// Mirrors across the vertical line `x = x0`.
    pub fn reflect_x(&mut self, x0: f64) {
        self.translate(x0, 0.0);
        self.scale(-1.0, 1.0);
        self.translate(-x0, 0.0);
    }

    /// Mirrors across the horizontal line `y = y0`.
    pub fn reflect_y(&mut self, y0: f64) {
        self.translate(0.0, y0);
        self.scale(1.0, -1.0);
        self.translate(0.0, -y0);
    }

    /// Point symmetry about `(x0, y0)`.
    pub fn reflect_xy(&mut self, x0: f64, y0: f64) {
        self.reflect_x(x0);
        self.reflect_y(y0);
    }

    /// Mirrors across the infinite line through `p1` and `p2`.
    ///
    /// Fails with [`Error::DegenerateGeometry`] when the two points coincide.
    pub fn reflect_line(&mut self, p1: Point, p2: Point) -> Result<()> {
        let d = p2 - p1;
        let denom = d.length_squared();
        if denom == 0.0 {
            return Err(Error::DegenerateGeometry(format!(
                "reflection axis through ({}, {}) has zero length",
                p1.x, p1.y
            )));
        }

        let a = (d.x * d.x - d.y * d.y) / denom;
        let b = (2.0 * d.x * d.y) / denom;

        self.translate(p1.x, p1.y);
        self.compose(DAffine2::from_mat2(DMat2::from_cols(
            DVec2::new(a, b),
            DVec2::new(b, -a),
        )));
        self.translate(-p1.x, -p1.y);
        Ok(())
    }

    /// Pushes a copy of the current transform.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the most recent snapshot and makes it current.
    pub fn restore(&mut self) -> Result<()> {
        self.current = self.saved.pop().ok_or(Error::StackUnderflow)?;
        Ok(())
    }

    /// Restores the snapshot pushed when the stack had `depth` entries, discarding any
    /// snapshots pushed after it.
    pub(crate) fn unwind_to(&mut self, depth: usize) {
        if self.saved.len() <= depth {
            warn!(
                "Transform stack was unwound below a scoped save (expected depth > {}, found {}).",
                depth,
                self.saved.len()
            );
            return;
        }
        self.saved.truncate(depth + 1);
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    /// Maps a user-space point into device space.
    pub fn in_device(&self, x: f64, y: f64) -> Point {
        self.current.transform_point2(DVec2::new(x, y))
    }

    /// Maps a device-space point back into user space.
    ///
    /// Fails with [`Error::SingularTransform`] when the current transform collapses the plane.
    pub fn in_user(&self, x: f64, y: f64) -> Result<Point> {
        let det = self.current.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(Error::SingularTransform);
        }
        Ok(self.current.inverse().transform_point2(DVec2::new(x, y)))
    }
}

/// Cosine and sine of an angle in degrees, exact at multiples of 90.
fn cos_sin_deg(degrees: f64) -> (f64, f64) {
    let mut deg = degrees % 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    if deg == 0.0 {
        (1.0, 0.0)
    } else if deg == 90.0 {
        (0.0, 1.0)
    } else if deg == 180.0 {
        (-1.0, 0.0)
    } else if deg == 270.0 {
        (0.0, -1.0)
    } else {
        let (sin, cos) = deg.to_radians().sin_cos();
        (cos, sin)
    }
}
