//! The drawing session.
//!
//! [`PathTiler`] owns one [`TransformStack`], one [`PathBuilder`] and the surface being tiled.
//! Drawing callbacks receive `&mut PathTiler` and issue user-space commands; the session maps
//! them through the current transform before they reach the path buffers.
use std::ops::{Deref, DerefMut};

use glam::{DAffine2, DVec2};

use crate::builder::PathBuilder;
use crate::error::{Error, Result};
use crate::geometry::{Path, Point};
use crate::surface::DrawingSurface;
use crate::transform::TransformStack;

/// A single tiling session over surface `S`.
#[derive(Debug, Clone)]
pub struct PathTiler<S: DrawingSurface> {
    surface: S,
    stack: TransformStack,
    builder: PathBuilder,
}

impl<S: DrawingSurface> PathTiler<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            stack: TransformStack::new(),
            builder: PathBuilder::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The current user-to-device transform.
    pub fn transform(&self) -> DAffine2 {
        self.stack.current()
    }

    /// Number of saved transforms not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The last drawn point in device space, if a path is open.
    pub fn current_point(&self) -> Option<Point> {
        self.builder.current()
    }

    /// Number of paths started so far, without copying them.
    pub fn path_count(&self) -> usize {
        self.builder.path_count()
    }

    /// All paths recorded so far.
    pub fn paths(&self) -> Vec<Path> {
        self.builder.paths()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.builder.into_paths()
    }

    // Path creation.

    pub fn move_to(&mut self, x: f64, y: f64) {
        let p = self.stack.in_device(x, y);
        self.builder.move_to(p);
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        let p = self.stack.in_device(x, y);
        self.builder.line_to(p)
    }

    /// Draws a line by `(dx, dy)` in user space from the current point.
    ///
    /// The stored device-space current point is mapped back through the *current* transform,
    /// so the offset is interpreted correctly even if the transform changed since it was drawn.
    pub fn rel_line_to(&mut self, dx: f64, dy: f64) -> Result<()> {
        let cur = self
            .builder
            .current()
            .ok_or_else(|| Error::InvalidState("rel_line_to without a current point".into()))?;
        let user = self.stack.in_user(cur.x, cur.y)?;
        self.line_to(user.x + dx, user.y + dy)
    }

    pub fn close_path(&mut self) -> Result<()> {
        self.builder.close_path()
    }

    pub fn in_device(&self, x: f64, y: f64) -> Point {
        self.stack.in_device(x, y)
    }

    pub fn in_user(&self, x: f64, y: f64) -> Result<Point> {
        self.stack.in_user(x, y)
    }

    // Transformation.

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.stack.translate(dx, dy);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.stack.rotate(degrees);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.stack.scale(sx, sy);
    }

    pub fn reflect_x(&mut self, x0: f64) {
        self.stack.reflect_x(x0);
    }

    pub fn reflect_y(&mut self, y0: f64) {
        self.stack.reflect_y(y0);
    }

    pub fn reflect_xy(&mut self, x0: f64, y0: f64) {
        self.stack.reflect_xy(x0, y0);
    }

    pub fn reflect_line(&mut self, p1: impl Into<DVec2>, p2: impl Into<DVec2>) -> Result<()> {
        self.stack.reflect_line(p1.into(), p2.into())
    }

    // Save/restore.

    pub fn save(&mut self) {
        self.stack.save();
    }

    pub fn restore(&mut self) -> Result<()> {
        self.stack.restore()
    }

    /// Saves the current transform and returns a guard that restores it when dropped.
    ///
    /// The guard derefs to the session, so drawing continues through it.
    pub fn saved(&mut self) -> SavedTransform<'_, S> {
        let depth = self.stack.depth();
        self.stack.save();
        SavedTransform { tiler: self, depth }
    }

    /// Runs `f` with the current transform saved, restoring it on every exit path.
    pub fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut guard = self.saved();
        f(&mut *guard)
    }
}

/// Restores the transform saved by [`PathTiler::saved`] when dropped, including during unwinding
/// and early returns.
pub struct SavedTransform<'a, S: DrawingSurface> {
    tiler: &'a mut PathTiler<S>,
    depth: usize,
}

impl<S: DrawingSurface> Deref for SavedTransform<'_, S> {
    type Target = PathTiler<S>;

    fn deref(&self) -> &Self::Target {
        self.tiler
    }
}

impl<S: DrawingSurface> DerefMut for SavedTransform<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tiler
    }
}

impl<S: DrawingSurface> Drop for SavedTransform<'_, S> {
    fn drop(&mut self) {
        self.tiler.stack.unwind_to(self.depth);
    }
}
