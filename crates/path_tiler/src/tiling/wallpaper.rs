//! Wallpaper-group tilers and the composite callbacks they are built from.
//!
//! Each composite borrows an inner [`Draw`] and captures its own parameters by value. Every
//! inner call runs under its own scoped save, nested inside the placement's scope.
use glam::DVec2;

use crate::error::Result;
use crate::surface::DrawingSurface;
use crate::tiler::PathTiler;
use crate::tiling::{Draw, Lattice};

/// Draws the inner motif four times: as-is, mirrored across `x = dx`, mirrored through
/// `(dx, dy)`, and mirrored across `y = dy`.
pub struct FourMirror<'a, D: ?Sized> {
    inner: &'a mut D,
    dx: f64,
    dy: f64,
}

impl<'a, D: ?Sized> FourMirror<'a, D> {
    pub fn new(inner: &'a mut D, dx: f64, dy: f64) -> Self {
        Self { inner, dx, dy }
    }
}

impl<S: DrawingSurface, D: Draw<S> + ?Sized> Draw<S> for FourMirror<'_, D> {
    fn draw(&mut self, tiler: &mut PathTiler<S>) -> Result<()> {
        let (dx, dy) = (self.dx, self.dy);
        let inner = &mut *self.inner;
        tiler.scoped(|t| inner.draw(t))?;
        tiler.scoped(|t| {
            t.reflect_x(dx);
            inner.draw(t)
        })?;
        tiler.scoped(|t| {
            t.reflect_xy(dx, dy);
            inner.draw(t)
        })?;
        tiler.scoped(|t| {
            t.reflect_y(dy);
            inner.draw(t)
        })
    }
}

/// Shifts up by `triw`, then draws the inner motif six times, turning 60° before each call.
///
/// The turns accumulate, so the calls see 60°, 120°, ..., 360° relative to the placement.
pub struct SixTriangles<'a, D: ?Sized> {
    inner: &'a mut D,
    triw: f64,
}

impl<'a, D: ?Sized> SixTriangles<'a, D> {
    pub fn new(inner: &'a mut D, triw: f64) -> Self {
        Self { inner, triw }
    }
}

impl<S: DrawingSurface, D: Draw<S> + ?Sized> Draw<S> for SixTriangles<'_, D> {
    fn draw(&mut self, tiler: &mut PathTiler<S>) -> Result<()> {
        let inner = &mut *self.inner;
        tiler.translate(0.0, self.triw);
        for _ in 0..6 {
            tiler.rotate(60.0);
            tiler.scoped(|t| inner.draw(t))?;
        }
        Ok(())
    }
}

/// Draws the inner motif, then again mirrored across `x = 0`.
pub struct Mirrored<'a, D: ?Sized> {
    inner: &'a mut D,
}

impl<'a, D: ?Sized> Mirrored<'a, D> {
    pub fn new(inner: &'a mut D) -> Self {
        Self { inner }
    }
}

impl<S: DrawingSurface, D: Draw<S> + ?Sized> Draw<S> for Mirrored<'_, D> {
    fn draw(&mut self, tiler: &mut PathTiler<S>) -> Result<()> {
        let inner = &mut *self.inner;
        tiler.scoped(|t| inner.draw(t))?;
        tiler.scoped(|t| {
            t.reflect_x(0.0);
            inner.draw(t)
        })
    }
}

impl<S: DrawingSurface> PathTiler<S> {
    /// Tiles with group pmm: the four-mirror cell repeated on a `2dx` by `2dy` grid.
    ///
    /// The doubled cell is an exact period, so the sweep uses no buffer.
    pub fn tile_pmm<D: Draw<S> + ?Sized>(
        &mut self,
        draw: &mut D,
        dx: f64,
        dy: f64,
    ) -> Result<usize> {
        let lattice =
            Lattice::new(DVec2::new(dx * 2.0, 0.0), DVec2::new(0.0, dy * 2.0)).with_buffer(0);
        let mut cell = FourMirror::new(draw, dx, dy);
        self.tile_p1(&mut cell, &lattice)
    }

    /// Tiles with group p6: six rotated copies around each point of a hexagonal lattice.
    ///
    /// Rows are `1.5 * triw` apart and each row is shifted by half of the `triw * sqrt(3)`
    /// horizontal period.
    pub fn tile_p6<D: Draw<S> + ?Sized>(&mut self, draw: &mut D, triw: f64) -> Result<usize> {
        let triw3 = triw * 3.0_f64.sqrt();
        let lattice = Lattice::new(DVec2::new(triw3, 0.0), DVec2::new(triw3 / 2.0, 1.5 * triw))
            .with_buffer(2);
        let mut cell = SixTriangles::new(draw, triw);
        self.tile_p1(&mut cell, &lattice)
    }

    /// Tiles with group p6m: p6 over the motif and its mirror image across `x = 0`.
    pub fn tile_p6m<D: Draw<S> + ?Sized>(&mut self, draw: &mut D, triw: f64) -> Result<usize> {
        let mut mirrored = Mirrored::new(draw);
        self.tile_p6(&mut mirrored, triw)
    }
}
