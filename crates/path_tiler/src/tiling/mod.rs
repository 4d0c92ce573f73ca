//! Symmetric replication of drawing callbacks.
//!
//! A [`Draw`] callback draws one motif through the session it is handed. The tilers push a
//! placement transform, call the motif under a scoped save, and move on. Placements never see
//! transform changes made by a sibling.
//!
//! - [`PathTiler::tile_p1`]: translation only, swept over a [`Lattice`].
//! - [`PathTiler::tile_pmm`], [`PathTiler::tile_p6`], [`PathTiler::tile_p6m`]: wallpaper groups
//!   built from the composite callbacks in [`wallpaper`].
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::surface::DrawingSurface;
use crate::tiler::PathTiler;

pub mod lattice;
pub mod wallpaper;

pub use lattice::{Lattice, DEFAULT_BUFFER, MAX_TILES_PER_AXIS};
pub use wallpaper::{FourMirror, Mirrored, SixTriangles};

/// A drawing callback invoked once per symmetric placement.
pub trait Draw<S: DrawingSurface> {
    fn draw(&mut self, tiler: &mut PathTiler<S>) -> Result<()>;
}

impl<S, F> Draw<S> for F
where
    S: DrawingSurface,
    F: FnMut(&mut PathTiler<S>) -> Result<()>,
{
    #[inline]
    fn draw(&mut self, tiler: &mut PathTiler<S>) -> Result<()> {
        self(tiler)
    }
}

/// Pins a closure to the [`Draw`] signature so its argument type is inferred.
pub fn draw_fn<S, F>(f: F) -> F
where
    S: DrawingSurface,
    F: FnMut(&mut PathTiler<S>) -> Result<()>,
{
    f
}

/// A wallpaper group together with the parameters its tiler needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WallpaperGroup {
    /// Translation only.
    P1(Lattice),
    /// Two perpendicular mirrors at `x = dx` and `y = dy`.
    Pmm { dx: f64, dy: f64 },
    /// Six-fold rotation on a hexagonal lattice of radius `triw`.
    P6 { triw: f64 },
    /// Six-fold rotation plus a mirror.
    P6m { triw: f64 },
}

impl<S: DrawingSurface> PathTiler<S> {
    /// Tiles `draw` over `group`, returning the number of lattice placements swept.
    pub fn tile<D: Draw<S> + ?Sized>(
        &mut self,
        draw: &mut D,
        group: &WallpaperGroup,
    ) -> Result<usize> {
        match *group {
            WallpaperGroup::P1(ref lattice) => self.tile_p1(draw, lattice),
            WallpaperGroup::Pmm { dx, dy } => self.tile_pmm(draw, dx, dy),
            WallpaperGroup::P6 { triw } => self.tile_p6(draw, triw),
            WallpaperGroup::P6m { triw } => self.tile_p6m(draw, triw),
        }
    }

    /// Repeats `draw` across `lattice`, returning the number of placements.
    ///
    /// The sweep covers `[-buffer, tiles_across + buffer)` rows by
    /// `[-buffer, tiles_down + buffer)` columns, where the tile counts come from
    /// [`Lattice::extent`]. Placement `(row, col)` is translated by
    /// `row * vrow + col * vcol`. Rows are counted from the width estimate and columns from the
    /// height estimate, so a lattice that is not square over-covers one axis and relies on the
    /// buffer for the other.
    pub fn tile_p1<D: Draw<S> + ?Sized>(
        &mut self,
        draw: &mut D,
        lattice: &Lattice,
    ) -> Result<usize> {
        lattice.validate()?;
        let size = self.surface().size();
        if !size.x.is_finite() || !size.y.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "surface size must be finite, got {} x {}",
                size.x, size.y
            )));
        }

        let (tiles_across, tiles_down) = lattice.extent(size);
        let limit = MAX_TILES_PER_AXIS.unsigned_abs();
        if tiles_across.unsigned_abs() > limit || tiles_down.unsigned_abs() > limit {
            return Err(Error::InvalidConfig(format!(
                "sweep of {} x {} tiles exceeds {} per axis",
                tiles_across, tiles_down, MAX_TILES_PER_AXIS
            )));
        }
        let buffer = i64::from(lattice.buffer);
        debug!(
            "p1 sweep: {} x {} tiles, buffer {}, on a {} x {} surface.",
            tiles_across, tiles_down, buffer, size.x, size.y
        );

        let mut placed = 0;
        for row in -buffer..tiles_across.saturating_add(buffer) {
            for col in -buffer..tiles_down.saturating_add(buffer) {
                let DVec2 { x, y } = lattice.offset(row, col);
                self.scoped(|t| {
                    t.translate(x, y);
                    draw.draw(t)
                })?;
                placed += 1;
            }
        }

        debug!("p1 sweep placed {} tiles.", placed);
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::DAffine2;

    use super::*;
    use crate::surface::Canvas;

    fn key(p: DVec2) -> (i64, i64) {
        ((p.x * 1e6).round() as i64, (p.y * 1e6).round() as i64)
    }

    #[test]
    fn p1_covers_expected_translations() {
        let mut tiler = PathTiler::new(Canvas::new(30.0, 30.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).with_buffer(0);

        let mut origins = Vec::new();
        let mut draw = draw_fn(|t: &mut PathTiler<Canvas>| {
            origins.push(t.in_device(0.0, 0.0));
            Ok(())
        });
        let placed = tiler.tile_p1(&mut draw, &lattice).expect("valid lattice");

        assert_eq!(placed, 9);
        assert_eq!(origins.len(), 9);
        let got: HashSet<_> = origins.into_iter().map(key).collect();
        let want: HashSet<_> = [0.0, 10.0, 20.0]
            .iter()
            .flat_map(|&x| [0.0, 10.0, 20.0].map(move |y| key(DVec2::new(x, y))))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn p1_buffer_extends_sweep_on_every_side() {
        let mut tiler = PathTiler::new(Canvas::new(30.0, 30.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0));
        let mut calls = 0;
        let mut draw = draw_fn(|_: &mut PathTiler<Canvas>| {
            calls += 1;
            Ok(())
        });
        let placed = tiler.tile_p1(&mut draw, &lattice).expect("valid lattice");
        // (3 + 2 * 3) squared.
        assert_eq!(placed, 81);
        assert_eq!(calls, 81);
    }

    #[test]
    fn p1_discards_callback_transforms_between_placements() {
        let mut tiler = PathTiler::new(Canvas::new(20.0, 20.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).with_buffer(0);
        let mut seen = Vec::new();
        let mut draw = draw_fn(|t: &mut PathTiler<Canvas>| {
            seen.push(t.transform());
            t.rotate(33.0);
            t.scale(4.0, 4.0);
            t.save();
            Ok(())
        });
        tiler.tile_p1(&mut draw, &lattice).expect("valid lattice");

        for m in seen {
            assert_eq!(m.matrix2, DAffine2::IDENTITY.matrix2);
        }
        assert_eq!(tiler.depth(), 0);
        assert_eq!(tiler.transform(), DAffine2::IDENTITY);
    }

    #[test]
    fn p1_failure_propagates_and_leaves_stack_balanced() {
        let mut tiler = PathTiler::new(Canvas::new(30.0, 30.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).with_buffer(0);
        tiler.translate(1.0, 1.0);
        let before = tiler.transform();

        let mut calls = 0;
        let mut draw = draw_fn(|t: &mut PathTiler<Canvas>| {
            calls += 1;
            t.translate(50.0, 50.0);
            if calls == 3 {
                return Err(Error::Other("third tile".into()));
            }
            Ok(())
        });
        let err = tiler.tile_p1(&mut draw, &lattice).expect_err("draw fails");

        assert!(matches!(err, Error::Other(ref m) if m == "third tile"));
        assert_eq!(calls, 3);
        assert_eq!(tiler.depth(), 0);
        assert_eq!(tiler.transform(), before);
    }

    #[test]
    fn p1_rejects_invalid_lattice_before_drawing() {
        let mut tiler = PathTiler::new(Canvas::new(30.0, 30.0));
        let lattice = Lattice::new(DVec2::new(0.0, 10.0), DVec2::new(0.0, 10.0));
        let mut calls = 0;
        let mut draw = draw_fn(|_: &mut PathTiler<Canvas>| {
            calls += 1;
            Ok(())
        });
        let err = tiler.tile_p1(&mut draw, &lattice).expect_err("invalid");
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn p1_rejects_non_finite_surface() {
        let mut tiler = PathTiler::new(Canvas::new(f64::INFINITY, 30.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0));
        let mut draw = draw_fn(|_: &mut PathTiler<Canvas>| Ok(()));
        assert!(matches!(
            tiler.tile_p1(&mut draw, &lattice),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn p1_rejects_oversized_sweep() {
        let mut tiler = PathTiler::new(Canvas::new(1e300, 10.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0));
        let mut calls = 0;
        let mut draw = draw_fn(|_: &mut PathTiler<Canvas>| {
            calls += 1;
            Ok(())
        });
        let err = tiler.tile_p1(&mut draw, &lattice).expect_err("too large");
        assert!(matches!(err, Error::InvalidConfig(_)));

        // A lattice with a tiny basis on a normal surface is just as unbounded.
        let mut tiler = PathTiler::new(Canvas::new(100.0, 100.0));
        let tiny = Lattice::new(DVec2::new(1e-9, 0.0), DVec2::new(0.0, 10.0));
        assert!(matches!(
            tiler.tile_p1(&mut draw, &tiny),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn paths_accumulate_across_placements() {
        let mut tiler = PathTiler::new(Canvas::new(20.0, 10.0));
        let lattice = Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).with_buffer(0);
        let mut draw = draw_fn(|t: &mut PathTiler<Canvas>| {
            t.move_to(1.0, 1.0);
            t.line_to(2.0, 1.0)?;
            t.rel_line_to(0.0, 1.0)?;
            t.close_path()
        });
        tiler.tile_p1(&mut draw, &lattice).expect("valid lattice");

        assert_eq!(tiler.path_count(), 2);
        let paths = tiler.into_paths();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.is_closed() && p.len() == 4));
        // Two rows from the width estimate, stepped along vrow.
        let firsts: HashSet<_> = paths.iter().filter_map(|p| p.first()).map(key).collect();
        assert!(firsts.contains(&key(DVec2::new(1.0, 1.0))));
        assert!(firsts.contains(&key(DVec2::new(1.0, 11.0))));
    }

    #[test]
    fn tile_dispatches_by_group() {
        let mut tiler = PathTiler::new(Canvas::new(30.0, 30.0));
        let mut calls = 0;
        let mut draw = draw_fn(|_: &mut PathTiler<Canvas>| {
            calls += 1;
            Ok(())
        });
        let group = WallpaperGroup::P1(
            Lattice::new(DVec2::new(10.0, 0.0), DVec2::new(0.0, 10.0)).with_buffer(0),
        );
        assert_eq!(tiler.tile(&mut draw, &group).expect("valid"), 9);
        let placed = tiler
            .tile(&mut draw, &WallpaperGroup::Pmm { dx: 5.0, dy: 5.0 })
            .expect("valid");
        assert_eq!(placed, 9);
        assert_eq!(calls, 9 + 9 * 4);
    }
}
